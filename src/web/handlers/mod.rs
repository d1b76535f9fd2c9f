//! HTML page handlers for the web frontend.

mod dashboard;
mod fallback;
mod login;
mod logout;

pub use dashboard::{HomeTemplate, dashboard_handler};
pub use fallback::redirect_to_login;
pub use login::{
    LOGIN_REJECTED_MESSAGE, LOGIN_UNAVAILABLE_MESSAGE, LoginForm, LoginTemplate,
    MISSING_FIELDS_MESSAGE, login_page, login_submit,
};
pub use logout::logout_handler;
