//! Dashboard view state and the card models the template renders.

use crate::domain::entities::{Container, Device};
use crate::error::ApiError;

/// Fixed message shown whenever the container list cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load containers";

/// Observable states of the dashboard.
///
/// `Loading` is the only state with an outgoing transition; see
/// [`DashboardState::settle`]. Page responses are rendered after the fetch
/// settles, so a full page never shows `Loading`; the template still has a
/// branch for it so that every state renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Failed(&'static str),
    Loaded(Vec<Container>),
    Empty,
}

impl DashboardState {
    /// Applies the outcome of the container fetch.
    ///
    /// A state that has already settled ignores further results.
    pub fn settle(self, result: Result<Vec<Container>, ApiError>) -> Self {
        if self != Self::Loading {
            return self;
        }

        match result {
            Ok(containers) if containers.is_empty() => Self::Empty,
            Ok(containers) => Self::Loaded(containers),
            Err(_) => Self::Failed(LOAD_FAILED_MESSAGE),
        }
    }

    /// Cards to render; empty unless the state is `Loaded`.
    pub fn cards(&self) -> Vec<ContainerCard> {
        match self {
            Self::Loaded(containers) => containers.iter().map(ContainerCard::from).collect(),
            _ => Vec::new(),
        }
    }
}

/// One container, flattened for the template.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerCard {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub kind: i64,
    /// `border-left` declaration when the container has a color.
    pub border: Option<String>,
    pub devices: Vec<DeviceLine>,
}

/// One device row under a container card.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceLine {
    pub name: String,
    pub imei: String,
    /// `"<environment>: <unit symbol>"` when the device reports one.
    pub reading: Option<String>,
}

impl From<&Container> for ContainerCard {
    fn from(container: &Container) -> Self {
        Self {
            id: container.id,
            name: container.name.clone(),
            address: container.address.clone(),
            kind: container.kind,
            border: container
                .color
                .as_deref()
                .filter(|color| !color.is_empty())
                .map(|color| format!("border-left: 4px solid {color}")),
            devices: container.devices.iter().map(DeviceLine::from).collect(),
        }
    }
}

impl From<&Device> for DeviceLine {
    fn from(device: &Device) -> Self {
        Self {
            name: device.name.clone(),
            imei: device.imei.clone(),
            reading: device
                .environment
                .as_ref()
                .map(|environment| format!("{}: {}", environment.name, environment.unit_symbol())),
        }
    }
}
