use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phase of the managed resource, as reported by the oracle.
///
/// Anything outside the three known phases is kept verbatim in `Unknown`
/// so it can be logged and echoed back instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceState {
    Sleeping,
    Starting,
    Running,
    Unknown(String),
}

impl ResourceState {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceState::Sleeping => "Sleeping",
            ResourceState::Starting => "Starting",
            ResourceState::Running => "Running",
            ResourceState::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ResourceState::Unknown(_))
    }
}

impl From<String> for ResourceState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Sleeping" => ResourceState::Sleeping,
            "Starting" => ResourceState::Starting,
            "Running" => ResourceState::Running,
            _ => ResourceState::Unknown(raw),
        }
    }
}

impl From<&str> for ResourceState {
    fn from(raw: &str) -> Self {
        raw.to_string().into()
    }
}

impl From<ResourceState> for String {
    fn from(state: ResourceState) -> Self {
        match state {
            ResourceState::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
