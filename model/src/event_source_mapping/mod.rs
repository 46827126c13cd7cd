use serde::{self, Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::time::Duration;

/// Number of queue records handed to the backfill function per invocation.
pub const BACKFILL_BATCH_SIZE: i64 = 1000;

/// Longest the platform waits to fill a batch before invoking with a partial one.
pub const BACKFILL_MAXIMUM_BATCHING_WINDOW: Duration = Duration::from_secs(5);

/// The fixed (queue, function) pair a mapping is reconciled for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingTarget {
    pub event_source_arn: String,
    pub function_name: String,
}

/// Desired trigger parameters for a mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchingSettings {
    pub enabled: bool,
    pub batch_size: i64,
    pub maximum_batching_window: Duration,
}

impl Default for BatchingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            batch_size: BACKFILL_BATCH_SIZE,
            maximum_batching_window: BACKFILL_MAXIMUM_BATCHING_WINDOW,
        }
    }
}

impl BatchingSettings {
    /// The platform only accepts whole seconds for the batching window.
    pub fn maximum_batching_window_in_seconds(&self) -> i64 {
        i64::try_from(self.maximum_batching_window.as_secs()).unwrap_or(i64::MAX)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum EventSourceMappingState {
    Creating,
    Enabling,
    Enabled,
    Disabling,
    Disabled,
    Updating,
    Deleting,
    Other(String),
}

impl Display for EventSourceMappingState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let printable = match self {
            EventSourceMappingState::Creating => "Creating",
            EventSourceMappingState::Enabling => "Enabling",
            EventSourceMappingState::Enabled => "Enabled",
            EventSourceMappingState::Disabling => "Disabling",
            EventSourceMappingState::Disabled => "Disabled",
            EventSourceMappingState::Updating => "Updating",
            EventSourceMappingState::Deleting => "Deleting",
            EventSourceMappingState::Other(other) => other.as_str(),
        };
        write!(f, "{}", printable)
    }
}

impl From<&str> for EventSourceMappingState {
    fn from(value: &str) -> Self {
        match value {
            "Creating" => EventSourceMappingState::Creating,
            "Enabling" => EventSourceMappingState::Enabling,
            "Enabled" => EventSourceMappingState::Enabled,
            "Disabling" => EventSourceMappingState::Disabling,
            "Disabled" => EventSourceMappingState::Disabled,
            "Updating" => EventSourceMappingState::Updating,
            "Deleting" => EventSourceMappingState::Deleting,
            other => EventSourceMappingState::Other(other.to_owned()),
        }
    }
}

/// A queue-to-function trigger as reported by the platform.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventSourceMapping {
    pub uuid: String,
    pub event_source_arn: Option<String>,
    pub function_arn: Option<String>,
    pub state: Option<EventSourceMappingState>,
    pub batch_size: Option<i64>,
    pub maximum_batching_window_in_seconds: Option<i64>,
}

impl EventSourceMapping {
    /// `Enabling` counts: the platform is already converging towards enabled.
    pub fn is_enabled(&self) -> bool {
        matches!(
            self.state,
            Some(EventSourceMappingState::Enabled) | Some(EventSourceMappingState::Enabling)
        )
    }

    pub fn satisfies(&self, settings: &BatchingSettings) -> bool {
        self.is_enabled() == settings.enabled
            && self.batch_size == Some(settings.batch_size)
            && self.maximum_batching_window_in_seconds
                == Some(settings.maximum_batching_window_in_seconds())
    }
}
