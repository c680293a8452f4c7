//! Result indicators shown next to asynchronous actions.

use serde::Serialize;

/// State of a result cell such as the copy result or the connection test badge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum StatusIndicator {
    #[default]
    Idle,
    Loading,
    Success(String),
    Failure(String),
}

impl StatusIndicator {
    pub fn is_loading(&self) -> bool {
        matches!(self, StatusIndicator::Loading)
    }

    /// Text currently shown in the indicator, empty when idle or loading.
    pub fn message(&self) -> &str {
        match self {
            StatusIndicator::Success(message) | StatusIndicator::Failure(message) => message,
            StatusIndicator::Idle | StatusIndicator::Loading => "",
        }
    }
}
