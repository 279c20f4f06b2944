use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow_warn_ms: Option<u64>,
}
