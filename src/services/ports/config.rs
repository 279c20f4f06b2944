use crate::services::ports::settings::ConsoleSettings;

#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    pub suggest_on_not_found: bool,
    pub slow_warn_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            suggest_on_not_found: true,
            slow_warn_ms: 1000,
        }
    }
}

impl ConsoleConfig {
    /// 用设置文件中出现的字段覆盖默认值
    pub fn with_settings(mut self, settings: &ConsoleSettings) -> Self {
        if let Some(suggestions) = settings.suggestions {
            self.suggest_on_not_found = suggestions;
        }
        if let Some(ms) = settings.slow_warn_ms {
            self.slow_warn_ms = ms;
        }
        self
    }
}
