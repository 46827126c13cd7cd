use serde::{self, Deserialize};
use tracing_subscriber::filter::LevelFilter;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct GlobalConfig {
    /// Logs at `INFO` instead of `WARN`.
    #[serde(default = "default_verbose_mode")]
    pub verbose_mode: bool,
}

fn default_verbose_mode() -> bool {
    false
}

impl GlobalConfig {
    /// Level installed once at process start.
    pub fn level_filter(&self) -> LevelFilter {
        if self.verbose_mode {
            LevelFilter::INFO
        } else {
            LevelFilter::WARN
        }
    }
}
