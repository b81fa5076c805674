use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, SplashConfig, UiConfig};

/// On-disk shape of the config file; every key is optional and merged over
/// the defaults.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub splash: Option<FileSplashConfig>,
    pub ui: Option<FileUiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(splash) = self.splash {
            splash.merge_into(&mut config.splash);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSplashConfig {
    pub delay_ms: Option<u64>,
}

impl FileSplashConfig {
    fn merge_into(self, config: &mut SplashConfig) {
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub notice_duration_ms: Option<u64>,
    pub tick_ms: Option<u64>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(notice_duration_ms) = self.notice_duration_ms {
            config.notice_duration_ms = notice_duration_ms;
        }

        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }
    }
}
