use std::sync::Once;

use log::LevelFilter;

/// Crates that are noisy at `info` and below. Capped at `warn` unless the
/// filter names them explicitly.
const NOISY_CRATES: &[&str] = &["wgpu_core", "wgpu_hal", "naga"];

/// Logger configuration.
///
/// `filter` uses the `env_logger` directive syntax, e.g.
/// `"info,ember_engine=debug"`. When unset, `RUST_LOG` is consulted, then
/// `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub default_level: LevelFilter,
    /// Cap GPU backend crates at `warn`.
    pub quiet_gpu: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            default_level: LevelFilter::Info,
            quiet_gpu: true,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Directive string handed to `env_logger`.
    fn directives(&self, env: Option<String>) -> String {
        let mut directives = self
            .filter
            .clone()
            .or(env)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| self.default_level.to_string().to_lowercase());

        if self.quiet_gpu {
            for name in NOISY_CRATES {
                if !directives.contains(name) {
                    directives.push_str(&format!(",{name}=warn"));
                }
            }
        }

        directives
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = config.directives(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&directives)
            .write_style(config.write_style)
            .format_timestamp_millis();

        if let Err(e) = builder.try_init() {
            eprintln!("logger already installed: {e}");
            return;
        }

        log::debug!("logging initialized ({directives})");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_env() {
        let config = LoggingConfig {
            filter: Some("debug".into()),
            quiet_gpu: false,
            ..LoggingConfig::default()
        };
        assert_eq!(config.directives(Some("trace".into())), "debug");
    }

    #[test]
    fn env_then_default_level() {
        let config = LoggingConfig {
            quiet_gpu: false,
            ..LoggingConfig::default()
        };
        assert_eq!(config.directives(Some("warn".into())), "warn");
        assert_eq!(config.directives(None), "info");
        assert_eq!(config.directives(Some("  ".into())), "info");
    }

    #[test]
    fn gpu_crates_are_capped_unless_named() {
        let config = LoggingConfig {
            filter: Some("debug,naga=info".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(
            config.directives(None),
            "debug,naga=info,wgpu_core=warn,wgpu_hal=warn"
        );
    }
}
