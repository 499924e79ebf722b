use crate::settings::Log;
use anyhow::{Result, anyhow};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

const BOOTSTRAP_FILTER: &str = "info";

pub struct LogConfig {
    pub filter: String,
}

impl LogConfig {
    fn to_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.filter)
            .map_err(|e| anyhow!("bad log filter {:?}: {e}", self.filter))
    }
}

impl From<&Log> for LogConfig {
    fn from(log: &Log) -> Self {
        Self {
            filter: log.filter.clone(),
        }
    }
}

/// Stderr diagnostics. `RUST_LOG`, when set, wins over the settings file.
pub struct Logger {
    reload_handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl Logger {
    pub fn new_bootstrap() -> Self {
        let (filter, from_env) = match EnvFilter::try_from_default_env() {
            Ok(filter) => (filter, true),
            Err(_) => (EnvFilter::new(BOOTSTRAP_FILTER), false),
        };
        let (filter, reload_handle) = reload::Layer::new(filter);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .init();

        Self {
            reload_handle,
            from_env,
        }
    }

    pub fn reload_from_config(&self, config: &LogConfig) -> Result<()> {
        let filter = config.to_filter()?;
        if self.from_env {
            return Ok(());
        }
        self.reload_handle.reload(filter).map_err(|e| anyhow!(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_filters_are_validated() {
        let ok = LogConfig::from(&Log {
            filter: "flog=trace,warn".into(),
        });
        assert!(ok.to_filter().is_ok());

        let bad = LogConfig {
            filter: "flog=loudest".into(),
        };
        assert!(bad.to_filter().is_err());
    }
}
