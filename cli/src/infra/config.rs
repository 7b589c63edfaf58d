//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::DoctorConfig;

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
///
/// An explicit path (from `--config` or `CSS_DOCTOR_CONFIG`) must exist; the
/// default `~/.css-doctor/config.yaml` is optional.
pub struct YamlConfigStore {
    explicit: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<DoctorConfig> {
        let path = self.path()?;
        if self.explicit.is_none() && !self.has_file()? {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(DoctorConfig::default());
        }
        tracing::debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: DoctorConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit {
            return Ok(path.clone());
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".css-doctor").join("config.yaml"))
    }

    fn has_file(&self) -> Result<bool> {
        Ok(self.path()?.is_file())
    }
}
