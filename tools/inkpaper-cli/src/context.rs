//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use inkpaper_advisor::gemini::GeminiAdvisor;
use inkpaper_advisor::prompt::system_instruction;
use inkpaper_advisor::AdvisorSession;
use inkpaper_commerce::catalog::Catalog;
use inkpaper_commerce::storefront::Storefront;
use tracing::debug;

use crate::config::{StoreConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StoreConfig,
    /// Where the configuration came from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (StoreConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (StoreConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            debug!(path = %path.display(), "Loaded config");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(StoreConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = StoreConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The configured catalog, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.config.store.catalog {
            Some(path) => {
                let path = self.resolve_path(path);
                Catalog::load(&path)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))
            }
            None => Ok(Catalog::ink_and_paper()),
        }
    }

    /// A fresh storefront over the configured catalog and shipping policy.
    pub fn storefront(&self, seed: Option<u64>) -> Result<Storefront> {
        let store =
            Storefront::new(self.catalog()?).with_shipping(self.config.shipping_policy());
        Ok(match seed {
            Some(seed) => store.with_seed(seed),
            None => store,
        })
    }

    /// A fresh advisor conversation about `catalog`.
    pub fn advisor_session(&self, catalog: &Catalog) -> Result<AdvisorSession<GeminiAdvisor>> {
        let advisor = &self.config.advisor;
        let instruction = system_instruction(catalog, &advisor.assistant_name, &self.config.store.name)
            .context("Failed to build advisor instructions")?;
        Ok(AdvisorSession::new(
            GeminiAdvisor::new(self.config.gemini(), instruction),
            &advisor.assistant_name,
        ))
    }

    /// Resolve a path relative to the config file, or the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let candidate = PathBuf::from(path);
        if candidate.is_absolute() {
            return candidate;
        }
        match self.config_path.as_ref().and_then(|p| p.parent()) {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(candidate),
            _ => self.cwd.join(candidate),
        }
    }
}
