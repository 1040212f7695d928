use crate::presentation::DisplayOptions;
use crate::types::OutputFormat;
use anyhow::Result;
use hourscope_runtime::{Config, HttpApi};
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything a handler needs that comes from flags and the config file.
pub struct ExecutionContext {
    pub config: Config,
    config_path: PathBuf,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(config: Config, config_path: PathBuf, format: OutputFormat) -> Self {
        Self {
            config,
            config_path,
            format,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn api(&self) -> Result<Arc<HttpApi>> {
        let api = HttpApi::new(&self.config.api_url, self.config.request_timeout())?;
        Ok(Arc::new(api))
    }

    pub fn runtime(&self) -> Result<tokio::runtime::Runtime> {
        Ok(tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?)
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            enable_color: self.format == OutputFormat::Plain && std::io::stdout().is_terminal(),
            theme: self.config.theme,
        }
    }

    pub fn timezone_or_default(&self, timezone: Option<String>) -> String {
        timezone.unwrap_or_else(|| self.config.timezone.clone())
    }
}
