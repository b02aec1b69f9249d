//! Runtime settings for the command-line tool.
//!
//! Read from environment variables; `main` loads a `.env` file first with
//! `dotenv`, so either source works.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Path of the log4rs configuration file.
pub const ENV_LOG_CONFIG: &str = "NETOVERLAP_LOG_CONFIG";
/// Output format, `text` or `json`.
pub const ENV_OUTPUT: &str = "NETOVERLAP_OUTPUT";
/// Color mode, `auto`, `always` or `never`.
pub const ENV_COLOR: &str = "NETOVERLAP_COLOR";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bare status token or error message.
    #[default]
    Text,
    /// One JSON object per run.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("invalid {ENV_OUTPUT} value: {other} (expected text or json)")),
        }
    }
}

/// Whether error messages are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Leave the decision to `colored` (`NO_COLOR`, `CLICOLOR`, terminal detection).
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Apply the choice to the process-wide `colored` switch.
    pub fn apply(&self) {
        match self {
            ColorChoice::Auto => colored::control::unset_override(),
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(format!(
                "invalid {ENV_COLOR} value: {other} (expected auto, always or never)"
            )),
        }
    }
}

/// Settings for one run of the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_config: PathBuf,
    pub output: OutputFormat,
    pub color: ColorChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            output: OutputFormat::default(),
            color: ColorChoice::default(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Settings, Box<dyn Error>> {
        Settings::from_vars(|key| std::env::var(key).ok())
    }

    /// Read settings through a variable lookup; unset or empty values keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Settings, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(path) = get(ENV_LOG_CONFIG) {
            settings.log_config = PathBuf::from(path);
        }
        if let Some(output) = get(ENV_OUTPUT) {
            settings.output = output.trim().parse()?;
        }
        if let Some(color) = get(ENV_COLOR) {
            settings.color = color.trim().parse()?;
        }

        log::debug!("Settings: {settings}");
        Ok(settings)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "log_config={}, output={:?}, color={:?}",
            self.log_config.display(),
            self.output,
            self.color
        )
    }
}
