pub mod core;
pub mod logging;
pub mod output;

pub use crate::core::http::codes::HTTPStatus;
pub use crate::core::http::extension::ServerStatus;
pub use crate::core::http::StatusEntry;
pub use crate::core::resolver::{resolve, StatusKey, StatusResolver};
pub use crate::output::{render_entry, NamedEntry};

use serde_derive::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

pub const CONFIG_FILE: &str = "statusmap.toml";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Wrong status type passed, it should be {expected} but it was passed {actual}")]
    InvalidInputType {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("Received a non-existent error status: {0}")]
    UnknownStatus(String),
    #[error("Failed to read configuration file: {0}")]
    Config(String),
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StatusOptions {
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl StatusOptions {
    pub fn get_default() -> StatusOptions {
        StatusOptions {
            format: Some(OutputFormat::Plain),
            log_level: None,
        }
    }

    pub fn from_toml(content: &str) -> Result<StatusOptions, Error> {
        toml::from_str::<StatusOptions>(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reads options from `path`, or from `statusmap.toml` in the working
    /// directory when no path is given. Only the implicit file may be absent.
    pub fn load(path: Option<&Path>) -> Result<StatusOptions, Error> {
        match path {
            Some(path) => StatusOptions::read(path),
            None => StatusOptions::read_or_default(Path::new(CONFIG_FILE)),
        }
    }

    /// Reads and parses `path`; any I/O failure is a configuration error.
    pub fn read(path: &Path) -> Result<StatusOptions, Error> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        StatusOptions::from_toml(&content)
    }

    /// Like [`StatusOptions::read`], but a file that does not exist yields the defaults.
    pub fn read_or_default(path: &Path) -> Result<StatusOptions, Error> {
        match fs::read_to_string(path) {
            Ok(content) => StatusOptions::from_toml(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(StatusOptions::get_default()),
            Err(e) => Err(Error::Config(format!("{}: {}", path.display(), e))),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Plain)
    }
}

impl Default for StatusOptions {
    fn default() -> StatusOptions {
        StatusOptions::get_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_both_types() {
        let err = Error::InvalidInputType {
            expected: "string",
            actual: "integer",
        };
        let msg = err.to_string();
        assert!(msg.contains("string"));
        assert!(msg.contains("integer"));
    }

    #[test]
    fn options_parse_from_toml() {
        let options = StatusOptions::from_toml("format = \"json\"\nlog_level = \"debug\"").unwrap();
        assert_eq!(options.format(), OutputFormat::Json);
        assert_eq!(options.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn empty_options_fall_back_to_plain() {
        let options = StatusOptions::from_toml("").unwrap();
        assert_eq!(options.format, None);
        assert_eq!(options.format(), OutputFormat::Plain);
    }

    #[test]
    fn bad_options_are_config_errors() {
        assert!(matches!(
            StatusOptions::from_toml("format = \"yaml\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            StatusOptions::from_toml("colour = true"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn explicit_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "format = \"json\"\nlog_level = \"info\"\n").unwrap();
        let options = StatusOptions::load(Some(path.as_path())).unwrap();
        assert_eq!(options.format, Some(OutputFormat::Json));
        assert_eq!(options.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn absent_implicit_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let options = StatusOptions::read_or_default(&path).unwrap();
        assert_eq!(options, StatusOptions::get_default());
    }

    #[test]
    fn unreadable_implicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::create_dir(&path).unwrap();
        assert!(matches!(
            StatusOptions::read_or_default(&path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = Path::new("does/not/exist/statusmap.toml");
        assert!(matches!(StatusOptions::load(Some(path)), Err(Error::Config(_))));
    }
}
