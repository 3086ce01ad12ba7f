use crate::core::http::StatusEntry;
use crate::OutputFormat;
use serde_derive::Serialize;

/// A status entry together with the symbolic name it was looked up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedEntry<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub entry: &'a StatusEntry,
}

/// Renders one line of CLI output, without the trailing newline.
pub fn render_entry(
    name: &str,
    entry: &StatusEntry,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Plain => Ok(format!("{:<32} {}", name, entry)),
        OutputFormat::Json => serde_json::to_string(&NamedEntry { name, entry }),
    }
}
