pub mod codes;
pub mod extension;

use codes::HTTPStatus;
use extension::ServerStatus;
use serde_derive::Serialize;
use std::fmt;

/// A resolved status: numeric code, short phrase and a longer description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusEntry {
    pub code: u16,
    pub phrase: &'static str,
    pub description: &'static str,
}

impl StatusEntry {
    pub const fn new(code: u16, phrase: &'static str, description: &'static str) -> StatusEntry {
        StatusEntry {
            code,
            phrase,
            description,
        }
    }
}

impl From<HTTPStatus> for StatusEntry {
    fn from(status: HTTPStatus) -> StatusEntry {
        StatusEntry::new(status.code(), status.phrase(), status.description())
    }
}

impl From<ServerStatus> for StatusEntry {
    fn from(status: ServerStatus) -> StatusEntry {
        StatusEntry::new(status.code(), status.phrase(), status.description())
    }
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{} {}", self.code, self.phrase)
        } else {
            write!(f, "{} {}: {}", self.code, self.phrase, self.description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_omits_empty_description() {
        assert_eq!(StatusEntry::from(HTTPStatus::Locked).to_string(), "423 Locked");
        assert_eq!(
            StatusEntry::from(HTTPStatus::NotFound).to_string(),
            "404 Not Found: Nothing matches the given URI"
        );
    }

    #[test]
    fn serializes_all_three_fields() {
        let json = serde_json::to_value(StatusEntry::from(ServerStatus::UnknownError)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": 520,
                "phrase": "Unknown Error",
                "description": "Full description: Unknown Error",
            })
        );
    }
}
