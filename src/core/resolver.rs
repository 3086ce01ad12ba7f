use crate::core::http::codes::HTTPStatus;
use crate::core::http::extension::ServerStatus;
use crate::core::http::StatusEntry;
use crate::Error;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{debug, trace};

const EXPECTED_KEY_TYPE: &str = "string";

/// Anything a status name can be read out of.
///
/// Plain strings always succeed. Dynamic values (parsed TOML or JSON) only
/// succeed when they hold a string; any other variant is reported as
/// [`Error::InvalidInputType`] naming the type that was received.
pub trait StatusKey {
    fn status_name(&self) -> Result<&str, Error>;
}

impl StatusKey for str {
    fn status_name(&self) -> Result<&str, Error> {
        Ok(self)
    }
}

impl StatusKey for String {
    fn status_name(&self) -> Result<&str, Error> {
        Ok(self.as_str())
    }
}

impl StatusKey for toml::Value {
    fn status_name(&self) -> Result<&str, Error> {
        match self {
            toml::Value::String(name) => Ok(name.as_str()),
            other => Err(Error::InvalidInputType {
                expected: EXPECTED_KEY_TYPE,
                actual: other.type_str(),
            }),
        }
    }
}

impl StatusKey for serde_json::Value {
    fn status_name(&self) -> Result<&str, Error> {
        use serde_json::Value;
        let actual = match self {
            Value::String(name) => return Ok(name.as_str()),
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Err(Error::InvalidInputType {
            expected: EXPECTED_KEY_TYPE,
            actual,
        })
    }
}

static REGISTRY: OnceLock<StatusResolver> = OnceLock::new();

/// Name to entry registry over the standard and the extension tables.
///
/// Standard names take priority: the extension table is inserted first and
/// the standard table is laid over it, which is the same as consulting the
/// standard table and falling back to the extension table.
#[derive(Debug, Clone)]
pub struct StatusResolver {
    entries: HashMap<&'static str, StatusEntry>,
}

impl StatusResolver {
    pub fn new() -> StatusResolver {
        let mut entries = HashMap::with_capacity(HTTPStatus::ALL.len() + ServerStatus::ALL.len());
        for status in ServerStatus::ALL {
            entries.insert(status.name(), StatusEntry::from(*status));
        }
        for status in HTTPStatus::ALL {
            entries.insert(status.name(), StatusEntry::from(*status));
        }
        debug!(
            standard = HTTPStatus::ALL.len(),
            extension = ServerStatus::ALL.len(),
            "status registry built"
        );
        StatusResolver { entries }
    }

    /// Process-wide registry, built on first use.
    pub fn global() -> &'static StatusResolver {
        REGISTRY.get_or_init(StatusResolver::new)
    }

    pub fn resolve<K: StatusKey + ?Sized>(&self, key: &K) -> Result<StatusEntry, Error> {
        let name = key.status_name()?;
        match self.entries.get(name) {
            Some(entry) => {
                trace!(status = name, code = entry.code, "status resolved");
                Ok(*entry)
            }
            None => {
                trace!(status = name, "status not found");
                Err(Error::UnknownStatus(name.to_owned()))
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered statuses ordered by code, then by name.
    pub fn entries(&self) -> Vec<(&'static str, StatusEntry)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by(|a, b| a.1.code.cmp(&b.1.code).then(a.0.cmp(b.0)));
        entries
    }
}

impl Default for StatusResolver {
    fn default() -> StatusResolver {
        StatusResolver::new()
    }
}

/// Resolves a status name against the process-wide registry.
pub fn resolve<K: StatusKey + ?Sized>(key: &K) -> Result<StatusEntry, Error> {
    StatusResolver::global().resolve(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn standard_names_resolve_to_standard_entries() {
        let resolver = StatusResolver::new();
        for status in HTTPStatus::ALL {
            let entry = resolver.resolve(status.name()).unwrap();
            assert_eq!(entry.code, status.code());
            assert_eq!(entry.phrase, status.phrase());
        }
    }

    #[test]
    fn extension_names_fall_back() {
        let resolver = StatusResolver::new();
        let entry = resolver.resolve("CLIENT_CLOSED_REQUEST").unwrap();
        assert_eq!(
            entry,
            StatusEntry::new(
                499,
                "Client Closed Request",
                "Full description: Client Closed Request"
            )
        );
    }

    #[test]
    fn registry_holds_both_tables() {
        let resolver = StatusResolver::new();
        assert_eq!(resolver.len(), HTTPStatus::ALL.len() + ServerStatus::ALL.len());
        assert!(resolver.contains("UNKNOWN_ERROR"));
        assert!(resolver.contains("OK"));
        assert!(!resolver.contains("ok"));
    }

    #[test]
    fn entries_are_ordered_by_code_then_name() {
        let entries = StatusResolver::new().entries();
        assert_eq!(entries.first().map(|e| e.0), Some("CONTINUE"));
        assert_eq!(entries.last().map(|e| e.0), Some("INVALID_SSL_CERTIFICATE"));
        let at_505: Vec<_> = entries.iter().filter(|e| e.1.code == 505).map(|e| e.0).collect();
        assert_eq!(at_505, vec!["HTTP_VERSION_NOT_SUPPORTED", "VERSION_NOT_SUPPORTED"]);
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = StatusResolver::new().resolve("THIS_DOES_NOT_EXIST").unwrap_err();
        assert_eq!(err, Error::UnknownStatus("THIS_DOES_NOT_EXIST".to_owned()));
    }

    #[test]
    fn non_string_json_keys_are_rejected() {
        let resolver = StatusResolver::new();
        for (value, actual) in [
            (json!(404), "number"),
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!(["NOT_FOUND"]), "array"),
            (json!({"name": "NOT_FOUND"}), "object"),
        ] {
            assert_eq!(
                resolver.resolve(&value).unwrap_err(),
                Error::InvalidInputType {
                    expected: "string",
                    actual
                }
            );
        }
        assert_eq!(resolver.resolve(&json!("NOT_FOUND")).unwrap().code, 404);
    }

    #[test]
    fn non_string_toml_keys_are_rejected() {
        let resolver = StatusResolver::new();
        let err = resolver.resolve(&toml::Value::Integer(404)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInputType {
                expected: "string",
                actual: "integer"
            }
        );
        let gone = toml::Value::String("GONE".to_owned());
        assert_eq!(resolver.resolve(&gone).unwrap().code, 410);
    }

    #[test]
    fn global_registry_is_shared() {
        assert!(std::ptr::eq(StatusResolver::global(), StatusResolver::global()));
        assert_eq!(resolve("NOT_FOUND").unwrap(), resolve("NOT_FOUND").unwrap());
    }
}
