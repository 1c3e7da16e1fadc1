//! JSON output formatting.

use anyhow::Result;
use serde::Serialize;

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encore_core::{ErrorKind, FetchedResource};

    #[test]
    fn test_compact_and_pretty() {
        let value = serde_json::json!({"a": 1});
        assert_eq!(JsonFormatter::new(false).format(&value).unwrap(), r#"{"a":1}"#);
        assert!(JsonFormatter::new(true).format(&value).unwrap().contains('\n'));
    }

    #[test]
    fn test_failure_serializes_cause() {
        let failure: FetchedResource<u32> = FetchedResource::failure(ErrorKind::ResourceNotFound);
        let json = JsonFormatter::new(false).format(&failure).unwrap();
        assert!(json.contains("RESOURCE_NOT_FOUND"));
    }
}
