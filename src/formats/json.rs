//! JSON rendering of the parsed record

use super::registry::{FormatError, Formatter};
use crate::record::{ParseOptions, PhysioLog};

/// Serialize a record to JSON
pub fn to_json(log: &PhysioLog, pretty: bool) -> Result<String, FormatError> {
    let result = if pretty {
        serde_json::to_string_pretty(log)
    } else {
        serde_json::to_string(log)
    };
    result.map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub struct JsonFormatter {
    pub pretty: bool,
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, source: &str, options: ParseOptions) -> Result<String, FormatError> {
        let log = PhysioLog::parse_with(source, options)?;
        to_json(&log, self.pretty)
    }

    fn description(&self) -> &str {
        "The parsed record as JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::PhysioSources;
    use serde_json::Value;

    #[test]
    fn test_json_carries_record_fields() {
        let log = PhysioSources::load("sample_basic").unwrap();
        let value: Value = serde_json::from_str(&to_json(&log, false).unwrap()).unwrap();

        assert_eq!(value["n_params"], 4);
        assert_eq!(value["rate"], 20);
        assert_eq!(value["params"], serde_json::json!([1, 8, 20, 2]));
        assert_eq!(value["info"][0], "LOGVERSION 102");
        assert_eq!(value["puls"]["per"], 823);
        assert_eq!(value["ext2"], Value::Null);
        assert_eq!(value["mdh"]["start"], 36632877);
        assert_eq!(value["mdh"]["start_time"]["hour"], 10);
    }

    #[test]
    fn test_pretty_json_is_multiline() {
        let log = PhysioSources::load("sample_basic").unwrap();
        let compact = to_json(&log, false).unwrap();
        let pretty = to_json(&log, true).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains("\n  \"rate\": 20"));
    }
}
