//! Job metadata parsing.
//!
//! The dispatcher attaches an optional free-form metadata string to each
//! job. When present it is expected to be a JSON object carrying a voice
//! selector (`{"personality": "female"}` or `{"voice": "male"}`), but it
//! arrives from outside the trust boundary and may be malformed, encode a
//! non-object value, or name nothing useful. Every one of those cases is a
//! normal input condition, not an error: parsing classifies the blob into
//! an explicit outcome and the resolver pattern-matches on it.

use serde_json::Value;

/// Metadata fields recognized as voice selectors, checked in order.
const SELECTOR_FIELDS: [&str; 2] = ["personality", "voice"];

/// Classification of a job's raw metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataOutcome {
    /// No metadata was attached to the job.
    Absent,
    /// Metadata was present but is not valid JSON.
    Malformed,
    /// Metadata parsed but the top-level value is not an object.
    NotAnObject,
    /// Metadata is an object but carries no recognized selector field with
    /// a string value.
    NoSelector,
    /// A selector field named this profile. Existence in the registry is
    /// the resolver's concern, not the parser's.
    Selector(String),
}

/// Parses and classifies a job's optional metadata blob.
pub fn parse_metadata(raw: Option<&str>) -> MetadataOutcome {
    let raw = match raw {
        Some(raw) => raw,
        None => return MetadataOutcome::Absent,
    };

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return MetadataOutcome::Malformed,
    };

    let object = match value.as_object() {
        Some(object) => object,
        None => return MetadataOutcome::NotAnObject,
    };

    for field in SELECTOR_FIELDS {
        if let Some(Value::String(name)) = object.get(field) {
            return MetadataOutcome::Selector(name.clone());
        }
    }

    MetadataOutcome::NoSelector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_metadata() {
        assert_eq!(parse_metadata(None), MetadataOutcome::Absent);
    }

    #[test]
    fn malformed_json() {
        assert_eq!(parse_metadata(Some("{not valid json")), MetadataOutcome::Malformed);
        assert_eq!(parse_metadata(Some("")), MetadataOutcome::Malformed);
    }

    #[test]
    fn non_object_values() {
        assert_eq!(parse_metadata(Some("\"female\"")), MetadataOutcome::NotAnObject);
        assert_eq!(parse_metadata(Some("[1, 2]")), MetadataOutcome::NotAnObject);
        assert_eq!(parse_metadata(Some("null")), MetadataOutcome::NotAnObject);
    }

    #[test]
    fn personality_selector() {
        assert_eq!(
            parse_metadata(Some(r#"{"personality": "female"}"#)),
            MetadataOutcome::Selector("female".to_string())
        );
    }

    #[test]
    fn voice_selector() {
        assert_eq!(
            parse_metadata(Some(r#"{"voice": "male"}"#)),
            MetadataOutcome::Selector("male".to_string())
        );
    }

    #[test]
    fn personality_wins_over_voice() {
        assert_eq!(
            parse_metadata(Some(r#"{"voice": "male", "personality": "female"}"#)),
            MetadataOutcome::Selector("female".to_string())
        );
    }

    #[test]
    fn non_string_personality_falls_through_to_voice() {
        assert_eq!(
            parse_metadata(Some(r#"{"personality": 7, "voice": "male"}"#)),
            MetadataOutcome::Selector("male".to_string())
        );
    }

    #[test]
    fn object_without_selector() {
        assert_eq!(
            parse_metadata(Some(r#"{"job": "greet", "priority": 1}"#)),
            MetadataOutcome::NoSelector
        );
    }
}
