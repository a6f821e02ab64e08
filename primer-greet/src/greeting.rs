//! Time-of-day greetings with input validation

use primer_core::{PrimerError, Value};
use serde::{Deserialize, Serialize};

/// Time-of-day bucket for greeting prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Daypart {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Daypart {
    /// Bucket an hour of day. Hours ≥ 24 normalize mod 24.
    pub fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            5..=11 => Daypart::Morning,
            12..=17 => Daypart::Afternoon,
            18..=21 => Daypart::Evening,
            _ => Daypart::Night,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Daypart::Morning => "Good morning",
            Daypart::Afternoon => "Good afternoon",
            Daypart::Evening => "Good evening",
            Daypart::Night => "Good night",
        }
    }
}

/// Format a greeting for `name` at the given hour.
///
/// The name must be a `Value::Text` (TYPE_ERROR otherwise) and must not
/// be blank after trimming (EMPTY_VALUE). Surrounding whitespace is
/// trimmed before the name is embedded.
pub fn greet(name: &Value, hour: u32) -> Result<String, PrimerError> {
    let text = name
        .as_text()
        .ok_or_else(|| PrimerError::type_error("Text", name.type_name()))?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PrimerError::empty_value("Name"));
    }

    Ok(format!("{}, {}! 👋", Daypart::from_hour(hour).prefix(), trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_core::codes;

    #[test]
    fn test_daypart_boundaries() {
        assert_eq!(Daypart::from_hour(4), Daypart::Night);
        assert_eq!(Daypart::from_hour(5), Daypart::Morning);
        assert_eq!(Daypart::from_hour(11), Daypart::Morning);
        assert_eq!(Daypart::from_hour(12), Daypart::Afternoon);
        assert_eq!(Daypart::from_hour(17), Daypart::Afternoon);
        assert_eq!(Daypart::from_hour(18), Daypart::Evening);
        assert_eq!(Daypart::from_hour(21), Daypart::Evening);
        assert_eq!(Daypart::from_hour(22), Daypart::Night);
        assert_eq!(Daypart::from_hour(0), Daypart::Night);
    }

    #[test]
    fn test_hour_normalizes() {
        assert_eq!(Daypart::from_hour(29), Daypart::Morning);
    }

    #[test]
    fn test_greet_basic() {
        let greeting = greet(&Value::from("Alice"), 9).unwrap();
        assert_eq!(greeting, "Good morning, Alice! 👋");
    }

    #[test]
    fn test_greet_each_prefix() {
        for (hour, prefix) in [
            (8, "Good morning"),
            (14, "Good afternoon"),
            (19, "Good evening"),
            (23, "Good night"),
        ] {
            let greeting = greet(&Value::from("World"), hour).unwrap();
            assert!(greeting.starts_with(prefix), "hour {}: {}", hour, greeting);
        }
    }

    #[test]
    fn test_greet_trims_whitespace() {
        let greeting = greet(&Value::from("  John Doe  "), 14).unwrap();
        assert!(greeting.contains("John Doe"));
        assert!(!greeting.contains("  John"));
    }

    #[test]
    fn test_greet_rejects_non_text() {
        for value in [Value::Number(123), Value::Bool(true), Value::Null] {
            let err = greet(&value, 9).unwrap_err();
            assert_eq!(err.code, codes::TYPE_ERROR, "value {:?}", value);
        }
    }

    #[test]
    fn test_greet_rejects_blank() {
        for name in ["", "   ", "\t\n", "          "] {
            let err = greet(&Value::from(name), 9).unwrap_err();
            assert_eq!(err.code, codes::EMPTY_VALUE, "name {:?}", name);
        }
    }
}
