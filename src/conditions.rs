// SPDX-License-Identifier: MIT

//! Parsing of the `where` conditions field
//!
//! Users type conditions as `a:1, b:0`. The text is never validated: keys are
//! trimmed, values are coerced with integer-prefix semantics, and anything
//! that does not start like a number becomes [`ConditionValue::NotANumber`]
//! and is forwarded to the service as-is.

use serde::{Serialize, Serializer};
use std::fmt;

/// Value assigned to a variable in a `where` condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionValue {
    Int(i64),
    /// Input that did not start with a number; serialized as `null`
    NotANumber,
}

impl ConditionValue {
    /// Coerce a string with integer-prefix semantics.
    ///
    /// Leading whitespace and a sign are allowed, `0x`/`0X` switches to hex,
    /// and parsing stops at the first character that is not a digit. A digit
    /// run too large for `i64` saturates to `i64::MAX`/`i64::MIN`.
    pub fn coerce(input: &str) -> Self {
        let s = input.trim_start();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (radix, digits) = match s.get(..2) {
            Some("0x") | Some("0X") => (16, &s[2..]),
            _ => (10, s),
        };

        let end = digits
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(digits.len());
        if end == 0 {
            return Self::NotANumber;
        }

        // Every char is a valid digit here, so the only failure is overflow
        match i64::from_str_radix(&digits[..end], radix) {
            Ok(n) if negative => Self::Int(-n),
            Ok(n) => Self::Int(n),
            Err(_) if negative => Self::Int(i64::MIN),
            Err(_) => Self::Int(i64::MAX),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::NotANumber => None,
        }
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::NotANumber => f.write_str("NaN"),
        }
    }
}

impl Serialize for ConditionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::NotANumber => serializer.serialize_none(),
        }
    }
}

/// Ordered mapping from variable name to its assigned value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conditions {
    entries: Vec<(String, ConditionValue)>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key:value` pairs separated by commas.
    ///
    /// A repeated key keeps its first position and takes the last value. A
    /// pair without a colon maps its key to `NotANumber`.
    pub fn parse(input: &str) -> Self {
        let mut conditions = Self::new();
        for pair in input.split(',') {
            let pair = pair.trim();
            let (key, value) = match pair.split_once(':') {
                Some((key, value)) => (key.trim(), ConditionValue::coerce(value.trim())),
                None => (pair, ConditionValue::NotANumber),
            };
            conditions.insert(key, value);
        }
        conditions
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ConditionValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<ConditionValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ConditionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Serialize for Conditions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_simple_pairs() {
        let conditions = Conditions::parse("a:1, b:0");
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions.get("a"), Some(ConditionValue::Int(1)));
        assert_eq!(conditions.get("b"), Some(ConditionValue::Int(0)));
    }

    #[test]
    fn test_parse_trims_keys_and_values() {
        let conditions = Conditions::parse("  a :  1 ,\tb:0  ");
        let keys: Vec<&str> = conditions.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(conditions.get("a"), Some(ConditionValue::Int(1)));
    }

    #[test]
    fn test_non_numeric_value_is_forwarded_as_nan() {
        let conditions = Conditions::parse("a:yes");
        assert_eq!(conditions.get("a"), Some(ConditionValue::NotANumber));
        assert_eq!(serde_json::to_value(&conditions).unwrap(), json!({"a": null}));
    }

    #[test]
    fn test_missing_colon_maps_to_nan() {
        let conditions = Conditions::parse("a");
        assert_eq!(conditions.get("a"), Some(ConditionValue::NotANumber));
    }

    #[test]
    fn test_duplicate_key_keeps_position_and_last_value() {
        let conditions = Conditions::parse("a:1, b:0, a:0");
        let pairs: Vec<(&str, ConditionValue)> = conditions.iter().collect();
        assert_eq!(
            pairs,
            vec![("a", ConditionValue::Int(0)), ("b", ConditionValue::Int(0))]
        );
    }

    #[test]
    fn test_coerce_integer_prefix() {
        assert_eq!(ConditionValue::coerce("12abc"), ConditionValue::Int(12));
        assert_eq!(ConditionValue::coerce("-3"), ConditionValue::Int(-3));
        assert_eq!(ConditionValue::coerce("+7"), ConditionValue::Int(7));
        assert_eq!(ConditionValue::coerce("0x1f"), ConditionValue::Int(31));
        assert_eq!(ConditionValue::coerce("1.9"), ConditionValue::Int(1));
        assert_eq!(ConditionValue::coerce(""), ConditionValue::NotANumber);
        assert_eq!(ConditionValue::coerce("-"), ConditionValue::NotANumber);
        assert_eq!(ConditionValue::coerce("0x"), ConditionValue::NotANumber);
    }

    #[test]
    fn test_coerce_saturates_on_overflow() {
        assert_eq!(
            ConditionValue::coerce("99999999999999999999"),
            ConditionValue::Int(i64::MAX)
        );
        assert_eq!(
            ConditionValue::coerce("-99999999999999999999"),
            ConditionValue::Int(i64::MIN)
        );
        assert_eq!(
            ConditionValue::coerce("-9223372036854775808"),
            ConditionValue::Int(i64::MIN)
        );
    }

    #[test]
    fn test_wire_order_matches_input_order() {
        let conditions = Conditions::parse("z:1, a:0, m:1");
        let wire = serde_json::to_string(&conditions).unwrap();
        assert_eq!(wire, r#"{"z":1,"a":0,"m":1}"#);
    }
}
