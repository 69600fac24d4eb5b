//! Persisted item tag values.
//!
//! Items carry an opaque key/value side-table that survives inventory moves,
//! stacking, and host serialization. Lookups are by explicit key presence;
//! a missing key is never silently defaulted.

use std::collections::HashMap;

/// A compound of named tag values.
pub type TagCompound = HashMap<String, TagValue>;

/// A single persisted tag value.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Int(i32),
    String(String),
}

impl TagValue {
    pub fn as_int(&self) -> Option<i32> {
        match self {
            TagValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i32> for TagValue {
    fn from(v: i32) -> Self {
        TagValue::Int(v)
    }
}

impl From<&str> for TagValue {
    fn from(v: &str) -> Self {
        TagValue::String(v.to_string())
    }
}

impl From<String> for TagValue {
    fn from(v: String) -> Self {
        TagValue::String(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        assert_eq!(TagValue::Int(3).as_int(), Some(3));
        assert_eq!(TagValue::Int(3).as_str(), None);
        assert_eq!(TagValue::String("a".into()).as_str(), Some("a"));
        assert_eq!(TagValue::String("a".into()).as_int(), None);
    }

    #[test]
    fn from_conversions() {
        assert_eq!(TagValue::from(5), TagValue::Int(5));
        assert_eq!(TagValue::from("x"), TagValue::String("x".into()));
        assert_eq!(TagValue::from(String::from("y")), TagValue::String("y".into()));
    }

    #[test]
    fn compound_presence() {
        let mut tags = TagCompound::new();
        tags.insert("width".into(), TagValue::Int(2));
        assert_eq!(tags.get("width").and_then(TagValue::as_int), Some(2));
        assert!(tags.get("height").is_none());
    }
}
