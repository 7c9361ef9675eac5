//! Message handles and their shared context.
//!
//! A [`Handle`] is the in-memory view of one decoded message: a flat set of
//! named keys plus the nearest declaration that came with it. The
//! [`Context`] it carries is shared between handles and tags every log event
//! emitted on their behalf.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::arguments::Arguments;
use crate::error::{NearestError, Result};
use crate::logging::generate_context_id;

/// Shared state for a family of handles
#[derive(Debug, Clone)]
pub struct Context {
    /// Identifier attached to log events
    pub id: String,
}

impl Context {
    /// Create a context with a fresh identifier
    pub fn new() -> Self {
        Self {
            id: generate_context_id(),
        }
    }

    /// Create a new Context wrapped in an Arc for shared ownership
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

/// Possible key values in a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyValue {
    /// Integer key
    Long(i64),
    /// Floating point key
    Double(f64),
    /// String key
    Text(String),
    /// Array of integers
    LongArray(Vec<i64>),
    /// Array of floating point values
    DoubleArray(Vec<f64>),
}

/// A decoded message
#[derive(Debug, Clone)]
pub struct Handle {
    /// Shared context
    pub context: Arc<Context>,
    keys: HashMap<String, KeyValue>,
    nearest: Option<Arguments>,
}

impl Handle {
    /// Create an empty handle bound to `context`
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            context,
            keys: HashMap::new(),
            nearest: None,
        }
    }

    /// Create a handle from an existing key set
    pub fn with_keys(context: Arc<Context>, keys: HashMap<String, KeyValue>) -> Self {
        Self {
            context,
            keys,
            nearest: None,
        }
    }

    /// Set a key, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: KeyValue) -> &mut Self {
        self.keys.insert(key.into(), value);
        self
    }

    /// Attach the message's own nearest declaration
    pub fn set_nearest_arguments(&mut self, args: Arguments) -> &mut Self {
        self.nearest = Some(args);
        self
    }

    /// The nearest declaration carried by the message, if any
    pub fn nearest_arguments(&self) -> Option<&Arguments> {
        self.nearest.as_ref()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Get a raw key value
    pub fn get(&self, key: &str) -> Option<&KeyValue> {
        self.keys.get(key)
    }

    fn get_checked(&self, key: &str) -> Result<&KeyValue> {
        self.keys.get(key).ok_or_else(|| NearestError::NotFound {
            key: key.to_string(),
        })
    }

    /// Get an integer key
    pub fn get_long(&self, key: &str) -> Result<i64> {
        match self.get_checked(key)? {
            KeyValue::Long(v) => Ok(*v),
            _ => Err(NearestError::WrongType {
                key: key.to_string(),
                expected: "long",
            }),
        }
    }

    /// Get a floating point key; integer keys are widened
    pub fn get_double(&self, key: &str) -> Result<f64> {
        match self.get_checked(key)? {
            KeyValue::Double(v) => Ok(*v),
            KeyValue::Long(v) => Ok(*v as f64),
            _ => Err(NearestError::WrongType {
                key: key.to_string(),
                expected: "double",
            }),
        }
    }

    /// Get a string key
    pub fn get_string(&self, key: &str) -> Result<&str> {
        match self.get_checked(key)? {
            KeyValue::Text(v) => Ok(v.as_str()),
            _ => Err(NearestError::WrongType {
                key: key.to_string(),
                expected: "string",
            }),
        }
    }

    /// Get an integer array key
    pub fn get_long_array(&self, key: &str) -> Result<&[i64]> {
        match self.get_checked(key)? {
            KeyValue::LongArray(v) => Ok(v.as_slice()),
            _ => Err(NearestError::WrongType {
                key: key.to_string(),
                expected: "long array",
            }),
        }
    }

    /// Get a floating point array key; integer arrays are widened
    pub fn get_double_array(&self, key: &str) -> Result<Vec<f64>> {
        match self.get_checked(key)? {
            KeyValue::DoubleArray(v) => Ok(v.clone()),
            KeyValue::LongArray(v) => Ok(v.iter().map(|&x| x as f64).collect()),
            _ => Err(NearestError::WrongType {
                key: key.to_string(),
                expected: "double array",
            }),
        }
    }

    /// Number of elements in an array key, without copying it
    pub fn get_array_len(&self, key: &str) -> Result<usize> {
        match self.get_checked(key)? {
            KeyValue::DoubleArray(v) => Ok(v.len()),
            KeyValue::LongArray(v) => Ok(v.len()),
            _ => Err(NearestError::WrongType {
                key: key.to_string(),
                expected: "array",
            }),
        }
    }

    /// Number of keys in the message
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> Handle {
        let mut h = Handle::new(Context::new_shared());
        h.set("Ni", KeyValue::Long(4))
            .set("radius", KeyValue::Double(6371229.0))
            .set("gridType", KeyValue::Text("regular_ll".to_string()))
            .set("pl", KeyValue::LongArray(vec![2, 4, 2]))
            .set("values", KeyValue::DoubleArray(vec![1.0, 2.0]));
        h
    }

    #[test]
    fn test_typed_lookup() {
        let h = handle();
        assert_eq!(h.get_long("Ni").unwrap(), 4);
        assert_eq!(h.get_double("radius").unwrap(), 6371229.0);
        assert_eq!(h.get_double("Ni").unwrap(), 4.0);
        assert_eq!(h.get_string("gridType").unwrap(), "regular_ll");
        assert_eq!(h.get_long_array("pl").unwrap(), &[2, 4, 2]);
        assert_eq!(h.get_double_array("pl").unwrap(), vec![2.0, 4.0, 2.0]);
        assert_eq!(h.get_double_array("values").unwrap(), vec![1.0, 2.0]);
        assert_eq!(h.get_array_len("values").unwrap(), 2);
        assert_eq!(h.get_array_len("pl").unwrap(), 3);
    }

    #[test]
    fn test_lookup_errors() {
        let h = handle();
        assert!(matches!(
            h.get_long("Nj"),
            Err(NearestError::NotFound { .. })
        ));
        assert!(matches!(
            h.get_long("radius"),
            Err(NearestError::WrongType { .. })
        ));
        assert!(matches!(
            h.get_double_array("gridType"),
            Err(NearestError::WrongType { .. })
        ));
        assert!(matches!(
            h.get_array_len("Ni"),
            Err(NearestError::WrongType { .. })
        ));
    }

    #[test]
    fn test_key_value_serialization() {
        let json = serde_json::to_string(&KeyValue::Long(3)).unwrap();
        assert_eq!(json, "3");

        let value: KeyValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(value, KeyValue::Double(2.5));

        let value: KeyValue = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(value, KeyValue::LongArray(vec![1, 2]));

        let value: KeyValue = serde_json::from_str("[1.5, 2]").unwrap();
        assert_eq!(value, KeyValue::DoubleArray(vec![1.5, 2.0]));
    }

    #[test]
    fn test_contexts_are_distinct() {
        let a = Context::new();
        let b = Context::new();
        assert_ne!(a.id, b.id);
    }
}
