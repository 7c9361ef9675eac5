//! Positional argument lists.
//!
//! A nearest declaration such as `regular(values, radius, Ni, Nj)` is carried
//! as an [`Arguments`] list. Position 0 always names the strategy type; the
//! meaning of the remaining positions belongs to each variant. Names are
//! resolved through the [`Handle`] when a numeric value is requested.

use serde::{Deserialize, Serialize};

use crate::error::{NearestError, Result};
use crate::handle::Handle;

/// A single argument expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Argument {
    /// Integer literal
    Long(i64),
    /// Floating point literal
    Double(f64),
    /// Name of a key (or of a type at position 0)
    Name(String),
}

/// An ordered list of argument expressions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments {
    items: Vec<Argument>,
}

impl Arguments {
    pub fn new(items: Vec<Argument>) -> Self {
        Self { items }
    }

    /// Build a list where every position is a name
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: names.into_iter().map(|n| Argument::Name(n.into())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Argument> {
        self.items.get(index)
    }

    /// Return a copy with position 0 replaced by `type_name`
    pub fn with_type(&self, type_name: &str) -> Self {
        let mut items = self.items.clone();
        match items.first_mut() {
            Some(first) => *first = Argument::Name(type_name.to_string()),
            None => items.push(Argument::Name(type_name.to_string())),
        }
        Self { items }
    }

    /// The name at `index`, if that position holds a name
    pub fn get_name(&self, index: usize) -> Option<&str> {
        match self.items.get(index) {
            Some(Argument::Name(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    /// The name at `index`, or an error naming the position
    pub fn get_name_checked(&self, index: usize) -> Result<&str> {
        match self.items.get(index) {
            Some(Argument::Name(name)) => Ok(name.as_str()),
            Some(other) => Err(NearestError::InvalidArgument {
                param: format!("argument {}", index),
                message: format!("expected a name, got {:?}", other),
            }),
            None => Err(NearestError::MissingArgument { index }),
        }
    }

    /// Evaluate position `index` as an integer
    pub fn get_long(&self, handle: &Handle, index: usize) -> Result<i64> {
        match self.items.get(index) {
            Some(Argument::Long(v)) => Ok(*v),
            Some(Argument::Name(key)) => handle.get_long(key),
            Some(Argument::Double(v)) => Err(NearestError::InvalidArgument {
                param: format!("argument {}", index),
                message: format!("expected an integer, got {}", v),
            }),
            None => Err(NearestError::MissingArgument { index }),
        }
    }

    /// Evaluate position `index` as a floating point value
    pub fn get_double(&self, handle: &Handle, index: usize) -> Result<f64> {
        match self.items.get(index) {
            Some(Argument::Double(v)) => Ok(*v),
            Some(Argument::Long(v)) => Ok(*v as f64),
            Some(Argument::Name(key)) => handle.get_double(key),
            None => Err(NearestError::MissingArgument { index }),
        }
    }
}

impl From<Vec<Argument>> for Arguments {
    fn from(items: Vec<Argument>) -> Self {
        Self::new(items)
    }
}
