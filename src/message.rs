//! Message loading.
//!
//! Messages are read from a JSON description of their keys and nearest
//! declaration:
//!
//! ```json
//! {
//!   "keys": { "Ni": 4, "Nj": 3, "radius": 6371229.0, "values": [..] },
//!   "nearest": ["regular", "values", "radius", "Ni", "Nj"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::arguments::Arguments;
use crate::error::{NearestError, Result};
use crate::handle::{Context, Handle, KeyValue};

/// On-disk form of a message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageFile {
    /// Message keys
    #[serde(default)]
    pub keys: HashMap<String, KeyValue>,

    /// Nearest declaration; position 0 names the type
    #[serde(default)]
    pub nearest: Option<Arguments>,
}

impl MessageFile {
    /// Bind the message to a context
    pub fn into_handle(self, context: Arc<Context>) -> Handle {
        let mut handle = Handle::with_keys(context, self.keys);
        if let Some(args) = self.nearest {
            handle.set_nearest_arguments(args);
        }
        handle
    }
}

/// Parse a message from JSON text
pub fn parse_message(text: &str, context: Arc<Context>) -> Result<Handle> {
    let message: MessageFile = serde_json::from_str(text)?;
    Ok(message.into_handle(context))
}

/// Load a message file into a handle
pub fn load_message(path: &Path, context: Arc<Context>) -> Result<Handle> {
    if !path.exists() {
        return Err(NearestError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let text = std::fs::read_to_string(path)?;
    let handle = parse_message(&text, context)?;

    info!(
        operation = "message_load",
        file_path = %path.display(),
        key_count = handle.key_count(),
        "Message loaded"
    );
    if let Some(args) = handle.nearest_arguments() {
        debug!("Message declares nearest {:?}", args.get_name(0));
    }

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message() {
        let text = r#"{
            "keys": { "Ni": 2, "Nj": 1, "radius": 6371229.0, "values": [1.0, 2.0] },
            "nearest": ["regular", "values", "radius", "Ni", "Nj"]
        }"#;
        let handle = parse_message(text, Context::new_shared()).unwrap();
        assert_eq!(handle.get_long("Ni").unwrap(), 2);
        assert_eq!(handle.get_double_array("values").unwrap(), vec![1.0, 2.0]);
        assert_eq!(
            handle.nearest_arguments().and_then(|a| a.get_name(0)),
            Some("regular")
        );
    }

    #[test]
    fn test_parse_message_without_nearest() {
        let handle = parse_message(r#"{ "keys": { "Ni": 2 } }"#, Context::new_shared()).unwrap();
        assert!(handle.nearest_arguments().is_none());
    }

    #[test]
    fn test_parse_invalid_message() {
        let err = parse_message("{ not json", Context::new_shared()).unwrap_err();
        assert!(matches!(err, NearestError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_message(Path::new("/nonexistent/message.json"), Context::new_shared())
            .unwrap_err();
        assert!(matches!(err, NearestError::Io(_)));
    }
}
