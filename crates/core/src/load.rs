use std::path::Path;

use serde_json::Value;
use tokio::{fs, io::AsyncReadExt};
use tracing::debug;

use crate::error::{Result, ResultFormatError};

/// Parse a raw API response. Only JSON objects are accepted at the top level.
pub fn parse_response(raw: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(ResultFormatError::NotAnObject {
            found: json_type_name(&value),
        });
    }
    Ok(value)
}

/// Load a response from a file, or from stdin when no path is given
pub async fn load_response(path: Option<&Path>) -> Result<Value> {
    let raw = match path {
        Some(path) => {
            debug!(path = %path.display(), "reading response file");
            fs::read_to_string(path).await?
        }
        None => {
            debug!("reading response from stdin");
            let mut raw = String::new();
            tokio::io::stdin().read_to_string(&mut raw).await?;
            raw
        }
    };
    parse_response(&raw)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
