use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Load a typed input from `--input <path>` if given, otherwise from
/// piped stdin. Returns None when neither is available so the caller can
/// fall back to individual flags.
pub fn load<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(read_file(path)?));
    }
    if let Some(value) = read_stdin()? {
        return Ok(Some(serde_json::from_value(value)?));
    }
    Ok(None)
}

/// Read a JSON input file into a typed struct. Files with a `.yaml` or
/// `.yml` extension are parsed as YAML instead.
fn read_file<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let contents =
        fs::read_to_string(p).map_err(|e| format!("Failed to read '{}': {}", path, e))?;

    let is_yaml = matches!(
        p.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        Ok(serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", path, e))?)
    } else {
        Ok(serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", path, e))?)
    }
}

/// Attempt to read JSON from stdin if data is being piped.
/// Returns None if stdin is a TTY (interactive).
fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)?;
    Ok(Some(value))
}
