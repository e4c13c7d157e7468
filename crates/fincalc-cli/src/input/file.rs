use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read a JSON or YAML input file into a typed struct. The format is chosen
/// by file extension; anything that is not `.yaml`/`.yml` is parsed as JSON.
pub fn read_document<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    if !p.is_file() {
        return Err(format!("input file not found: {path}").into());
    }

    let contents =
        fs::read_to_string(p).map_err(|e| format!("failed to read '{path}': {e}"))?;

    let is_yaml = matches!(
        p.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let value: T = if is_yaml {
        serde_yaml::from_str(&contents).map_err(|e| format!("failed to parse '{path}': {e}"))?
    } else {
        serde_json::from_str(&contents).map_err(|e| format!("failed to parse '{path}': {e}"))?
    };
    Ok(value)
}
