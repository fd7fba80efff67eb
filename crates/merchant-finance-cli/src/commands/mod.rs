pub mod contracts;
pub mod format;
pub mod preview;
pub mod schedule;

use serde::de::DeserializeOwned;

use crate::input;

/// Resolve a request from `--input`, then piped stdin.
///
/// `Ok(None)` means neither was supplied and the caller should build the
/// request from its flags.
pub fn request_from_input<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(input::file::read_json(path)?));
    }
    match input::stdin::read_stdin()? {
        Some(data) => Ok(Some(serde_json::from_value(data)?)),
        None => Ok(None),
    }
}
