use merchant_finance_core::schedule::CalculatorDefaults;
use std::fs;
use std::path::Path;

/// Load calculator defaults from a YAML or JSON file.
///
/// With no path the built-in defaults (15% down, 24 months, 0%) apply.
/// Fields missing from the file keep their built-in values.
pub fn load_defaults(path: Option<&str>) -> Result<CalculatorDefaults, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(CalculatorDefaults::default());
    };

    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config '{}': {}", path, e))?;

    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let defaults: CalculatorDefaults = if is_json {
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse config '{}': {}", path, e))?
    } else {
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config '{}': {}", path, e))?
    };

    defaults.validate()?;
    log::debug!("loaded calculator defaults from {path}: {defaults:?}");
    Ok(defaults)
}
