//! Configuration file checks and upgrades.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every key a complete config file carries.
pub const KNOWN_KEYS: [&str; 3] = ["database", "show_weekday", "separator_char"];

const SHOW_WEEKDAY_DOC: &str = "# show_weekday parameter options:\n\
#   None   → do not show weekday\n\
#   Short  → Mo, Tu, We, Th, Fr, Sa, Su\n\
#   Medium → Mon, Tue, Wed, Thu, Fri, Sat, Sun\n\
#   Long   → Monday, Tuesday, ...\n";

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;

    // an empty file is a config with every key missing
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(_) => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::Config(format!("{}: {}", path.display(), e))),
    }
}

/// Keys absent from the config file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

/// Add the missing keys with their default values and rewrite the file.
/// Returns the keys that were added; the file is untouched when none are.
pub fn migrate_config(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let defaults = Config::default();
    let mut added = Vec::new();

    for key in KNOWN_KEYS {
        if map.contains_key(key) {
            continue;
        }
        let v = match key {
            "database" => defaults.database.clone(),
            "show_weekday" => defaults.show_weekday.clone(),
            _ => defaults.separator_char.clone(),
        };
        map.insert(Value::String(key.to_string()), Value::String(v));
        added.push(key);
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(map)).map_err(|_| AppError::ConfigSave)?;

    // Inject documentation comment right after the `show_weekday` line
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');
        if line.starts_with("show_weekday:") {
            new_content.push_str(SHOW_WEEKDAY_DOC);
        }
    }

    fs::write(path, new_content).map_err(|_| AppError::ConfigSave)?;
    Ok(added)
}
