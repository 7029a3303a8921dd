//! Content domain: loader for RON content files at startup.

use std::fs;
use std::path::Path;

use ron::Options;

use super::data::{AttackDef, DataFile, ItemDef};
use super::registry::ContentRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
pub(crate) fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let data: DataFile<T> = ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Load items.ron and attacks.ron from `base_path` into a ContentRegistry.
/// Returns errors for any files that fail to load.
pub fn load_all_content(base_path: &Path) -> Result<ContentRegistry, Vec<ContentLoadError>> {
    let mut registry = ContentRegistry::default();
    let mut errors = Vec::new();

    match load_data_file::<ItemDef>(&base_path.join("items.ron")) {
        Ok(items) => {
            for item in items {
                registry.items.insert(item.id.clone(), item);
            }
        }
        Err(error) => errors.push(error),
    }

    match load_data_file::<AttackDef>(&base_path.join("attacks.ron")) {
        Ok(attacks) => {
            for attack in attacks {
                registry.attacks.insert(attack.id.clone(), attack);
            }
        }
        Err(error) => errors.push(error),
    }

    if errors.is_empty() {
        Ok(registry)
    } else {
        Err(errors)
    }
}
