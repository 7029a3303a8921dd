//! Content domain: RON-backed attack and item definitions, plugin wiring and
//! public exports.

mod data;
mod loader;
mod registry;

#[cfg(test)]
mod tests;

pub use data::{AttackDef, AttackWindowDef, DataFile, ItemDef};
pub use loader::{ContentLoadError, load_all_content};
pub use registry::ContentRegistry;

use std::path::PathBuf;

use bevy::prelude::*;

/// Loads content definitions at startup into a [`ContentRegistry`].
pub struct ContentPlugin {
    /// Directory holding items.ron and attacks.ron.
    pub base_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("assets/data"),
        }
    }
}

#[derive(Resource, Debug, Clone)]
struct ContentSource(PathBuf);

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentRegistry>()
            .insert_resource(ContentSource(self.base_path.clone()))
            .add_systems(Startup, setup_content);
    }
}

/// Load all content once at startup. Failures degrade to an empty registry
/// instead of aborting the app.
fn setup_content(source: Res<ContentSource>, mut registry: ResMut<ContentRegistry>) {
    match load_all_content(&source.0) {
        Ok(loaded) => {
            info!("{}", loaded.summary());
            *registry = loaded;
        }
        Err(errors) => {
            for error in &errors {
                error!("{}", error);
            }
            warn!("Content registry left empty; attacks cannot arm hit volumes");
        }
    }
}
