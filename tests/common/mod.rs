//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime and `Time`.
//! - `side_shooter::game::configure_headless` installs the gameplay plugins.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();

    // Avian's physics plugins expect assets + scenes to be registered.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    side_shooter::game::configure_headless(&mut app);

    // `App::run` would finalize plugins; tests drive `update()` directly, so do it here.
    // Avian registers its collision diagnostics resource in `Plugin::finish`.
    app.finish();
    app.cleanup();
    app
}
