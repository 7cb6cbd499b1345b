use anyhow::Context;
use bevy::prelude::*;

mod controls;
mod core;
mod data;
mod door;
mod interface;
mod inventory;
mod physics;
mod player;
mod world;

use crate::core::{CorePlugin, events::LogEvent, resources::GameConfig};
use interface::debug_cli::DebugCliPlugin;

const CONFIG_PATH: &str = "config/game.toml";

fn main() -> anyhow::Result<()> {
    let config = GameConfig::load(CONFIG_PATH)
        .with_context(|| format!("failed to load {CONFIG_PATH}"))?;

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Mask Door FPS".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(CorePlugin { config })
        .add_plugins(data::DataPlugin)
        .add_plugins(controls::ControlsPlugin)
        .add_plugins(inventory::InventoryPlugin)
        .add_plugins(door::DoorPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(DebugCliPlugin)
        .add_systems(Update, forward_log_event)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("exited with code {code}"),
    }
}

fn forward_log_event(mut reader: EventReader<LogEvent>) {
    for e in reader.read() {
        println!("> {}", e.0);
    }
}
