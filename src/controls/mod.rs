pub mod actions;
mod systems;

use bevy::prelude::*;
use crate::core::states::AppState;
pub use actions::{KeyBindings, PlayerActions};
use systems::*;

/// 把键鼠原始输入整理成每帧的 PlayerActions
pub struct ControlsPlugin;
impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<KeyBindings>()
            .init_resource::<PlayerActions>()
            .add_systems(OnEnter(AppState::InGame), lock_cursor)
            .add_systems(OnExit(AppState::InGame), release_cursor)
            .add_systems(
                PreUpdate,
                gather_actions
                    .after(bevy::input::InputSystem)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
