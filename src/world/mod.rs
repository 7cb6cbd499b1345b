pub mod components;
pub mod systems;

use bevy::prelude::*;
use crate::core::states::AppState;
use systems::*;

/// 场景：关卡几何、门、可拾取道具
pub struct WorldPlugin;
impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(OnEnter(AppState::InGame), spawn_level)
            .add_systems(PostUpdate, attach_prop_visuals);
    }
}
