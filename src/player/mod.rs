pub mod components;
pub mod systems;

use bevy::prelude::*;
use crate::core::states::AppState;
use crate::inventory::InventorySet;
use components::MaskPreview;
use systems::*;

/// 第一人称控制器：移动、视角、交互、物品栏操作、面具预览
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<MaskPreview>()
            .add_systems(OnEnter(AppState::InGame), spawn_player)
            .add_systems(
                Update,
                (
                    handle_movement,
                    handle_mouse_look,
                    try_interact,
                    handle_slot_selection,
                    drop_selected_item,
                    handle_mask_preview,
                    update_interact_prompt,
                )
                    .chain()
                    .before(InventorySet)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
