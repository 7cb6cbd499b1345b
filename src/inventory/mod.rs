pub mod components;
pub mod events;
pub mod ui;
mod systems;

use bevy::prelude::*;
use crate::core::{resources::GameConfig, states::AppState};
use components::*;
use events::*;
use systems::*;
use ui::*;

/// 背包逻辑在 InventorySet 中运行，UI 刷新排在所有修改之后
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InventorySet;

pub struct InventoryPlugin;
impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        let slot_count = app
            .world()
            .get_resource::<GameConfig>()
            .map_or(3, |cfg| cfg.inventory.slot_count);

        app
            .insert_resource(Inventory::new(slot_count))
            .add_event::<GiveItemEvent>()
            .add_event::<ListInventoryEvent>()
            .add_event::<SelectSlotEvent>()
            .add_event::<RemoveItemEvent>()
            .add_event::<DropSelectedEvent>()
            // resource_changed 在加载阶段就被消耗掉了，进入游戏时先刷一次
            .add_systems(
                OnEnter(AppState::InGame),
                (spawn_inventory_hud, refresh_inventory_ui).chain(),
            )
            .add_systems(
                Update,
                (
                    (give_item, select_slot, remove_item, print_inventory).in_set(InventorySet),
                    refresh_inventory_ui
                        .after(InventorySet)
                        .run_if(resource_changed::<Inventory>),
                )
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::LogEvent;
    use crate::data::{GameData, schema::ItemCatalog};
    use bevy::asset::AssetPlugin;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn hud_highlights_first_slot_when_entering_game() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin, AssetPlugin::default()))
            .init_state::<AppState>()
            .init_asset::<ItemCatalog>()
            .init_resource::<GameData>()
            .add_event::<LogEvent>()
            .insert_resource(GameConfig::default())
            .add_plugins(InventoryPlugin);

        app.update();
        app.world_mut().resource_mut::<NextState<AppState>>().set(AppState::Loading);
        app.update();
        app.update();
        app.world_mut().resource_mut::<NextState<AppState>>().set(AppState::InGame);
        app.update();
        app.update();

        let mut frames = app
            .world_mut()
            .query::<(&InventorySlotFrame, &BackgroundColor)>();
        let mut colors: Vec<_> = frames
            .iter(app.world())
            .map(|(frame, color)| (frame.index, color.0))
            .collect();
        colors.sort_by_key(|(index, _)| *index);

        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0].1, Color::srgb(0.5, 0.5, 0.5));
        assert_eq!(colors[1].1, Color::WHITE);
        assert_eq!(colors[2].1, Color::WHITE);
    }
}
