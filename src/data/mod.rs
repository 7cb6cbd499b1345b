pub mod schema;
pub mod loader;

use bevy::prelude::*;
use loader::RonAssetLoader;
use schema::{ItemCatalog, ItemEntry, LevelLayout};
use crate::core::states::AppState;

const ITEMS_PATH: &str = "data/items.ron";
const LEVEL_PATH: &str = "data/level.ron";

// --------------------------- 资源 ---------------------------
#[derive(Resource, Default)]
pub struct GameData {
    pub items: Option<Handle<ItemCatalog>>,
    pub level: Option<Handle<LevelLayout>>,
}

impl GameData {
    pub fn catalog<'a>(&self, catalogs: &'a Assets<ItemCatalog>) -> Option<&'a ItemCatalog> {
        self.items.as_ref().and_then(|h| catalogs.get(h))
    }

    pub fn layout<'a>(&self, layouts: &'a Assets<LevelLayout>) -> Option<&'a LevelLayout> {
        self.level.as_ref().and_then(|h| layouts.get(h))
    }

    pub fn item<'a>(&self, catalogs: &'a Assets<ItemCatalog>, id: &str) -> Option<&'a ItemEntry> {
        self.catalog(catalogs).and_then(|c| c.get(id))
    }
}

// --------------------------- 插件 ---------------------------
pub struct DataPlugin;
impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_asset::<ItemCatalog>()
            .init_asset::<LevelLayout>()
            .register_asset_loader(RonAssetLoader::<ItemCatalog>::default())
            .register_asset_loader(RonAssetLoader::<LevelLayout>::default())
            .init_resource::<GameData>()
            .add_systems(OnEnter(AppState::Loading), start_loading)
            .add_systems(
                Update,
                check_loaded.run_if(in_state(AppState::Loading)),
            );
    }
}

// --------------------------- 系统 ---------------------------
fn start_loading(mut data: ResMut<GameData>, asset_server: Res<AssetServer>) {
    data.items = Some(asset_server.load(ITEMS_PATH));
    data.level = Some(asset_server.load(LEVEL_PATH));
}

fn check_loaded(
    mut next: ResMut<NextState<AppState>>,
    data: Res<GameData>,
    catalogs: Res<Assets<ItemCatalog>>,
    layouts: Res<Assets<LevelLayout>>,
) {
    if let (Some(catalog), Some(layout)) = (data.catalog(&catalogs), data.layout(&layouts)) {
        info!(
            "✔ Items loaded: {}, doors: {}, props: {}",
            catalog.items.len(),
            layout.doors.len(),
            layout.items.len()
        );
        next.set(AppState::InGame);
    }
}
