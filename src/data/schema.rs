use bevy::asset::Asset;
use bevy::reflect::TypePath;
use serde::Deserialize;

/// 物品静态表条目，id 同时作为掉落预制体的引用
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ItemEntry {
    pub id:   String,
    pub name: String,
    /// 相对 assets/ 的图标路径
    pub icon: String,
    #[serde(default)] pub shape: PropShape,
    #[serde(default = "default_color")] pub color: [f32; 3],
    #[serde(default = "default_size")]  pub size:  f32,
    #[serde(default = "default_true")]  pub droppable: bool,
}

impl ItemEntry {
    pub fn drop_prefab(&self) -> Option<String> {
        self.droppable.then(|| self.id.clone())
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub enum PropShape {
    #[default]
    Cube,
    Sphere,
}

fn default_color() -> [f32; 3] { [0.8, 0.8, 0.8] }
fn default_size() -> f32 { 0.4 }
fn default_true() -> bool { true }

#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct ItemCatalog {
    pub items: Vec<ItemEntry>,
}

impl ItemCatalog {
    pub fn get(&self, id: &str) -> Option<&ItemEntry> {
        self.items.iter().find(|e| e.id.eq_ignore_ascii_case(id))
    }
}

/// 关卡布局：地板、墙、门、摆放的物品
#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct LevelLayout {
    pub floor_size: f32,
    #[serde(default)] pub walls: Vec<WallSpec>,
    #[serde(default)] pub doors: Vec<DoorSpec>,
    #[serde(default)] pub items: Vec<ItemPlacement>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WallSpec {
    pub center: [f32; 3],
    pub size:   [f32; 3],
}

#[derive(Deserialize, Debug, Clone)]
pub struct DoorSpec {
    pub name: String,
    pub center: [f32; 3],
    pub size:   [f32; 3],
    pub required_mask: String,
    #[serde(default = "default_door_distance")]  pub move_distance: f32,
    #[serde(default = "default_door_speed")]     pub move_speed: f32,
    #[serde(default = "default_door_direction")] pub move_direction: [f32; 3],
}

fn default_door_distance() -> f32 { 20.0 }
fn default_door_speed() -> f32 { 3.0 }
fn default_door_direction() -> [f32; 3] { [0.0, -1.0, 0.0] }

#[derive(Deserialize, Debug, Clone)]
pub struct ItemPlacement {
    pub item: String,
    pub position: [f32; 3],
    #[serde(default = "default_true")] pub can_pickup: bool,
}
