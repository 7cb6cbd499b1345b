use bevy::prelude::*;

/// 可以被射线选中并收进背包的场景物体
#[derive(Component, Debug, Clone)]
pub struct Interactable {
    pub icon: Handle<Image>,
    pub name: String,
    /// 丢出时重新生成用的静态表 id
    pub drop_prefab: Option<String>,
    pub can_pickup: bool,
}

impl Default for Interactable {
    fn default() -> Self {
        Self {
            icon: Handle::default(),
            name: "Item".to_string(),
            drop_prefab: None,
            can_pickup: true,
        }
    }
}

impl Interactable {
    pub fn disable_pickup(&mut self) {
        self.can_pickup = false;
    }
}

/// 由静态表生成的道具，记录来源 id 以便补上网格
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct ItemProp {
    pub prefab: String,
}
