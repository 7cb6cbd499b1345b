use bevy::prelude::*;

/// 背包里的一件物品：图标、掉落预制体（静态表 id）、名字
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryItem {
    pub icon: Handle<Image>,
    pub drop_prefab: Option<String>,
    pub name: String,
}

/// 玩家背包（挂在 Resource）。`items` 的下标与 HUD 槽位一一对应
#[derive(Resource, Debug, Clone)]
pub struct Inventory {
    items: Vec<InventoryItem>,
    slot_count: usize,
    selected: usize,
}

impl Inventory {
    pub fn new(slot_count: usize) -> Self {
        Self {
            items: Vec::with_capacity(slot_count),
            slot_count,
            selected: 0,
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn selected_slot(&self) -> usize {
        self.selected
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.slot_count
    }

    /// 满了返回 false，物品留在原处
    pub fn add(&mut self, item: InventoryItem) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// 消耗：直接删除，后面的物品前移
    pub fn remove(&mut self, index: usize) -> Option<InventoryItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// 只有带掉落预制体的选中物品才能丢出
    pub fn drop_selected(&mut self) -> Option<InventoryItem> {
        match self.items.get(self.selected) {
            Some(item) if item.drop_prefab.is_some() => Some(self.items.remove(self.selected)),
            _ => None,
        }
    }

    /// 越界时忽略
    pub fn select(&mut self, slot: usize) -> bool {
        if slot < self.slot_count {
            self.selected = slot;
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) {
        if self.slot_count > 0 {
            self.selected = (self.selected + 1) % self.slot_count;
        }
    }

    pub fn select_previous(&mut self) {
        if self.slot_count > 0 {
            self.selected = (self.selected + self.slot_count - 1) % self.slot_count;
        }
    }

    pub fn selected_item(&self) -> Option<&InventoryItem> {
        self.items.get(self.selected)
    }

    pub fn selected_item_name(&self) -> &str {
        self.selected_item().map_or("", |item| item.name.as_str())
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(3)
    }
}
