use bevy::prelude::*;

/// CLI：按静态表 id 直接塞进背包
#[derive(Event)]
pub struct GiveItemEvent {
    pub id: String,
}

#[derive(Event)]
pub struct ListInventoryEvent;   // 让 CLI 请求打印背包

/// CLI：直接选中槽位（键鼠输入由玩家系统当帧处理）
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectSlotEvent(pub usize);

/// 消耗指定下标的物品
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveItemEvent {
    pub index: usize,
}

/// 请求丢出选中物品，由玩家系统决定落点
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct DropSelectedEvent;
