use bevy::prelude::*;

/// 请求开门（条件检查在面具系统里做完）
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenDoorEvent {
    pub door: Entity,
}

/// CLI：列出所有门的状态
#[derive(Event)]
pub struct ListDoorsEvent;
