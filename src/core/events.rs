use bevy::prelude::*;

/// 面向玩家的一行日志，由 main 打印到终端
#[derive(Event, Debug, Clone)]
pub struct LogEvent(pub String);
