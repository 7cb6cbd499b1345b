use bevy::prelude::*;

pub mod states;
pub mod events;
pub mod resources;

use resources::GameConfig;

/// 核心插件：注册全局资源 / 事件 / 状态
pub struct CorePlugin {
    pub config: GameConfig,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        use states::AppState;

        app
            .init_state::<AppState>()
            .add_event::<events::LogEvent>()
            .insert_resource(self.config.clone())
            .add_systems(Startup, enter_loading);
    }
}

fn enter_loading(mut next: ResMut<NextState<states::AppState>>) {
    next.set(states::AppState::Loading);
}
