use bevy::prelude::*;

use crate::core::resources::PlayerConfig;

/// 玩家标记组件
#[derive(Component)]
pub struct Player;

/// 玩家子实体上的相机，只负责俯仰
#[derive(Component)]
pub struct PlayerCamera;

/// 角色碰撞体尺寸（立方体近似胶囊）
#[derive(Component, Debug, Clone, Copy)]
pub struct CharacterBody {
    pub height: f32,
    pub radius: f32,
}

impl CharacterBody {
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.radius, self.height * 0.5, self.radius)
    }
}

/// 运动状态：水平速度与竖直速度分开积分
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct CharacterMotion {
    pub horizontal: Vec3,
    pub vertical: f32,
    /// 相机俯仰角（度）
    pub pitch: f32,
    pub grounded: bool,
}

/// 准星下方的物品名提示
#[derive(Component)]
pub struct InteractPrompt;

/// 手持面具的预览克隆体
#[derive(Resource, Default, Debug)]
pub struct MaskPreview {
    pub spawned: Option<Entity>,
}

pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let diff = target - current;
    let dist = diff.length();
    if dist <= max_delta || dist < f32::EPSILON {
        target
    } else {
        current + diff / dist * max_delta
    }
}

impl CharacterMotion {
    /// 单帧积分，返回本帧位移。`wish` 为世界坐标下的目标水平速度
    pub fn step(&mut self, wish: Vec3, jump: bool, cfg: &PlayerConfig, dt: f32) -> Vec3 {
        if self.grounded {
            let rate = if wish.length() > 0.1 { cfg.acceleration } else { cfg.deceleration };
            self.horizontal = move_towards(self.horizontal, wish, rate * dt);

            if jump {
                self.vertical = cfg.jump_force;
            } else if self.vertical < 0.0 {
                self.vertical = 0.0;
            }
        }

        self.vertical += cfg.gravity * dt;
        self.horizontal * dt + Vec3::Y * self.vertical * dt
    }

    pub fn look(&mut self, delta_pitch: f32, cfg: &PlayerConfig) -> f32 {
        self.pitch = (self.pitch + delta_pitch).clamp(cfg.min_look_angle, cfg.max_look_angle);
        self.pitch
    }
}
