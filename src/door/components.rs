use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DoorState {
    #[default]
    Closed,
    Opening {
        moved: f32,
    },
    Open,
}

/// 滑动门：持有名字包含 `required_mask` 的面具才能打开
#[derive(Component, Debug, Clone)]
pub struct Door {
    pub required_mask: String,
    pub move_distance: f32,
    /// 单位/秒
    pub move_speed: f32,
    /// 世界坐标，单位向量
    pub move_direction: Vec3,
    pub origin: Vec3,
    pub state: DoorState,
}

impl Door {
    pub fn new(required_mask: impl Into<String>, origin: Vec3) -> Self {
        Self {
            required_mask: required_mask.into(),
            move_distance: 20.0,
            move_speed: 3.0,
            move_direction: Vec3::NEG_Y,
            origin,
            state: DoorState::Closed,
        }
    }

    pub fn with_motion(mut self, distance: f32, speed: f32, direction: Vec3) -> Self {
        self.move_distance = distance;
        self.move_speed = speed;
        self.move_direction = direction.normalize_or(Vec3::NEG_Y);
        self
    }

    /// 空字符串是任何名字的子串，因此空 `required_mask` 对所有面具开放
    pub fn accepts(&self, item_name: &str) -> bool {
        item_name.contains(self.required_mask.as_str())
    }

    pub fn open_position(&self) -> Vec3 {
        self.origin + self.move_direction * self.move_distance
    }

    /// 只有关着的门能开始打开；返回是否真的开始了
    pub fn open(&mut self) -> bool {
        if self.state == DoorState::Closed {
            self.state = DoorState::Opening { moved: 0.0 };
            true
        } else {
            false
        }
    }

    /// 推进一帧，返回门的新位置；不在移动中时返回 None
    pub fn advance(&mut self, position: Vec3, dt: f32) -> Option<Vec3> {
        let DoorState::Opening { moved } = self.state else {
            return None;
        };

        let step = self.move_speed * dt;
        let moved = moved + step;
        if moved >= self.move_distance {
            // 吸附到终点，消除浮点误差
            self.state = DoorState::Open;
            Some(self.open_position())
        } else {
            self.state = DoorState::Opening { moved };
            Some(position + self.move_direction * step)
        }
    }
}
