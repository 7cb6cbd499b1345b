use bevy::prelude::*;

/// 本帧的玩家意图，gameplay 系统只读这个资源
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PlayerActions {
    /// x = 左右，y = 前后
    pub movement: Vec2,
    /// 鼠标位移（像素），y 向下为正
    pub look: Vec2,
    pub jump: bool,
    pub sprint: bool,
    pub interact: bool,
    /// 数字键选中的槽位（从 0 开始），同帧多个按下时取最后一个
    pub slot: Option<usize>,
    pub scroll: f32,
    pub drop: bool,
    pub use_item: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub sprint: KeyCode,
    pub interact: KeyCode,
    pub drop: KeyCode,
    pub use_item: MouseButton,
    pub slots: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            jump: KeyCode::Space,
            sprint: KeyCode::ShiftLeft,
            interact: KeyCode::KeyE,
            drop: KeyCode::KeyQ,
            use_item: MouseButton::Left,
            slots: vec![
                KeyCode::Digit1,
                KeyCode::Digit2,
                KeyCode::Digit3,
                KeyCode::Digit4,
                KeyCode::Digit5,
                KeyCode::Digit6,
                KeyCode::Digit7,
                KeyCode::Digit8,
                KeyCode::Digit9,
            ],
        }
    }
}

impl KeyBindings {
    pub fn read(
        &self,
        keys: &ButtonInput<KeyCode>,
        mouse: &ButtonInput<MouseButton>,
        look: Vec2,
        scroll: f32,
    ) -> PlayerActions {
        let axis = |neg: KeyCode, pos: KeyCode| {
            keys.pressed(pos) as i32 as f32 - keys.pressed(neg) as i32 as f32
        };
        let movement = Vec2::new(axis(self.left, self.right), axis(self.back, self.forward));

        PlayerActions {
            // 斜向移动不比直线快
            movement: movement.clamp_length_max(1.0),
            look,
            jump: keys.just_pressed(self.jump),
            sprint: keys.pressed(self.sprint),
            interact: keys.just_pressed(self.interact),
            slot: self
                .slots
                .iter()
                .enumerate()
                .filter(|(_, key)| keys.just_pressed(**key))
                .map(|(i, _)| i)
                .last(),
            scroll,
            drop: keys.just_pressed(self.drop),
            use_item: mouse.pressed(self.use_item),
        }
    }
}
