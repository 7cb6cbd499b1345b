use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// 全局配置（config/game.toml），所有字段都有默认值
#[derive(Resource, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub inventory: InventoryConfig,
    pub mask: MaskConfig,
}

/// 第一人称控制器参数，角度单位为度
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// 每像素鼠标位移转过的角度
    pub mouse_sensitivity: f32,
    pub max_look_angle: f32,
    pub min_look_angle: f32,
    pub ground_check_distance: f32,
    pub interaction_distance: f32,
    pub height: f32,
    pub radius: f32,
    /// 相机相对胶囊中心的高度
    pub eye_offset: f32,
    pub drop_distance: f32,
    pub spawn_point: [f32; 3],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 10.0,
            jump_force: 8.0,
            gravity: -9.81,
            acceleration: 10.0,
            deceleration: 10.0,
            mouse_sensitivity: 0.1,
            max_look_angle: 90.0,
            min_look_angle: -90.0,
            ground_check_distance: 0.1,
            interaction_distance: 3.0,
            height: 1.8,
            radius: 0.4,
            eye_offset: 0.7,
            drop_distance: 2.0,
            spawn_point: [0.0, 1.0, 6.0],
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InventoryConfig {
    pub slot_count: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { slot_count: 3 }
    }
}

/// 面具预览 & 开门距离
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MaskConfig {
    /// 名字里包含任一关键字的物品视为面具/钥匙
    pub keywords: Vec<String>,
    pub door_reach: f32,
    pub preview_forward: f32,
    pub preview_drop: f32,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            keywords: vec!["Mask".into(), "Key".into()],
            door_reach: 2.0,
            preview_forward: 0.15,
            preview_drop: 0.35,
        }
    }
}

impl MaskConfig {
    pub fn is_mask(&self, item_name: &str) -> bool {
        !item_name.is_empty() && self.keywords.iter().any(|k| item_name.contains(k.as_str()))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// 文件不存在时回退到默认配置
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(s) => Self::from_toml_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("{} 不存在，使用默认配置", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = GameConfig::from_toml_str(
            r#"
            [player]
            walk_speed = 3.5

            [inventory]
            slot_count = 5
            "#,
        )
        .unwrap();

        assert_eq!(cfg.player.walk_speed, 3.5);
        assert_eq!(cfg.player.run_speed, 10.0);
        assert_eq!(cfg.inventory.slot_count, 5);
        assert_eq!(cfg.mask, MaskConfig::default());
    }

    #[test]
    fn bad_toml_is_an_error() {
        let err = GameConfig::from_toml_str("[player]\nwalk_speed = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let cfg = GameConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn mask_keywords() {
        let mask = MaskConfig::default();
        assert!(mask.is_mask("Blue Mask"));
        assert!(mask.is_mask("Rusty Key"));
        assert!(!mask.is_mask("Apple"));
        assert!(!mask.is_mask(""));
    }
}
