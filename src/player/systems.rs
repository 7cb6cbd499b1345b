use super::components::*;
use crate::controls::PlayerActions;
use crate::core::{events::LogEvent, resources::GameConfig};
use crate::data::{GameData, schema::ItemCatalog};
use crate::door::{components::Door, events::OpenDoorEvent};
use crate::inventory::{
    components::{Inventory, InventoryItem},
    events::DropSelectedEvent,
};
use crate::physics::{Collider, RayCaster, move_and_slide};
use crate::world::{
    components::{Interactable, ItemProp},
    systems::spawn_item_prop,
};
use bevy::prelude::*;

/// 生成玩家、相机和准星提示
pub fn spawn_player(mut commands: Commands, config: Res<GameConfig>) {
    let cfg = &config.player;
    commands
        .spawn((
            Name::new("Player"),
            Player,
            CharacterBody {
                height: cfg.height,
                radius: cfg.radius,
            },
            CharacterMotion::default(),
            Transform::from_translation(Vec3::from(cfg.spawn_point)),
            Visibility::default(),
        ))
        .with_children(|player| {
            player.spawn((
                Name::new("PlayerCamera"),
                PlayerCamera,
                Camera3d::default(),
                Transform::from_xyz(0.0, cfg.eye_offset, 0.0),
            ));
        });

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|center| {
            center.spawn((Text::new("+"), TextFont::from_font_size(18.0)));
            center.spawn((InteractPrompt, Text::new(""), TextFont::from_font_size(18.0)));
        });
}

/// 走/跑、加减速、跳跃、重力
pub fn handle_movement(
    time: Res<Time>,
    actions: Res<PlayerActions>,
    config: Res<GameConfig>,
    mut player: Query<(&mut Transform, &mut CharacterMotion, &CharacterBody), With<Player>>,
    colliders: Query<(&Collider, &GlobalTransform), Without<Interactable>>,
    caster: RayCaster,
) {
    let Ok((mut transform, mut motion, body)) = player.single_mut() else {
        return;
    };
    let cfg = &config.player;
    let dt = time.delta_secs();
    let half = body.half_extents();

    motion.grounded = caster
        .cast_any(
            transform.translation,
            Dir3::NEG_Y,
            half.y + cfg.ground_check_distance,
        )
        .is_some();

    let speed = if actions.sprint { cfg.run_speed } else { cfg.walk_speed };
    let wish = (*transform.right() * actions.movement.x + *transform.forward() * actions.movement.y)
        * speed;
    let delta = motion.step(wish, actions.jump, cfg, dt);

    // 可拾取物不挡路
    let obstacles: Vec<_> = colliders
        .iter()
        .map(|(collider, global)| collider.aabb(global.translation()))
        .collect();
    let result = move_and_slide(transform.translation, delta, half, &obstacles);
    transform.translation = result.position;

    if (result.landed && motion.vertical < 0.0) || (result.bumped_head && motion.vertical > 0.0) {
        motion.vertical = 0.0;
    }
}

/// 左右转身体，上下转相机
pub fn handle_mouse_look(
    actions: Res<PlayerActions>,
    config: Res<GameConfig>,
    mut player: Query<(&mut Transform, &mut CharacterMotion), With<Player>>,
    mut camera: Query<&mut Transform, (With<PlayerCamera>, Without<Player>)>,
) {
    let Ok((mut body, mut motion)) = player.single_mut() else {
        return;
    };
    let cfg = &config.player;
    let look = actions.look * cfg.mouse_sensitivity;

    body.rotate_y((-look.x).to_radians());
    let pitch = motion.look(-look.y, cfg);
    if let Ok(mut cam) = camera.single_mut() {
        cam.rotation = Quat::from_rotation_x(pitch.to_radians());
    }
}

/// 按交互键：从相机中心发射线，命中可拾取物就收进背包
pub fn try_interact(
    mut commands: Commands,
    actions: Res<PlayerActions>,
    config: Res<GameConfig>,
    camera: Query<&GlobalTransform, With<PlayerCamera>>,
    caster: RayCaster,
    interactables: Query<&Interactable>,
    mut inventory: ResMut<Inventory>,
    mut log: EventWriter<LogEvent>,
) {
    if !actions.interact {
        return;
    }
    let Ok(camera) = camera.single() else {
        return;
    };

    // 所有碰撞体都参与检测，先挡住视线的墙会吞掉这次交互
    let Some(hit) = caster.cast_any(
        camera.translation(),
        camera.forward(),
        config.player.interaction_distance,
    ) else {
        return;
    };
    let Ok(item) = interactables.get(hit.entity) else {
        return;
    };
    if !item.can_pickup {
        return;
    }

    let picked = InventoryItem {
        icon: item.icon.clone(),
        drop_prefab: item.drop_prefab.clone(),
        name: item.name.clone(),
    };
    if inventory.add(picked) {
        commands.entity(hit.entity).despawn();
        info!("Picked up: {}", item.name);
        log.write(LogEvent(format!("Picked up: {}", item.name)));
    } else {
        log.write(LogEvent("背包已满".to_string()));
    }
}

/// 滚轮、数字键当帧生效，之后的丢弃和面具预览看到的是新的选中槽位
pub fn handle_slot_selection(
    actions: Res<PlayerActions>,
    mut inventory: ResMut<Inventory>,
    mut ev_drop: EventWriter<DropSelectedEvent>,
) {
    if actions.scroll > 0.0 {
        inventory.select_next();
    } else if actions.scroll < 0.0 {
        inventory.select_previous();
    }

    if let Some(slot) = actions.slot {
        if slot != inventory.selected_slot() {
            inventory.select(slot);
        }
    }

    if actions.drop {
        ev_drop.write(DropSelectedEvent);
    }
}

/// 丢在身前；身前有障碍时改为丢在头顶
pub fn drop_selected_item(
    mut commands: Commands,
    mut ev_drop: EventReader<DropSelectedEvent>,
    config: Res<GameConfig>,
    player: Query<&Transform, With<Player>>,
    caster: RayCaster,
    mut inventory: ResMut<Inventory>,
    data: Res<GameData>,
    catalogs: Res<Assets<ItemCatalog>>,
    mut log: EventWriter<LogEvent>,
) {
    for _ in ev_drop.read() {
        let Ok(transform) = player.single() else {
            return;
        };

        // 先确认预制体存在，避免物品丢了却生成不出来
        let prefab = inventory
            .selected_item()
            .and_then(|item| item.drop_prefab.as_deref())
            .and_then(|id| data.item(&catalogs, id));
        let Some(entry) = prefab else {
            log.write(LogEvent("No item to drop.".to_string()));
            continue;
        };
        let Some(item) = inventory.drop_selected() else {
            continue;
        };

        let reach = config.player.drop_distance;
        let origin = transform.translation;
        let forward = transform.forward();
        let position = if caster.cast_any(origin, forward, reach).is_some() {
            origin + Vec3::Y * reach
        } else {
            origin + *forward * reach
        };

        spawn_item_prop(
            &mut commands,
            entry,
            Transform::from_translation(position),
            Some(Interactable {
                icon: item.icon,
                name: item.name.clone(),
                drop_prefab: item.drop_prefab,
                can_pickup: true,
            }),
        );
        log.write(LogEvent(format!("Dropped: {}", item.name)));
    }
}

/// 按住使用键时在眼前显示面具，并打开附近匹配的门
pub fn handle_mask_preview(
    mut commands: Commands,
    actions: Res<PlayerActions>,
    config: Res<GameConfig>,
    inventory: Res<Inventory>,
    mut preview: ResMut<MaskPreview>,
    camera: Query<&GlobalTransform, With<PlayerCamera>>,
    player: Query<&Transform, With<Player>>,
    mut props: Query<&mut Transform, (With<ItemProp>, Without<Player>)>,
    doors: Query<(Entity, &Door, &GlobalTransform)>,
    data: Res<GameData>,
    catalogs: Res<Assets<ItemCatalog>>,
    mut ev_open: EventWriter<OpenDoorEvent>,
) {
    let mask = &config.mask;
    let name = inventory.selected_item_name();

    if !(actions.use_item && mask.is_mask(name)) {
        if let Some(clone) = preview.spawned.take() {
            commands.entity(clone).despawn();
        }
        return;
    }

    if let Ok(camera) = camera.single() {
        let forward = camera.forward();
        let placement = Transform::from_translation(
            camera.translation() + *forward * mask.preview_forward - Vec3::Y * mask.preview_drop,
        )
        .looking_to(forward, Vec3::Y);

        let current = preview.spawned;
        match current {
            Some(clone) => match props.get_mut(clone) {
                Ok(mut transform) => *transform = placement,
                Err(_) => preview.spawned = None,
            },
            None => {
                let entry = inventory
                    .selected_item()
                    .and_then(|item| item.drop_prefab.as_deref())
                    .and_then(|id| data.item(&catalogs, id));
                if let Some(entry) = entry {
                    preview.spawned = Some(spawn_item_prop(&mut commands, entry, placement, None));
                }
            }
        }
    }

    let Ok(player) = player.single() else {
        return;
    };
    for (entity, door, global) in &doors {
        let distance = player.translation.distance(global.translation());
        if distance <= mask.door_reach && door.accepts(name) {
            ev_open.write(OpenDoorEvent { door: entity });
        }
    }
}

/// 准星对准可交互物时显示其名字
pub fn update_interact_prompt(
    config: Res<GameConfig>,
    camera: Query<&GlobalTransform, With<PlayerCamera>>,
    caster: RayCaster,
    interactables: Query<&Interactable>,
    mut prompt: Query<&mut Text, With<InteractPrompt>>,
) {
    let Ok(mut text) = prompt.single_mut() else {
        return;
    };
    let name = camera
        .single()
        .ok()
        .and_then(|camera| {
            caster.cast(
                camera.translation(),
                camera.forward(),
                config.player.interaction_distance,
                |e| interactables.contains(e),
            )
        })
        .and_then(|hit| interactables.get(hit.entity).ok())
        .map(|item| item.name.clone())
        .unwrap_or_default();

    if text.0 != name {
        text.0 = name;
    }
}
