use bevy::prelude::*;

use super::components::*;
use crate::data::{
    GameData,
    schema::{ItemCatalog, ItemEntry, LevelLayout, PropShape},
};
use crate::door::components::Door;
use crate::physics::Collider;

/// 首帧 GlobalTransform 还没传播，碰撞查询依赖它，生成时直接给上
pub fn placed(transform: Transform) -> (Transform, GlobalTransform) {
    (transform, GlobalTransform::from(transform))
}

/// 按静态表条目生成道具实体；网格由 attach_prop_visuals 之后补上
pub fn spawn_item_prop(
    commands: &mut Commands,
    entry: &ItemEntry,
    transform: Transform,
    interactable: Option<Interactable>,
) -> Entity {
    let mut prop = commands.spawn((
        Name::new(entry.name.clone()),
        ItemProp {
            prefab: entry.id.clone(),
        },
        placed(transform),
    ));
    // 不可交互的克隆体（面具预览）也不带碰撞
    if let Some(interactable) = interactable {
        prop.insert((interactable, Collider::cuboid(Vec3::splat(entry.size))));
    }
    prop.id()
}

/// 拾取物描述：图标、名字、掉落预制体都复制自静态表
pub fn interactable_from_entry(entry: &ItemEntry, asset_server: &AssetServer) -> Interactable {
    Interactable {
        icon: asset_server.load(entry.icon.clone()),
        name: entry.name.clone(),
        drop_prefab: entry.drop_prefab(),
        can_pickup: true,
    }
}

pub fn attach_prop_visuals(
    mut commands: Commands,
    props: Query<(Entity, &ItemProp), Added<ItemProp>>,
    data: Res<GameData>,
    catalogs: Res<Assets<ItemCatalog>>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    // 无渲染（测试 / 无头）时跳过
    let (Some(mut meshes), Some(mut materials)) = (meshes, materials) else {
        return;
    };

    for (entity, prop) in &props {
        let Some(entry) = data.item(&catalogs, &prop.prefab) else {
            warn!("道具 {} 不在物品表中", prop.prefab);
            continue;
        };
        let mesh = match entry.shape {
            PropShape::Cube => meshes.add(Cuboid::from_length(entry.size)),
            PropShape::Sphere => meshes.add(Sphere::new(entry.size * 0.5)),
        };
        let [r, g, b] = entry.color;
        commands.entity(entity).insert((
            Mesh3d(mesh),
            MeshMaterial3d(materials.add(Color::srgb(r, g, b))),
        ));
    }
}

/// 进入游戏时按关卡布局生成场景
pub fn spawn_level(
    mut commands: Commands,
    data: Res<GameData>,
    layouts: Res<Assets<LevelLayout>>,
    catalogs: Res<Assets<ItemCatalog>>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let (Some(layout), Some(catalog)) = (data.layout(&layouts), data.catalog(&catalogs)) else {
        warn!("关卡数据未加载，跳过场景生成");
        return;
    };

    let floor = Vec3::new(layout.floor_size, 1.0, layout.floor_size);
    commands.spawn((
        Name::new("Floor"),
        Collider::cuboid(floor),
        Mesh3d(meshes.add(Cuboid::from_size(floor))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.32, 0.3))),
        placed(Transform::from_xyz(0.0, -0.5, 0.0)),
    ));

    let wall_material = materials.add(Color::srgb(0.55, 0.5, 0.45));
    for wall in &layout.walls {
        let size = Vec3::from(wall.size);
        commands.spawn((
            Name::new("Wall"),
                Collider::cuboid(size),
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(wall_material.clone()),
            placed(Transform::from_translation(Vec3::from(wall.center))),
        ));
    }

    for spec in &layout.doors {
        let size = Vec3::from(spec.size);
        let center = Vec3::from(spec.center);
        commands.spawn((
            Name::new(spec.name.clone()),
            Door::new(spec.required_mask.clone(), center)
                .with_motion(spec.move_distance, spec.move_speed, Vec3::from(spec.move_direction)),
            Collider::cuboid(size),
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(materials.add(Color::srgb(0.35, 0.25, 0.2))),
            placed(Transform::from_translation(center)),
        ));
    }

    for placement in &layout.items {
        let Some(entry) = catalog.get(&placement.item) else {
            warn!("关卡引用了不存在的物品 {}", placement.item);
            continue;
        };
        let mut interactable = interactable_from_entry(entry, &asset_server);
        if !placement.can_pickup {
            interactable.disable_pickup();
        }
        spawn_item_prop(
            &mut commands,
            entry,
            Transform::from_translation(Vec3::from(placement.position)),
            Some(interactable),
        );
    }

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!(
        "关卡生成完毕：{} 面墙，{} 扇门，{} 个道具",
        layout.walls.len(),
        layout.doors.len(),
        layout.items.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn entry(droppable: bool) -> ItemEntry {
        ItemEntry {
            id: "blue_mask".into(),
            name: "Blue Mask".into(),
            icon: "icons/blue_mask.png".into(),
            shape: PropShape::Cube,
            color: [0.0, 0.0, 1.0],
            size: 0.4,
            droppable,
        }
    }

    #[test]
    fn pickup_props_get_collider_previews_do_not() {
        let mut world = World::new();
        let (pickup, preview) = world
            .run_system_once(|mut commands: Commands| {
                let e = entry(true);
                let interactable = Interactable {
                    name: e.name.clone(),
                    drop_prefab: e.drop_prefab(),
                    ..default()
                };
                let pickup = spawn_item_prop(&mut commands, &e, Transform::default(), Some(interactable));
                let preview = spawn_item_prop(&mut commands, &e, Transform::default(), None);
                (pickup, preview)
            })
            .unwrap();

        assert!(world.get::<Collider>(pickup).is_some());
        assert_eq!(world.get::<Interactable>(pickup).unwrap().drop_prefab.as_deref(), Some("blue_mask"));
        assert!(world.get::<Collider>(preview).is_none());
        assert!(world.get::<Interactable>(preview).is_none());
        assert_eq!(world.get::<ItemProp>(preview).unwrap().prefab, "blue_mask");
    }

    #[test]
    fn disabled_pickup_sticks() {
        let mut item = Interactable::default();
        assert!(item.can_pickup);
        item.disable_pickup();
        assert!(!item.can_pickup);
        assert_eq!(item.name, "Item");
    }
}
