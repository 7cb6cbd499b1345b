use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::components::Collider;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: Entity,
    pub distance: f32,
    pub point: Vec3,
}

/// 对场景内所有 Collider 做射线查询
#[derive(SystemParam)]
pub struct RayCaster<'w, 's> {
    colliders: Query<'w, 's, (Entity, &'static Collider, &'static GlobalTransform)>,
}

impl RayCaster<'_, '_> {
    /// 最近的命中；`filter` 返回 false 的实体被跳过
    pub fn cast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        filter: impl Fn(Entity) -> bool,
    ) -> Option<RayHit> {
        closest_hit(
            self.colliders
                .iter()
                .filter(|(entity, ..)| filter(*entity))
                .map(|(entity, collider, transform)| {
                    (entity, collider.aabb(transform.translation()))
                }),
            origin,
            direction,
            max_distance,
        )
    }

    pub fn cast_any(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<RayHit> {
        self.cast(origin, direction, max_distance, |_| true)
    }
}

pub fn closest_hit(
    boxes: impl Iterator<Item = (Entity, super::components::Aabb)>,
    origin: Vec3,
    direction: Dir3,
    max_distance: f32,
) -> Option<RayHit> {
    let dir = *direction;
    boxes
        .filter_map(|(entity, aabb)| {
            aabb.ray_entry(origin, dir)
                .filter(|t| *t <= max_distance)
                .map(|distance| RayHit {
                    entity,
                    distance,
                    point: origin + dir * distance,
                })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn spawn_box(world: &mut World, at: Vec3) -> Entity {
        world
            .spawn((
                Collider::cuboid(Vec3::ONE),
                Transform::from_translation(at),
                GlobalTransform::from_translation(at),
            ))
            .id()
    }

    #[test]
    fn picks_nearest_within_range() {
        let mut world = World::new();
        let far = spawn_box(&mut world, Vec3::new(0.0, 0.0, -6.0));
        let near = spawn_box(&mut world, Vec3::new(0.0, 0.0, -3.0));

        let hit = world
            .run_system_once(|caster: RayCaster| caster.cast_any(Vec3::ZERO, Dir3::NEG_Z, 10.0))
            .unwrap()
            .unwrap();
        assert_eq!(hit.entity, near);
        assert!((hit.distance - 2.5).abs() < 1e-5);

        let filtered = world
            .run_system_once(move |caster: RayCaster| {
                caster.cast(Vec3::ZERO, Dir3::NEG_Z, 10.0, |e| e != near)
            })
            .unwrap()
            .unwrap();
        assert_eq!(filtered.entity, far);

        let short = world
            .run_system_once(|caster: RayCaster| caster.cast_any(Vec3::ZERO, Dir3::NEG_Z, 2.0))
            .unwrap();
        assert!(short.is_none());
    }
}
