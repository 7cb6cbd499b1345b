use bevy::prelude::*;

use super::components::Aabb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideResult {
    pub position: Vec3,
    /// 向下移动被挡住（落地）
    pub landed: bool,
    /// 向上移动被挡住（顶头）
    pub bumped_head: bool,
}

/// 按 X、Y、Z 依次移动，每个轴撞到静态盒子就贴边停下
pub fn move_and_slide(
    position: Vec3,
    delta: Vec3,
    half_extents: Vec3,
    obstacles: &[Aabb],
) -> SlideResult {
    let mut pos = position;
    let mut landed = false;
    let mut bumped_head = false;

    for axis in 0..3 {
        let step = delta[axis];
        if step == 0.0 {
            continue;
        }
        // 贴着的盒子不会被当成这一轴的障碍
        let before = Aabb::from_center(pos, half_extents);
        pos[axis] += step;

        for obstacle in obstacles {
            let body = Aabb::from_center(pos, half_extents);
            if !body.overlaps(obstacle) || before.overlaps(obstacle) {
                continue;
            }
            if step > 0.0 {
                pos[axis] = obstacle.min[axis] - half_extents[axis];
                bumped_head |= axis == 1;
            } else {
                pos[axis] = obstacle.max[axis] + half_extents[axis];
                landed |= axis == 1;
            }
        }
    }

    SlideResult { position: pos, landed, bumped_head }
}
