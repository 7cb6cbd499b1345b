use bevy::prelude::*;

/// 以实体全局位置为中心的轴对齐盒
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub half_extents: Vec3,
}

impl Collider {
    pub fn cuboid(size: Vec3) -> Self {
        Self { half_extents: size * 0.5 }
    }

    pub fn aabb(&self, center: Vec3) -> Aabb {
        Aabb {
            min: center - self.half_extents,
            max: center + self.half_extents,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpgt(self.min).all() && p.cmplt(self.max).all()
    }

    /// 严格重叠，贴边不算
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.cmplt(other.max).all() && self.max.cmpgt(other.min).all()
    }

    /// 射线进入盒子的距离；起点在盒内时返回 None
    pub fn ray_entry(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        if self.contains(origin) {
            return None;
        }

        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let (o, d) = (origin[axis], dir[axis]);
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if d.abs() < f32::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let (mut t0, mut t1) = ((lo - o) * inv, (hi - o) * inv);
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        (t_min >= 0.0).then_some(t_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_box_in_front() {
        let aabb = Aabb::from_center(Vec3::new(0.0, 0.0, -5.0), Vec3::splat(0.5));
        let t = aabb.ray_entry(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        assert!((t - 4.5).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_box_behind_or_beside() {
        let aabb = Aabb::from_center(Vec3::new(0.0, 0.0, -5.0), Vec3::splat(0.5));
        assert!(aabb.ray_entry(Vec3::ZERO, Vec3::Z).is_none());
        assert!(aabb.ray_entry(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Z).is_none());
    }

    #[test]
    fn ray_from_inside_is_ignored() {
        let aabb = Aabb::from_center(Vec3::ZERO, Vec3::splat(1.0));
        assert!(aabb.ray_entry(Vec3::ZERO, Vec3::X).is_none());
    }

    #[test]
    fn touching_boxes_do_not_overlap() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));
        let b = Aabb::from_center(Vec3::X, Vec3::splat(0.5));
        let c = Aabb::from_center(Vec3::new(0.9, 0.0, 0.0), Vec3::splat(0.5));
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }
}
