//! 只做角色控制器需要的部分：AABB 碰撞体、射线查询、运动学滑动

pub mod components;
pub mod kinematic;
pub mod raycast;

pub use components::Collider;
pub use kinematic::move_and_slide;
pub use raycast::RayCaster;
