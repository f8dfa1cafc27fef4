pub mod periods;
pub mod transform;
