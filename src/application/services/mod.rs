//! Application services orchestrating domain operations.

pub mod cube_service;
pub mod cylinder_service;

pub use cube_service::CubeService;
pub use cylinder_service::CylinderService;
