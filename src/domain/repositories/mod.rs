//! Data access trait definitions.
//!
//! Repository traits define the persistence contract implemented by the
//! infrastructure layer. The application layer depends only on these traits,
//! never on a concrete store.

pub mod cube_repository;
pub mod cylinder_repository;

pub use cube_repository::CubeRepository;
pub use cylinder_repository::CylinderRepository;

#[cfg(test)]
pub use cube_repository::MockCubeRepository;
#[cfg(test)]
pub use cylinder_repository::MockCylinderRepository;
