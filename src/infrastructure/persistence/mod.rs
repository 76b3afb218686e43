//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! runtime-checked parameterized queries.
//!
//! # Repositories
//!
//! - [`SqliteCylinderRepository`] - cylinder storage and retrieval
//! - [`SqliteCubeRepository`] - cube storage and retrieval
//!
//! The [`records`] module holds the flat row shapes and their entity mapping.

pub mod records;
pub mod sqlite_cube_repository;
pub mod sqlite_cylinder_repository;

pub use records::{CubeRecord, CylinderRecord};
pub use sqlite_cube_repository::SqliteCubeRepository;
pub use sqlite_cylinder_repository::SqliteCylinderRepository;
