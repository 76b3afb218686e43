//! HTTP request handlers.

pub mod cube;
pub mod cylinder;
pub mod health;

pub use cube::{create_cube_handler, delete_cube_handler, get_cube_handler, update_cube_handler};
pub use cylinder::{
    create_cylinder_handler, delete_cylinder_handler, get_cylinder_handler,
    update_cylinder_handler,
};
pub use health::health_handler;
