//! Infrastructure layer: database-backed implementations of domain contracts.

pub mod persistence;
