//! Application layer sitting between the HTTP boundary and the domain.
//!
//! Services here are deliberate pass-throughs to the repository contracts:
//! request validation lives in the API layer, invariants live on the
//! entities, and storage concerns live in the infrastructure layer.

pub mod services;
