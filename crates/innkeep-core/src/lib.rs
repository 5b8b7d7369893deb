//! Business logic and repository trait definitions for Innkeep.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements. It depends only on `innkeep-types` -- never on
//! `innkeep-infra` or any database/IO crate.

pub mod repository;
pub mod service;
