//! Infrastructure layer for Innkeep.
//!
//! Contains implementations of the repository traits defined in `innkeep-core`
//! (SQLite storage), the configuration loader, and the sample staff roster.

pub mod config;
pub mod seed;
pub mod sqlite;
