//! Shared domain types for Innkeep.
//!
//! This crate contains the domain types used across the Innkeep services:
//! Employee, Guest, Reservation, the derived statistics, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod employee;
pub mod error;
pub mod guest;
pub mod reservation;
pub mod statistics;
