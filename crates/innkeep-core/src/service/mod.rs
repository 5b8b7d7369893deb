//! Business logic services (use cases).
//!
//! Services orchestrate repository calls and business rules. They depend on
//! traits (ports) -- never on concrete infrastructure implementations.

pub mod employee;
pub mod guest;
pub mod reservation;
pub mod statistics;

#[cfg(test)]
pub(crate) mod testing;
