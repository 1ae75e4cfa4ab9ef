//! Core types and definitions for the battleship hazard simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, geometry, scenario definitions, events, snapshots,
//! constants and error types. It has no dependency on the ECS runtime.

pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod scenario;
pub mod state;
pub mod types;
