//! Team Roster Library
//!
//! Collects player names and distributes them into fixed-size teams,
//! topping up existing teams before creating new ones. Provides the domain
//! logic, the per-session roster manager, and the HTTP page that drives it.

pub mod api;
pub mod config;
pub mod domain;
pub mod session;
