//! Adapter utilities for the `flatlist` crate.
//!
//! The `flatlist` crate only derives sizes, indexes and scroll commands. This crate provides the
//! pieces an adapter usually needs around it:
//!
//! - A fixed-row-height window host ([`FixedWindow`]) that decides which rows to render and
//!   applies scroll commands
//! - A controller ([`Controller`]) that wires keyboard focus, row rendering and the
//!   collect/flush protocol into one render pass
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod window;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use window::{FixedWindow, RowSlot};
