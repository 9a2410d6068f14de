//! A headless windowing core for large, selectable option lists.
//!
//! For a ready-made fixed-row-height window host and a keyboard-driven controller, see the
//! `flatlist-adapter` crate.
//!
//! The crate derives everything a windowed list needs from the item collection and the current
//! focus, without painting anything itself:
//! - the viewport height ([`compute_height`]),
//! - the row to open on, given a selection ([`resolve_index`]),
//! - at most one "scroll to row" per render pass when keyboard focus lands on an offscreen row
//!   ([`FocusScrollCoordinator`], [`select_target`]).
//!
//! A host is expected to provide:
//! - the ordered items and a way to extract a comparable value from each,
//! - per-row focus/visibility reports while painting,
//! - an imperative scroll ([`ListHost`]).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod flat_list;
mod focus;
mod host;
mod key;
mod options;
mod resolve;
mod select;
mod size;
mod state;
mod types;


pub use flat_list::{FlatList, ListFrame};
pub use focus::{FocusOutcome, FocusPhase, FocusScrollCoordinator};
pub use host::ListHost;
pub use key::{OptionValue, SelectionKey};
pub use options::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, FlatListOptions, ValueGetter};
pub use resolve::{resolve_index, resolve_index_by_key};
pub use select::select_target;
pub use size::{ViewportConstraint, compute_height};
pub use state::{FocusNotification, FocusState, ScrollCommand};
pub use types::{Align, VirtualRange};
