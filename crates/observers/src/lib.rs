//! Reusable observers for the numkit solvers.
//!
//! Every numkit solver reports progress through [`Observer`]. This crate
//! provides observers that work across solvers, built on capability traits
//! that abstract over each solver's event and action types.
//!
//! # Observers
//!
//! - [`History`] - records iteration and residual for later inspection
//! - [`Trace`] - writes one line per event to any [`std::io::Write`]
//! - [`StopAfter`] - stops a solver after a fixed number of iterations
//!
//! # Modules
//!
//! - [`traits`] - capability traits for cross-solver observers
//!   ([`HasIter`], [`HasResidual`], [`HasEstimate`], [`CanStopEarly`])
//!
//! [`Observer`]: numkit_core::Observer
//! [`HasIter`]: traits::HasIter
//! [`HasResidual`]: traits::HasResidual
//! [`HasEstimate`]: traits::HasEstimate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod stop_after;
mod trace;

pub use history::{History, Record};
pub use stop_after::StopAfter;
pub use trace::Trace;
