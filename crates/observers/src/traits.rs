//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can drive several solvers.
//!
//! # Event traits
//!
//! - [`HasIter`] - events that carry an iteration counter
//! - [`HasResidual`] - events that carry a convergence measure
//! - [`HasEstimate`] - events that carry a scalar best estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`] - actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numkit_core::Observer;
//! use numkit_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use numkit_solvers::{
    linear::gauss_seidel,
    linprog::simplex,
    quadrature::romberg,
    roots,
};

/// An event that carries an iteration counter.
///
/// The count is the number of units of work completed when the event fires:
/// iterations for root finders, sweeps for Gauss-Seidel, table rows built for
/// Romberg, and pivots performed for simplex. The first event of an
/// iterative solver reports 1, except simplex's `Started`, which reports 0.
pub trait HasIter {
    /// Returns the solver's iteration count at this event.
    fn iter(&self) -> usize;
}

/// An event that carries a convergence measure.
///
/// The measure approaches zero as the solver converges: a function residual
/// for root finders, the largest component change for Gauss-Seidel, and the
/// diagonal change for Romberg.
pub trait HasResidual {
    /// Returns the convergence measure for this event.
    fn residual(&self) -> f64;
}

/// An event that carries a scalar best estimate.
pub trait HasEstimate {
    /// Returns the solver's current estimate.
    fn estimate(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- roots ---

impl HasIter for roots::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasResidual for roots::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasEstimate for roots::Event {
    fn estimate(&self) -> f64 {
        self.x
    }
}

// --- gauss_seidel ---

impl HasIter for gauss_seidel::Event<'_> {
    fn iter(&self) -> usize {
        self.sweep
    }
}

impl HasResidual for gauss_seidel::Event<'_> {
    fn residual(&self) -> f64 {
        self.max_change
    }
}

// --- romberg ---

impl HasIter for romberg::Event<'_> {
    /// Rows built so far, so row 0 reports 1.
    fn iter(&self) -> usize {
        self.row + 1
    }
}

impl HasResidual for romberg::Event<'_> {
    fn residual(&self) -> f64 {
        self.change
    }
}

impl HasEstimate for romberg::Event<'_> {
    fn estimate(&self) -> f64 {
        romberg::Event::estimate(self)
    }
}

// --- simplex ---

impl HasIter for simplex::Event<'_> {
    /// Pivots performed so far; zero for [`simplex::Event::Started`].
    fn iter(&self) -> usize {
        match self {
            simplex::Event::Started { .. } => 0,
            simplex::Event::Pivoted { pivot, .. } => *pivot,
        }
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for roots::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for gauss_seidel::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for romberg::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for simplex::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
