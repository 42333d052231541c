//! Solvers for square linear systems `Ax = b`.
//!
//! Systems are passed as an augmented `n × (n + 1)` [`Matrix`] whose last
//! column holds `b`.
//!
//! # Solvers
//!
//! - [`gauss_seidel`] - in-place relaxation for diagonally dominant systems
//!
//! [`Matrix`]: numkit_core::Matrix

pub mod gauss_seidel;
