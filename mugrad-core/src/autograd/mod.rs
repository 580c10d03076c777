//! Reverse-mode differentiation over a [`Graph`](crate::Graph).
//!
//! [`backward`] holds the driver (topological ordering, seeding, propagation);
//! [`grad_check`] compares its results against central finite differences.

pub mod backward;
pub mod grad_check;

pub use grad_check::{check_grad, GradCheckError};
