//! `mugrad-core`: a scalar-valued reverse-mode automatic differentiation engine.
//!
//! Expressions are built bottom-up inside a [`Graph`] arena. Every node records the
//! [`Op`] that produced it, and [`Graph::backward`] pushes gradients from a chosen
//! root back to every node it depends on.
//!
//! ```
//! use mugrad_core::Graph;
//!
//! let mut g = Graph::new();
//! let a = g.leaf(2.0, "a");
//! let b = g.leaf(3.0, "b");
//! let c = g.mul(a, b, "c");
//! g.backward(c);
//! assert_eq!(g.grad(a), 3.0);
//! assert_eq!(g.grad(b), 2.0);
//! ```

pub mod autograd;
pub mod config;
pub mod graph;
pub mod ops;

pub mod nn;
pub mod optim;
pub mod utils;

pub mod error;

pub use config::{GradCheckConfig, GradMode, GraphConfig};
pub use error::MugradError;
pub use graph::{Graph, GraphId, Node, NodeId};
pub use ops::traits::MugradScalar;
pub use ops::Op;
// Re-export traits required by public functions/structs
pub use num_traits;
