//! # Cast Graph
//!
//! The cast of characters and the links between them. This crate owns every
//! character node and exposes read-only navigation (nemesis, parents, children,
//! siblings) plus the family lookups path resolution is built on.
//!
//! ## Core Components
//!
//! - **entities**: The `Character` node and its arena identifier
//! - **graph**: Raw records, the two-phase graph builder, and finder queries

pub mod entities;
pub mod graph;

pub use entities::*;
pub use graph::*;
