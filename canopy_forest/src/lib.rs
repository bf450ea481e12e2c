// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_forest --heading-base-level=0

//! Canopy Forest: projection of object graphs into single-parent forests.
//!
//! Parsers for structured binary formats routinely produce graphs of records
//! that cross-reference one another: the same record can be referenced from
//! several places, and reference chains can loop back on themselves. Tree
//! views, on the other hand, require every row to have exactly one parent.
//! This crate bridges the two: it walks a set of root nodes over their
//! reference graph and assigns each reachable node exactly one owner, so that
//! the result is always a forest regardless of sharing or cycles in the input.
//!
//! The core concepts are:
//!
//! - [`GraphSource`]: read-only access to an externally owned object graph.
//!   Nodes are identified by small copyable handles; the source reports each
//!   node's outgoing references (in a fixed order), a kind label, and an
//!   optional display name.
//! - [`Forest`]: the projected structure. [`Forest::build`] performs the
//!   deduplicating walk; afterwards the forest is immutable and exposes the
//!   owner, children, and root relationships through cheap lookups.
//! - [`BuildError`]: returned when the graph source fails during the walk.
//!   No partial forest is ever published.
//!
//! ## Ownership semantics
//!
//! A node is *claimed* by the first visited node that references it, scanning
//! each visited node's references in their declared order. Later references to
//! an already-claimed node are skipped, so a shared node appears under exactly
//! one parent. A node also never claims itself or any of its own ancestors,
//! which is what keeps reference cycles from surviving the projection. The
//! projection is deliberately lossy: of all incoming edges to a node, only the
//! first one encountered is kept.
//!
//! ## Example
//!
//! ```rust
//! use canopy_forest::{Forest, GraphSource};
//!
//! /// A toy adjacency-list graph: node 0 references 1 and 2, node 1 also
//! /// references 2.
//! struct Graph(Vec<Vec<usize>>);
//!
//! impl GraphSource for Graph {
//!     type NodeId = usize;
//!     type Error = core::convert::Infallible;
//!
//!     fn references(&self, node: usize) -> Result<Vec<usize>, Self::Error> {
//!         Ok(self.0[node].clone())
//!     }
//!
//!     fn kind(&self, _node: usize) -> &str {
//!         "Record"
//!     }
//!
//!     fn name(&self, _node: usize) -> Option<&str> {
//!         None
//!     }
//! }
//!
//! let graph = Graph(vec![vec![1, 2], vec![2], vec![]]);
//! let forest = Forest::build(&graph, [0]).unwrap();
//!
//! // Node 2 is referenced twice, but node 0 scans its references first and
//! // wins the claim; node 1's edge to it is dropped.
//! assert_eq!(forest.roots(), &[0]);
//! assert_eq!(forest.children(0), &[1, 2]);
//! assert!(forest.children(1).is_empty());
//! assert_eq!(forest.owner(2), Some(0));
//! ```
//!
//! The forest is rebuilt from scratch when the underlying graph changes; there
//! is no incremental update. Readers on multiple threads are safe once a
//! forest is built, since nothing mutates it afterwards. Rebuilding into a
//! fresh `Forest` and swapping it in is the intended update pattern.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod forest;
mod source;

pub use forest::{BuildError, Forest};
pub use source::GraphSource;
