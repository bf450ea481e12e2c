// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_model --heading-base-level=0

//! Canopy Model: the hierarchical-view contract over a projected forest.
//!
//! This crate is the thin addressing layer that tree-view hosts consume. It
//! takes the single-parent forest produced by [`canopy_forest`] and exposes
//! the minimal contract such frameworks need to lazily render an expandable
//! tree without materializing it all at once:
//!
//! - [`TreeModel::row_count`] and [`TreeModel::column_count`]: how many rows a
//!   context has, and the fixed two-column shape (kind and name).
//! - [`TreeModel::index`] and [`TreeModel::parent`]: navigate down to a child
//!   at a row and back up to the owning context.
//! - [`TreeModel::data`], [`TreeModel::flags`], and
//!   [`TreeModel::header_label`]: per-cell display values, item capabilities,
//!   and column captions.
//!
//! ## Locations
//!
//! A [`ModelIndex`] is an ephemeral address (row, column, node handle). The
//! invalid/top-of-tree location is `None` at every API boundary: passing
//! `None` as a parent addresses the root sequence, and operations answer
//! `None` (or an empty [`ItemFlags`]) instead of failing when a position does
//! not exist. Hosts probe boundaries routinely, so out-of-range rows and
//! stale indices from a previously built model degrade to those sentinels
//! rather than panicking.
//!
//! ## Example
//!
//! ```rust
//! use canopy_forest::GraphSource;
//! use canopy_model::{KIND_COLUMN, NAME_COLUMN, TreeModel};
//!
//! struct Graph(Vec<(&'static str, Option<&'static str>, Vec<usize>)>);
//!
//! impl GraphSource for Graph {
//!     type NodeId = usize;
//!     type Error = core::convert::Infallible;
//!
//!     fn references(&self, node: usize) -> Result<Vec<usize>, Self::Error> {
//!         Ok(self.0[node].2.clone())
//!     }
//!
//!     fn kind(&self, node: usize) -> &str {
//!         self.0[node].0
//!     }
//!
//!     fn name(&self, node: usize) -> Option<&str> {
//!         self.0[node].1
//!     }
//! }
//!
//! let graph = Graph(vec![
//!     ("Header", Some("scene"), vec![1]),
//!     ("Record", None, vec![]),
//! ]);
//! let model = TreeModel::new(&graph, [0]).unwrap();
//!
//! assert_eq!(model.row_count(None), 1);
//! let root = model.index(0, KIND_COLUMN, None).unwrap();
//! assert_eq!(model.data(root), Some("Header"));
//! assert_eq!(model.parent(root), None);
//!
//! let child = model.index(0, NAME_COLUMN, Some(root)).unwrap();
//! assert_eq!(model.data(child), None); // the record has no display name
//! assert_eq!(model.header_label(NAME_COLUMN), Some("Name"));
//! ```
//!
//! The model is immutable after construction; every operation is a pure
//! function of the forest and its arguments. To pick up graph changes, build
//! a new model and swap it in.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod index;
mod model;

pub use index::{COLUMN_COUNT, ItemFlags, KIND_COLUMN, ModelIndex, NAME_COLUMN};
pub use model::TreeModel;
