// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model addresses, columns, and item capabilities.

/// Number of columns exposed by [`TreeModel`](crate::TreeModel).
///
/// The two-column shape (kind and name) is fixed by the data model, not
/// configurable.
pub const COLUMN_COUNT: usize = 2;

/// Column showing each node's kind label.
pub const KIND_COLUMN: usize = 0;

/// Column showing each node's display name, when it has one.
pub const NAME_COLUMN: usize = 1;

bitflags::bitflags! {
    /// Capabilities of a model item.
    ///
    /// Every live index carries [`ENABLED`](Self::ENABLED) and
    /// [`SELECTABLE`](Self::SELECTABLE); stale indices carry nothing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// The item participates in interaction.
        const ENABLED    = 0b0000_0001;
        /// The item can be selected.
        const SELECTABLE = 0b0000_0010;
    }
}

/// An ephemeral address in a [`TreeModel`](crate::TreeModel): a row within an
/// owning context, a column, and the node at that position.
///
/// Indices are minted by [`TreeModel::index`](crate::TreeModel::index) and
/// hold no state of their own; they are recomputed from the forest on every
/// query. The invalid/top-of-tree location is represented as `None` wherever
/// the contract calls for one, so a `ModelIndex` value is always a concrete
/// position. An index minted before a rebuild may no longer address anything;
/// operations answer with sentinels for such indices rather than failing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelIndex<K> {
    row: usize,
    column: usize,
    node: K,
}

impl<K: Copy> ModelIndex<K> {
    pub(crate) const fn new(row: usize, column: usize, node: K) -> Self {
        Self { row, column, node }
    }

    /// Returns the row of this index within its owning context.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column this index addresses.
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    /// Returns the node handle at this position.
    #[must_use]
    pub const fn node(self) -> K {
        self.node
    }
}
