// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree model itself.

use core::fmt;

use canopy_forest::{BuildError, Forest, GraphSource};

use crate::index::{COLUMN_COUNT, ItemFlags, KIND_COLUMN, ModelIndex, NAME_COLUMN};

/// Row/column/parent addressing over a projected forest.
///
/// `TreeModel` borrows the graph source (for per-cell kind and name lookups)
/// and owns the [`Forest`] built from it at construction time. Everything is
/// read-only afterwards: each operation is a pure function of the forest and
/// its arguments, so shared references can be used from multiple threads.
/// Rebuilding after a graph change means constructing a new model and
/// swapping it in; indices minted by the old model degrade to sentinel
/// answers when used against the new one.
pub struct TreeModel<'a, S: GraphSource> {
    source: &'a S,
    forest: Forest<S::NodeId>,
}

impl<'a, S: GraphSource> TreeModel<'a, S> {
    /// Builds a model over the graph reachable from `roots`.
    ///
    /// Root order matters: a node reachable from two roots is shown under
    /// whichever root's walk claims it first (see [`Forest::build`]).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the source fails during enumeration; no
    /// model is published.
    pub fn new(
        source: &'a S,
        roots: impl IntoIterator<Item = S::NodeId>,
    ) -> Result<Self, BuildError<S::Error>> {
        Ok(Self {
            forest: Forest::build(source, roots)?,
            source,
        })
    }

    /// Wraps an already-built forest.
    ///
    /// Useful when the same projection feeds several consumers; the forest
    /// must have been built from `source` for lookups to be meaningful.
    pub fn from_parts(source: &'a S, forest: Forest<S::NodeId>) -> Self {
        Self { source, forest }
    }

    /// Returns the underlying forest.
    #[must_use]
    pub fn forest(&self) -> &Forest<S::NodeId> {
        &self.forest
    }

    /// Returns the number of rows under `parent`.
    ///
    /// `None` addresses the top of the tree and answers the number of roots.
    /// Never fails: a stale parent simply has zero rows.
    #[must_use]
    pub fn row_count(&self, parent: Option<ModelIndex<S::NodeId>>) -> usize {
        match parent {
            None => self.forest.roots().len(),
            Some(p) => self.forest.children(p.node()).len(),
        }
    }

    /// Returns the number of columns. Constant: [`COLUMN_COUNT`].
    #[must_use]
    pub const fn column_count(&self) -> usize {
        COLUMN_COUNT
    }

    /// Resolves the child at `row` under `parent` (`None` for the top of the
    /// tree), bound to `column`.
    ///
    /// Answers `None` when `row` is out of range for that context.
    #[must_use]
    pub fn index(
        &self,
        row: usize,
        column: usize,
        parent: Option<ModelIndex<S::NodeId>>,
    ) -> Option<ModelIndex<S::NodeId>> {
        let context = match parent {
            None => self.forest.roots(),
            Some(p) => self.forest.children(p.node()),
        };
        let node = *context.get(row)?;
        Some(ModelIndex::new(row, column, node))
    }

    /// Returns the location of `index`'s owning context, bound to column 0.
    ///
    /// Roots answer `None` (the top of the tree), as do stale indices. The
    /// owner's row was recorded when it was claimed, so this is O(1).
    #[must_use]
    pub fn parent(&self, index: ModelIndex<S::NodeId>) -> Option<ModelIndex<S::NodeId>> {
        let owner = self.forest.owner(index.node())?;
        let row = self.forest.row(owner)?;
        Some(ModelIndex::new(row, 0, owner))
    }

    /// Returns the display value for `index`'s cell.
    ///
    /// The kind column answers the node's kind label; the name column answers
    /// its display name, or `None` when the node has none. Any other column,
    /// and any stale index, answers `None`.
    #[must_use]
    pub fn data(&self, index: ModelIndex<S::NodeId>) -> Option<&'a str> {
        if !self.forest.contains(index.node()) {
            return None;
        }
        match index.column() {
            KIND_COLUMN => Some(self.source.kind(index.node())),
            NAME_COLUMN => self.source.name(index.node()),
            _ => None,
        }
    }

    /// Returns the capabilities of the item at `index`.
    ///
    /// Every live item is enabled and selectable; stale indices carry no
    /// capabilities.
    #[must_use]
    pub fn flags(&self, index: ModelIndex<S::NodeId>) -> ItemFlags {
        if self.forest.contains(index.node()) {
            ItemFlags::ENABLED | ItemFlags::SELECTABLE
        } else {
            ItemFlags::empty()
        }
    }

    /// Returns the caption for `column`, or `None` for out-of-range columns.
    #[must_use]
    pub fn header_label(&self, column: usize) -> Option<&'static str> {
        match column {
            KIND_COLUMN => Some("Kind"),
            NAME_COLUMN => Some("Name"),
            _ => None,
        }
    }
}

impl<S: GraphSource> fmt::Debug for TreeModel<'_, S>
where
    S::NodeId: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeModel")
            .field("forest", &self.forest)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    struct Graph(Vec<(&'static str, Option<&'static str>, Vec<usize>)>);

    impl GraphSource for Graph {
        type NodeId = usize;
        type Error = core::convert::Infallible;

        fn references(&self, node: usize) -> Result<Vec<usize>, Self::Error> {
            Ok(self.0[node].2.clone())
        }

        fn kind(&self, node: usize) -> &str {
            self.0[node].0
        }

        fn name(&self, node: usize) -> Option<&str> {
            self.0[node].1
        }
    }

    fn graph() -> Graph {
        Graph(vec![
            ("Header", Some("top"), vec![1, 2]),
            ("Record", Some("left"), vec![]),
            ("Record", None, vec![]),
        ])
    }

    #[test]
    fn header_labels_and_column_count() {
        let g = graph();
        let model = TreeModel::new(&g, [0]).unwrap();

        assert_eq!(model.column_count(), 2);
        assert_eq!(model.header_label(KIND_COLUMN), Some("Kind"));
        assert_eq!(model.header_label(NAME_COLUMN), Some("Name"));
        assert_eq!(model.header_label(2), None);
    }

    #[test]
    fn data_answers_kind_name_and_nothing_else() {
        let g = graph();
        let model = TreeModel::new(&g, [0]).unwrap();
        let top = model.index(0, KIND_COLUMN, None).unwrap();

        assert_eq!(model.data(top), Some("Header"));
        let named = model.index(0, NAME_COLUMN, Some(top)).unwrap();
        assert_eq!(model.data(named), Some("left"));
        let unnamed = model.index(1, NAME_COLUMN, Some(top)).unwrap();
        assert_eq!(model.data(unnamed), None);

        // Columns past the fixed two answer nothing.
        let odd = model.index(0, 5, None).unwrap();
        assert_eq!(model.data(odd), None);
    }

    #[test]
    fn flags_are_enabled_and_selectable_for_live_items() {
        let g = graph();
        let model = TreeModel::new(&g, [0]).unwrap();
        let top = model.index(0, 0, None).unwrap();

        assert_eq!(model.flags(top), ItemFlags::ENABLED | ItemFlags::SELECTABLE);
    }

    #[test]
    fn from_parts_reuses_a_prebuilt_forest() {
        let g = graph();
        let forest = Forest::build(&g, [0]).unwrap();
        let model = TreeModel::from_parts(&g, forest);

        assert_eq!(model.row_count(None), 1);
        assert_eq!(model.forest().len(), 3);
    }
}
