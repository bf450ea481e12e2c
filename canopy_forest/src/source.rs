// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability set the engine consumes from an externally owned graph.

use alloc::vec;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

/// Read-only access to an externally owned object graph.
///
/// Implementors expose parsed records (or any other cross-referencing data)
/// to the projection without giving up ownership: the engine only ever records
/// relationships between node handles, never node contents.
///
/// # Node identity
///
/// [`NodeId`](Self::NodeId) is a small copyable handle with identity
/// semantics: two handles compare equal exactly when they refer to the same
/// underlying node. Structurally identical nodes with distinct handles are
/// distinct nodes. Indices into the source's backing storage are the typical
/// choice.
///
/// # Determinism
///
/// [`references`](Self::references) must return the same sequence, in the same
/// order, every time it is called for the same node on an unchanged graph.
/// [`Forest::build`](crate::Forest::build) is only repeatable when the source
/// is.
pub trait GraphSource {
    /// Handle identifying a node in the source.
    type NodeId: Copy + Eq + Hash;

    /// Error reported when the graph cannot be enumerated, for example a read
    /// fault in a lazily materialized structure.
    type Error;

    /// Returns the direct outgoing references of `node`, in declared order.
    fn references(&self, node: Self::NodeId) -> Result<Vec<Self::NodeId>, Self::Error>;

    /// Returns a human-readable kind label for `node`.
    fn kind(&self, node: Self::NodeId) -> &str;

    /// Returns a human-readable display name for `node`, if it has one.
    fn name(&self, node: Self::NodeId) -> Option<&str>;

    /// Returns every node reachable from `root` (including `root` itself),
    /// each exactly once, in a deterministic order.
    ///
    /// The provided implementation performs a preorder depth-first walk over
    /// [`references`](Self::references), visiting children in their declared
    /// order and skipping nodes already seen, so it terminates on cyclic
    /// graphs. Sources with a native traversal may override it, as long as the
    /// order stays deterministic and repeatable.
    fn reachable(&self, root: Self::NodeId) -> Result<Vec<Self::NodeId>, Self::Error> {
        let mut visited: HashSet<Self::NodeId> = HashSet::new();
        let mut out = Vec::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            out.push(node);

            // Push references in reverse order so the stack pops them in the
            // declared left-to-right order.
            for r in self.references(node)?.into_iter().rev() {
                stack.push(r);
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Adjacency lists indexed by node handle.
    struct Adjacency(Vec<Vec<usize>>);

    impl GraphSource for Adjacency {
        type NodeId = usize;
        type Error = core::convert::Infallible;

        fn references(&self, node: usize) -> Result<Vec<usize>, Self::Error> {
            Ok(self.0[node].clone())
        }

        fn kind(&self, _node: usize) -> &str {
            "Node"
        }

        fn name(&self, _node: usize) -> Option<&str> {
            None
        }
    }

    #[test]
    fn reachable_is_preorder_over_declared_reference_order() {
        // 0 -> [1, 4], 1 -> [2, 3]
        let graph = Adjacency(vec![vec![1, 4], vec![2, 3], vec![], vec![], vec![]]);
        let order = graph.reachable(0).unwrap();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn reachable_visits_shared_nodes_once() {
        // Diamond: 0 -> [1, 2], both 1 and 2 -> [3].
        let graph = Adjacency(vec![vec![1, 2], vec![3], vec![3], vec![]]);
        let order = graph.reachable(0).unwrap();
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn reachable_terminates_on_cycles() {
        // 0 -> 1 -> 0, plus a self-loop on 1.
        let graph = Adjacency(vec![vec![1], vec![0, 1]]);
        let order = graph.reachable(0).unwrap();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn reachable_includes_only_the_given_root_component() {
        let graph = Adjacency(vec![vec![1], vec![], vec![]]);
        let order = graph.reachable(0).unwrap();
        assert_eq!(order, vec![0, 1]);
        assert_eq!(graph.reachable(2).unwrap(), vec![2]);
    }
}
