// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The projected forest and the deduplicating walk that builds it.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::source::GraphSource;

/// Children sequences are inline up to four entries; most parsed records
/// carry only a handful of references.
type ChildList<K> = SmallVec<[K; 4]>;

/// Error returned when the graph source fails while a forest is being built.
///
/// The walk aborts on the first source error and no partial forest is
/// published; the caller decides whether to rebuild.
#[derive(Clone, PartialEq, Eq)]
pub struct BuildError<E> {
    /// The error reported by the graph source.
    pub error: E,
}

impl<E: fmt::Debug> fmt::Debug for BuildError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuildError {{ error: {:?} }}", self.error)
    }
}

impl<E: fmt::Display> fmt::Display for BuildError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graph enumeration failed while building the forest: {}", self.error)
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for BuildError<E> {}

/// A single-parent projection of a possibly cyclic, multiply-referenced graph.
///
/// `Forest` records, for every node reachable from the supplied roots, which
/// node owns it and which nodes it owns, using first-claim-wins semantics (see
/// the [crate docs](crate) for the full ownership rules). It is built once by
/// [`Forest::build`] and immutable afterwards; all lookups are cheap reads.
///
/// # Determinism
///
/// Node discovery order is recorded explicitly during the walk and every
/// derived sequence (children, roots, [`nodes`](Self::nodes)) iterates that
/// recorded order, never a hash map's. Rebuilding over an unchanged graph with
/// the same root order therefore reproduces the same forest, as long as the
/// source itself enumerates deterministically.
///
/// # Rows
///
/// Each node's row within its owner's children (or within the root sequence,
/// for roots) is recorded at claim time, making [`row`](Self::row) and
/// owner-row lookups O(1) rather than a linear sibling scan.
#[derive(Clone, Debug)]
pub struct Forest<K>
where
    K: Copy + Eq + Hash,
{
    /// Each claimed node's unique owner. Roots have no entry.
    owners: HashMap<K, K>,
    /// Each visited node's claimed children, in claim order.
    children: HashMap<K, ChildList<K>>,
    /// Each node's row within its owner context.
    rows: HashMap<K, usize>,
    /// All visited nodes, in discovery order.
    order: Vec<K>,
    /// Visited nodes with no owner, in discovery order.
    roots: Vec<K>,
}

impl<K> Forest<K>
where
    K: Copy + Eq + Hash,
{
    /// Projects the graph reachable from `roots` into a forest.
    ///
    /// Roots are walked in the given order; within each root, nodes are
    /// visited in the order [`GraphSource::reachable`] defines. Every visited
    /// node gets a children entry (possibly empty), and each of its references
    /// is claimed if no earlier claim exists and the claim would not make a
    /// node its own ancestor. A node reachable from two roots ends up under
    /// whichever root's walk scans it first and does not appear under the
    /// other at all.
    ///
    /// An empty `roots` sequence produces an empty forest. Listing the same
    /// root twice is harmless; the second walk finds everything already
    /// claimed.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] wrapping the first error the source reports
    /// during enumeration. Nothing built so far is retained.
    pub fn build<S>(
        source: &S,
        roots: impl IntoIterator<Item = K>,
    ) -> Result<Self, BuildError<S::Error>>
    where
        S: GraphSource<NodeId = K>,
    {
        let mut owners: HashMap<K, K> = HashMap::new();
        let mut children: HashMap<K, ChildList<K>> = HashMap::new();
        let mut rows: HashMap<K, usize> = HashMap::new();
        let mut order: Vec<K> = Vec::new();

        for root in roots {
            let visited = source.reachable(root).map_err(|error| BuildError { error })?;
            for node in visited {
                if !children.contains_key(&node) {
                    children.insert(node, ChildList::new());
                    order.push(node);
                }
                for candidate in source
                    .references(node)
                    .map_err(|error| BuildError { error })?
                {
                    if owners.contains_key(&candidate) {
                        // Already claimed elsewhere; this edge is dropped.
                        continue;
                    }
                    if is_ancestor(&owners, candidate, node) {
                        // Claiming an ancestor (or itself) would close an
                        // ownership cycle; this edge is dropped too.
                        continue;
                    }
                    owners.insert(candidate, node);
                    let siblings = children.entry(node).or_default();
                    rows.insert(candidate, siblings.len());
                    siblings.push(candidate);
                }
            }
        }

        let mut roots_out = Vec::new();
        for &node in &order {
            if !owners.contains_key(&node) {
                rows.insert(node, roots_out.len());
                roots_out.push(node);
            }
        }

        Ok(Self {
            owners,
            children,
            rows,
            order,
            roots: roots_out,
        })
    }

    /// Returns the nodes with no owner, in discovery order.
    #[must_use]
    pub fn roots(&self) -> &[K] {
        &self.roots
    }

    /// Returns the nodes claimed by `node`, in claim order.
    ///
    /// Unknown nodes have no children; the returned slice is empty.
    #[must_use]
    pub fn children(&self, node: K) -> &[K] {
        self.children.get(&node).map_or(&[], |c| c.as_slice())
    }

    /// Returns the unique owner of `node`, or `None` for roots and unknown
    /// nodes.
    #[must_use]
    pub fn owner(&self, node: K) -> Option<K> {
        self.owners.get(&node).copied()
    }

    /// Returns `node`'s row within its owner's children, or within the root
    /// sequence if `node` is a root. `None` for unknown nodes.
    #[must_use]
    pub fn row(&self, node: K) -> Option<usize> {
        self.rows.get(&node).copied()
    }

    /// Returns `true` if `node` was visited during the build.
    #[must_use]
    pub fn contains(&self, node: K) -> bool {
        self.children.contains_key(&node)
    }

    /// Returns the number of visited nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no nodes were visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns an iterator over all visited nodes, in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = K> + '_ {
        self.order.iter().copied()
    }

    /// Returns an iterator over the subtree owned by `node`, excluding `node`
    /// itself, in depth-first order.
    ///
    /// Ownership links form a forest, so no visited-set is needed; the walk
    /// cannot revisit a node.
    pub fn descendants(&self, node: K) -> impl Iterator<Item = K> + '_ {
        let mut stack: Vec<K> = Vec::new();
        stack.extend(self.children(node).iter().rev());
        Descendants {
            forest: self,
            stack,
        }
    }
}

/// Returns `true` if `candidate` is `node` itself or an ancestor of `node`
/// along owner links.
///
/// Terminates because every edge already in `owners` passed this same check,
/// so owner chains never loop.
fn is_ancestor<K>(owners: &HashMap<K, K>, candidate: K, mut node: K) -> bool
where
    K: Copy + Eq + Hash,
{
    loop {
        if node == candidate {
            return true;
        }
        match owners.get(&node) {
            Some(&owner) => node = owner,
            None => return false,
        }
    }
}

/// Depth-first iterator over a claimed subtree.
struct Descendants<'a, K>
where
    K: Copy + Eq + Hash,
{
    forest: &'a Forest<K>,
    stack: Vec<K>,
}

impl<K> Iterator for Descendants<'_, K>
where
    K: Copy + Eq + Hash,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order so pops match claim order.
        self.stack.extend(self.forest.children(node).iter().rev());
        Some(node)
    }
}
