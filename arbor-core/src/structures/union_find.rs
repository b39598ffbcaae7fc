//! Union-find (disjoint set union) used by Kruskal's algorithm.
//!
//! `find` applies full path compression and `union` merges by rank, so long
//! sequences of operations run in near-constant amortised time.

use crate::error::DisjointSetError;

/// Disjoint-set forest over the elements `[0, len)`.
///
/// # Examples
/// ```
/// use arbor_core::structures::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// sets.union(0, 1)?;
/// sets.union(2, 3)?;
/// assert!(sets.connected(0, 1)?);
/// assert!(!sets.connected(1, 2)?);
/// assert_eq!(sets.component_count(), 2);
/// # Ok::<(), arbor_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of tracked elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the representative of the set holding `element`.
    ///
    /// Every node visited on the way to the root is re-parented directly to
    /// the root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] for unknown elements.
    pub fn find(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        self.check(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element;
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        Ok(root)
    }

    /// Merges the sets holding `left` and `right`.
    ///
    /// The root of lower rank is attached under the other; on a tie the
    /// root of `left` becomes the parent and its rank grows by one. Returns
    /// `false` when both elements already shared a set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] for unknown elements.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        let mut left = self.find(left)?;
        let mut right = self.find(right)?;
        if left == right {
            return Ok(false);
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::OutOfRange`] for unknown elements.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, element: usize) -> Result<(), DisjointSetError> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetError::OutOfRange {
                element,
                len: self.parent.len(),
            })
        }
    }
}
