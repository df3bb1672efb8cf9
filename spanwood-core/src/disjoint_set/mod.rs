//! Union-find (disjoint set union) over dense integer ids.
//!
//! Kruskal and Borůvka track forest components with this structure. It
//! knows nothing about graphs: elements are plain indices in `[0, n)`.
//!
//! Unions attach the root of the smaller tree under the root of the larger
//! (union by size), and [`DisjointSet::find`] compresses the path it walks
//! so every visited element points straight at the root afterwards.
//! Together these give near-constant amortised cost per operation (inverse
//! Ackermann); union by size alone already bounds tree height by
//! `log2(n)`.

use crate::error::DisjointSetError;

/// Disjoint-set forest with union by size and full path compression.
///
/// # Examples
/// ```
/// use spanwood_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert!(sets.connected(0, 1)?);
/// assert_eq!(sets.count(), 3);
/// # Ok::<(), spanwood_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// Creates `len` singleton components.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of components.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the representative of the component containing `element`.
    ///
    /// Compresses the walked path as a side effect; the returned root is
    /// the same before and after compression.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] for an unknown element.
    pub fn find(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        self.validate(element)?;
        Ok(self.find_root(element))
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] for an unknown element.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `true` when two distinct components were merged and `false`
    /// when they were already one component, in which case nothing changes.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] for an unknown element.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        // Ties keep the left root on top.
        let (root, child) = if self.size[left_root] < self.size[right_root] {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.count -= 1;
        Ok(true)
    }

    /// Returns the number of elements in the component containing `element`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::ElementOutOfRange`] for an unknown element.
    pub fn component_size(&mut self, element: usize) -> Result<usize, DisjointSetError> {
        let root = self.find(element)?;
        Ok(self.size[root])
    }

    fn validate(&self, element: usize) -> Result<(), DisjointSetError> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetError::ElementOutOfRange {
                element,
                len: self.parent.len(),
            })
        }
    }

    fn find_root(&mut self, mut element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[element] != root {
            let next = self.parent[element];
            self.parent[element] = root;
            element = next;
        }

        root
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, element: usize) -> usize {
        self.parent[element]
    }
}
