//! Trait bounds for vertex identities and edge weights.

use core::fmt::Debug;
use core::hash::Hash;

use num_traits::{Bounded, CheckedAdd};

/// A vertex identity.
///
/// Used both as a hash key (the vertex table) and as an ordering key (the
/// neighbor sets and the shortest-path result), hence `Hash + Ord`.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}

/// An edge weight.
///
/// `Default::default()` is the zero cost and the default edge weight;
/// `Bounded::max_value()` is the "unreached" sentinel.
pub trait Weight: Copy + Ord + Default + Debug + Bounded + CheckedAdd {
    /// The cost reported for vertices the source cannot reach.
    #[inline]
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Returns `true` if this equals the sentinel. A reached vertex can cost
    /// exactly this much, so reachability is tracked separately.
    #[inline]
    fn is_infinite(&self) -> bool {
        *self == Self::infinity()
    }
}

impl<T> Weight for T where T: Copy + Ord + Default + Debug + Bounded + CheckedAdd {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vertex<V: Vertex>() {}

    #[test]
    fn test_common_vertex_types() {
        assert_vertex::<i32>();
        assert_vertex::<u64>();
        assert_vertex::<String>();
        assert_vertex::<&str>();
        assert_vertex::<(u8, char)>();
    }

    #[test]
    fn test_infinity_is_max() {
        assert_eq!(<i32 as Weight>::infinity(), i32::MAX);
        assert_eq!(<u8 as Weight>::infinity(), u8::MAX);
        assert!(u64::MAX.is_infinite());
        assert!(!0u64.is_infinite());
    }
}
