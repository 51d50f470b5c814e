use crate::types::alloc_type::{BTreeMap, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Aggregate produced by [`flatten_any`](crate::ops::aggregate::flatten_any).
///
/// The variant mirrors the runtime shape of the input collection. `VecDeque`
/// inputs land in [`Shape::Seq`]; `HashMap` inputs land in [`Shape::Map`],
/// ordered by key.
///
/// # Examples
///
/// ```
/// use result_rail::Shape;
///
/// let seq: Shape<&str, u8> = Shape::Seq(vec![1, 2]);
/// assert!(seq.is_seq());
/// assert_eq!(seq.len(), 2);
/// assert_eq!(seq.into_map(), None);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "K: Serialize, T: Serialize",
        deserialize = "K: Ord + Deserialize<'de>, T: Deserialize<'de>"
    ))
)]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Shape<K, T> {
    /// Values of a sequence input, in input order.
    Seq(Vec<T>),
    /// Values of a map input, under their original keys.
    Map(BTreeMap<K, T>),
}

impl<K, T> Shape<K, T> {
    /// Returns `true` if the input was a sequence.
    #[must_use]
    #[inline]
    pub fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// Returns `true` if the input was a map.
    #[must_use]
    #[inline]
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Number of values, whichever the shape.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Seq(values) => values.len(),
            Self::Map(entries) => entries.len(),
        }
    }

    /// Returns `true` if there are no values.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sequence payload, or `None` for a map.
    #[must_use]
    #[inline]
    pub fn into_seq(self) -> Option<Vec<T>> {
        match self {
            Self::Seq(values) => Some(values),
            Self::Map(_) => None,
        }
    }

    /// Returns the map payload, or `None` for a sequence.
    #[must_use]
    #[inline]
    pub fn into_map(self) -> Option<BTreeMap<K, T>> {
        match self {
            Self::Seq(_) => None,
            Self::Map(entries) => Some(entries),
        }
    }
}
