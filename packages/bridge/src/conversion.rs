//! The conversion trait every native/shadow pair implements.

use std::hash::Hash;

use indexmap::IndexSet;

/// A bidirectional conversion between a native type and its shadow
/// counterpart.
///
/// Implementors provide [`encode`](Conversion::encode) and
/// [`decode`](Conversion::decode). The lifts over `Option`, `Vec`,
/// `IndexSet` and slices come for free. Absence is never turned into an
/// empty container: a missing container is `None` and goes through
/// `Option::map` with any of the lifts.
pub trait Conversion {
    type Native;
    type Shadow;

    /// Convert a native value to the shadow hierarchy.
    fn encode(value: Self::Native) -> Self::Shadow;

    /// Convert a shadow value to the native hierarchy.
    fn decode(value: Self::Shadow) -> Self::Native;

    fn encode_opt(value: Option<Self::Native>) -> Option<Self::Shadow> {
        value.map(Self::encode)
    }

    fn decode_opt(value: Option<Self::Shadow>) -> Option<Self::Native> {
        value.map(Self::decode)
    }

    /// Element-wise, keeping order and length.
    fn encode_list(values: Vec<Self::Native>) -> Vec<Self::Shadow> {
        values.into_iter().map(Self::encode).collect()
    }

    fn decode_list(values: Vec<Self::Shadow>) -> Vec<Self::Native> {
        values.into_iter().map(Self::decode).collect()
    }

    /// Element-wise, keeping insertion order. When two inputs convert to
    /// equal outputs the first one is kept.
    fn encode_set(values: IndexSet<Self::Native>) -> IndexSet<Self::Shadow>
    where
        Self::Shadow: Hash + Eq,
    {
        values.into_iter().map(Self::encode).collect()
    }

    fn decode_set(values: IndexSet<Self::Shadow>) -> IndexSet<Self::Native>
    where
        Self::Native: Hash + Eq,
    {
        values.into_iter().map(Self::decode).collect()
    }

    /// `result[i]` is `encode(values[i])`.
    fn encode_array(values: &[Self::Native]) -> Box<[Self::Shadow]>
    where
        Self::Native: Clone,
    {
        values.iter().cloned().map(Self::encode).collect()
    }

    fn decode_array(values: &[Self::Shadow]) -> Box<[Self::Native]>
    where
        Self::Shadow: Clone,
    {
        values.iter().cloned().map(Self::decode).collect()
    }
}
