//! Equality-or-membership matching used by the either/or assertions.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Something a value can be checked against: by equality, by membership, or both.
///
/// Scalars only support equality, text supports equality and substring
/// containment, and collections support element (or key) membership. Wrap a
/// collection in [`Exactly`] to compare it with the value as a whole.
pub trait Candidate<V: ?Sized> {
    /// Returns `true` when the candidate itself equals `value`.
    fn equals(&self, value: &V) -> bool;

    /// Returns `true` when `value` is a member of the candidate.
    fn holds(&self, value: &V) -> bool;

    /// Either disjunct.
    fn admits(&self, value: &V) -> bool {
        self.equals(value) || self.holds(value)
    }
}

macro_rules! scalar_candidate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Candidate<$ty> for $ty {
                fn equals(&self, value: &$ty) -> bool {
                    self == value
                }

                fn holds(&self, _value: &$ty) -> bool {
                    false
                }
            }
        )*
    };
}

scalar_candidate!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl Candidate<str> for str {
    fn equals(&self, value: &str) -> bool {
        self == value
    }

    fn holds(&self, value: &str) -> bool {
        str::contains(self, value)
    }
}

impl<'a> Candidate<&'a str> for str {
    fn equals(&self, value: &&'a str) -> bool {
        self == *value
    }

    fn holds(&self, value: &&'a str) -> bool {
        str::contains(self, *value)
    }
}

impl Candidate<String> for str {
    fn equals(&self, value: &String) -> bool {
        self == value.as_str()
    }

    fn holds(&self, value: &String) -> bool {
        str::contains(self, value.as_str())
    }
}

impl Candidate<char> for str {
    fn equals(&self, value: &char) -> bool {
        let mut chars = self.chars();
        chars.next() == Some(*value) && chars.next().is_none()
    }

    fn holds(&self, value: &char) -> bool {
        str::contains(self, *value)
    }
}

impl Candidate<str> for String {
    fn equals(&self, value: &str) -> bool {
        Candidate::<str>::equals(self.as_str(), value)
    }

    fn holds(&self, value: &str) -> bool {
        Candidate::<str>::holds(self.as_str(), value)
    }
}

impl<'a> Candidate<&'a str> for String {
    fn equals(&self, value: &&'a str) -> bool {
        Candidate::<&str>::equals(self.as_str(), value)
    }

    fn holds(&self, value: &&'a str) -> bool {
        Candidate::<&str>::holds(self.as_str(), value)
    }
}

impl Candidate<String> for String {
    fn equals(&self, value: &String) -> bool {
        self == value
    }

    fn holds(&self, value: &String) -> bool {
        Candidate::<String>::holds(self.as_str(), value)
    }
}

impl Candidate<char> for String {
    fn equals(&self, value: &char) -> bool {
        Candidate::<char>::equals(self.as_str(), value)
    }

    fn holds(&self, value: &char) -> bool {
        Candidate::<char>::holds(self.as_str(), value)
    }
}

macro_rules! sequence_candidate {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<V: ?Sized, T: PartialEq<V>, $($generics)*> Candidate<V> for $ty {
                fn equals(&self, _value: &V) -> bool {
                    false
                }

                fn holds(&self, value: &V) -> bool {
                    self.iter().any(|item| item == value)
                }
            }
        )*
    };
}

sequence_candidate!(
    [] [T],
    [const N: usize] [T; N],
    [] Vec<T>,
    [] VecDeque<T>,
    [] BTreeSet<T>,
    [S] HashSet<T, S>,
);

impl<V: ?Sized, K: PartialEq<V>, W> Candidate<V> for BTreeMap<K, W> {
    fn equals(&self, _value: &V) -> bool {
        false
    }

    fn holds(&self, value: &V) -> bool {
        self.keys().any(|key| key == value)
    }
}

impl<V: ?Sized, K: PartialEq<V>, W, S> Candidate<V> for HashMap<K, W, S> {
    fn equals(&self, _value: &V) -> bool {
        false
    }

    fn holds(&self, value: &V) -> bool {
        self.keys().any(|key| key == value)
    }
}

/// A candidate that matches only when it equals the value as a whole.
///
/// Collections are matched by membership by default, so `vec!["foo"]` is a
/// candidate for `"foo"`. `Exactly(vec!["foo"])` is instead a candidate for
/// `vec!["foo"]` itself, or for anything else the collection compares equal
/// to, such as `["foo"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exactly<C>(pub C);

impl<V: ?Sized, C: PartialEq<V>> Candidate<V> for Exactly<C> {
    fn equals(&self, value: &V) -> bool {
        self.0 == *value
    }

    fn holds(&self, _value: &V) -> bool {
        false
    }
}

impl<V: ?Sized, C: Candidate<V> + ?Sized> Candidate<V> for &C {
    fn equals(&self, value: &V) -> bool {
        (**self).equals(value)
    }

    fn holds(&self, value: &V) -> bool {
        (**self).holds(value)
    }
}

impl<V: ?Sized, C: Candidate<V> + ?Sized> Candidate<V> for Box<C> {
    fn equals(&self, value: &V) -> bool {
        (**self).equals(value)
    }

    fn holds(&self, value: &V) -> bool {
        (**self).holds(value)
    }
}
