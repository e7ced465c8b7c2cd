//! Field-by-field value equality.
//!
//! [`ValueEq::diff`] walks two values in a fixed field order and stops at the
//! first field that differs, returning its path. Optional fields follow a
//! presence policy: two absent values are equal, an absent and a present value
//! are not, and two present values compare their contents. Lists are ordered,
//! so a reordering is a difference.

use std::fmt;

use crate::Timestamp;

/// One step of a [`Mismatch`] path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A wire key of a record.
    Key(&'static str),
    /// A position in a list.
    Index(usize),
}

/// Location of the first differing field between two values.
///
/// An empty path means the compared values themselves differ (two scalars,
/// lists of different lengths, or a present/absent pair).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mismatch {
    /// Innermost segment first; reversed on read.
    reversed: Vec<PathSegment>,
}

impl Mismatch {
    /// A mismatch at the value being compared.
    pub fn here() -> Self {
        Self::default()
    }

    /// Segments from the outermost record to the differing value.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.reversed.iter().rev()
    }

    /// Returns `true` if the compared values themselves differ.
    pub fn is_root(&self) -> bool {
        self.reversed.is_empty()
    }

    /// Dotted path of the differing field, e.g. `tags[1].name`.
    pub fn path(&self) -> String {
        self.to_string()
    }

    fn within_key(mut self, key: &'static str) -> Self {
        self.reversed.push(PathSegment::Key(key));
        self
    }

    fn within_index(mut self, index: usize) -> Self {
        self.reversed.push(PathSegment::Index(index));
        self
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("(value)");
        }
        for (i, segment) in self.segments().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Semantic equality that reports where two values diverge.
pub trait ValueEq {
    /// Returns the first differing field, or `None` if the values are equal.
    fn diff(&self, other: &Self) -> Option<Mismatch>;

    /// Returns `true` if every field is equal.
    fn value_eq(&self, other: &Self) -> bool {
        self.diff(other).is_none()
    }
}

/// Compares two values of the same resource type.
pub fn value_eq<T: ValueEq + ?Sized>(left: &T, right: &T) -> bool {
    left.value_eq(right)
}

macro_rules! scalar_value_eq {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ValueEq for $ty {
                fn diff(&self, other: &Self) -> Option<Mismatch> {
                    (self != other).then(Mismatch::here)
                }
            }
        )+
    };
}

scalar_value_eq!(str, String, i64, bool);

impl ValueEq for Timestamp {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        // Offsets are presentation only; compare the UTC instant.
        (self.naive_utc() != other.naive_utc()).then(Mismatch::here)
    }
}

impl<T: ValueEq> ValueEq for Option<T> {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        match (self, other) {
            (None, None) => None,
            (Some(left), Some(right)) => left.diff(right),
            _ => Some(Mismatch::here()),
        }
    }
}

impl<T: ValueEq> ValueEq for [T] {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        if self.len() != other.len() {
            return Some(Mismatch::here());
        }
        self.iter()
            .zip(other)
            .enumerate()
            .find_map(|(i, (left, right))| left.diff(right).map(|m| m.within_index(i)))
    }
}

impl<T: ValueEq> ValueEq for Vec<T> {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        self.as_slice().diff(other.as_slice())
    }
}

/// Short-circuiting field-by-field comparison of two records.
///
/// ```
/// use qiita_core::compare::Comparison;
/// use qiita_core::Team;
///
/// let a = Team { id: "increments".into(), active: true, name: "Increments".into() };
/// let b = Team { active: false, ..a.clone() };
///
/// let mismatch = Comparison::new(&a, &b)
///     .field("id", |t| &t.id)
///     .field("active", |t| &t.active)
///     .field("name", |t| &t.name)
///     .finish();
/// assert_eq!(mismatch.unwrap().path(), "active");
/// ```
pub struct Comparison<'a, R> {
    left: &'a R,
    right: &'a R,
    mismatch: Option<Mismatch>,
}

impl<'a, R> Comparison<'a, R> {
    pub fn new(left: &'a R, right: &'a R) -> Self {
        Self {
            left,
            right,
            mismatch: None,
        }
    }

    /// Compares the field stored under wire key `key`.
    pub fn field<T>(mut self, key: &'static str, get: impl Fn(&R) -> &T) -> Self
    where
        T: ValueEq + ?Sized,
    {
        if self.mismatch.is_none() {
            self.mismatch = get(self.left)
                .diff(get(self.right))
                .map(|m| m.within_key(key));
        }
        self
    }

    /// Compares a record whose fields are inlined into this one on the wire.
    pub fn embedded<T>(mut self, get: impl Fn(&R) -> &T) -> Self
    where
        T: ValueEq,
    {
        if self.mismatch.is_none() {
            self.mismatch = get(self.left).diff(get(self.right));
        }
        self
    }

    pub fn finish(self) -> Option<Mismatch> {
        self.mismatch
    }
}

/// Implements `PartialEq` through [`ValueEq`] so `==` follows the same rules.
macro_rules! partial_eq_by_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    $crate::compare::ValueEq::value_eq(self, other)
                }
            }
        )+
    };
}

pub(crate) use partial_eq_by_value;
