//! Value accessors for documents and models
//!
//! Documents and models are both trees of [`Node`]s. Composite types list their
//! children once in a [`path_node!`] table; optional and repeated children are
//! handled by the blanket `Option<T>` and `Vec<T>` impls; leaves go through
//! [`leaf_node!`] and their [`Leaf`](crate::value::Leaf) converter.
//!
//! Reads never allocate and report an absent optional element as `Ok(None)`.
//! Writes allocate optional elements and grow repeated elements to the
//! requested index with default entries.

use crate::error::AccessError;
use crate::path::{Path, Step};
use crate::value::Value;
use std::fmt;

/// What a path resolves to, independent of any live data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single value
    Leaf,
    /// An element with named children
    Composite,
    /// A repeated element
    Sequence,
}

/// A tree addressable by [`Path`]s
pub trait Node: fmt::Debug {
    /// Descend without allocating. `Ok(None)` when an optional element on the way is absent.
    fn child(&self, path: &[Step]) -> Result<Option<&dyn Node>, AccessError>;

    /// Descend, allocating optional elements and growing repeated ones
    fn child_mut(&mut self, path: &[Step]) -> Result<&mut dyn Node, AccessError>;

    /// Leaf value; `Ok(None)` for an absent optional leaf
    fn value(&self) -> Result<Option<Value>, AccessError>;

    /// Overwrite the leaf value
    fn assign(&mut self, value: Value) -> Result<(), AccessError>;

    /// Live length of a repeated element
    fn count(&self) -> Option<usize>;

    /// True when the subtree holds only zero values
    fn is_blank(&self) -> bool;

    /// Resolve `path` against the type. `self` serves only as a type witness.
    fn shape(&self, path: &[Step]) -> Result<Shape, AccessError>;
}

/// Split the leading field name off `path`
///
/// `Ok(None)` for the empty path.
pub fn split_field(path: &[Step]) -> Result<Option<(&str, &[Step])>, AccessError> {
    match path.split_first() {
        None => Ok(None),
        Some((Step::Field(name), rest)) => Ok(Some((name.as_str(), rest))),
        Some((Step::Index(index), _)) => Err(AccessError::NotRepeated(*index)),
    }
}

/// Error for a path continuing below a leaf
pub fn past_leaf(path: &[Step]) -> AccessError {
    AccessError::PastLeaf(path.first().map(ToString::to_string).unwrap_or_default())
}

/// Read the leaf at `path`
pub fn get_value(root: &dyn Node, path: &Path) -> Result<Option<Value>, AccessError> {
    match root.child(path.steps())? {
        Some(node) => node.value(),
        None => Ok(None),
    }
}

/// Write the leaf at `path`
pub fn set_value(root: &mut dyn Node, path: &Path, value: Value) -> Result<(), AccessError> {
    root.child_mut(path.steps())?.assign(value)
}

/// Live length of the repeated element at `path`
///
/// Absent elements count as empty.
pub fn element_count(root: &dyn Node, path: &Path) -> Result<usize, AccessError> {
    match root.child(path.steps()) {
        Ok(Some(node)) => node
            .count()
            .ok_or_else(|| AccessError::MissingIndex(path.to_string())),
        Ok(None) | Err(AccessError::IndexOutOfBounds { .. }) => Ok(0),
        Err(e) => Err(e),
    }
}

/// True when nothing but zero values lives at `path`
pub fn is_blank_at(root: &dyn Node, path: &Path) -> Result<bool, AccessError> {
    match root.child(path.steps()) {
        Ok(node) => Ok(node.map_or(true, |n| n.is_blank())),
        Err(AccessError::IndexOutOfBounds { .. }) => Ok(true),
        Err(e) => Err(e),
    }
}

impl<T: Node + Default> Node for Option<T> {
    fn child(&self, path: &[Step]) -> Result<Option<&dyn Node>, AccessError> {
        match self {
            Some(inner) => inner.child(path),
            None => Ok(None),
        }
    }

    fn child_mut(&mut self, path: &[Step]) -> Result<&mut dyn Node, AccessError> {
        if path.is_empty() {
            return Ok(self as &mut dyn Node);
        }
        self.get_or_insert_with(T::default).child_mut(path)
    }

    fn value(&self) -> Result<Option<Value>, AccessError> {
        match self {
            Some(inner) => inner.value(),
            None => Ok(None),
        }
    }

    fn assign(&mut self, value: Value) -> Result<(), AccessError> {
        match self {
            Some(inner) => inner.assign(value),
            None => {
                let mut inner = T::default();
                inner.assign(value)?;
                *self = Some(inner);
                Ok(())
            }
        }
    }

    fn count(&self) -> Option<usize> {
        match self {
            Some(inner) => inner.count(),
            None => Some(0),
        }
    }

    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, Node::is_blank)
    }

    fn shape(&self, path: &[Step]) -> Result<Shape, AccessError> {
        T::default().shape(path)
    }
}

impl<T: Node + Default> Node for Vec<T> {
    fn child(&self, path: &[Step]) -> Result<Option<&dyn Node>, AccessError> {
        match path.split_first() {
            None => Ok(Some(self as &dyn Node)),
            Some((Step::Index(index), rest)) => match self.get(*index) {
                Some(element) => element.child(rest),
                None => Err(AccessError::IndexOutOfBounds {
                    index: *index,
                    len: self.len(),
                }),
            },
            Some((Step::Field(name), _)) => Err(AccessError::MissingIndex(name.clone())),
        }
    }

    fn child_mut(&mut self, path: &[Step]) -> Result<&mut dyn Node, AccessError> {
        match path.split_first() {
            None => Ok(self as &mut dyn Node),
            Some((Step::Index(index), rest)) => {
                if *index >= self.len() {
                    let len = index.checked_add(1).ok_or(AccessError::IndexOutOfBounds {
                        index: *index,
                        len: self.len(),
                    })?;
                    self.resize_with(len, T::default);
                }
                self[*index].child_mut(rest)
            }
            Some((Step::Field(name), _)) => Err(AccessError::MissingIndex(name.clone())),
        }
    }

    fn value(&self) -> Result<Option<Value>, AccessError> {
        Err(AccessError::NotALeaf)
    }

    fn assign(&mut self, _value: Value) -> Result<(), AccessError> {
        Err(AccessError::NotALeaf)
    }

    fn count(&self) -> Option<usize> {
        Some(self.len())
    }

    fn is_blank(&self) -> bool {
        self.iter().all(Node::is_blank)
    }

    fn shape(&self, path: &[Step]) -> Result<Shape, AccessError> {
        match path.split_first() {
            None => Ok(Shape::Sequence),
            Some((Step::Index(_), rest)) => T::default().shape(rest),
            Some((Step::Field(name), _)) => Err(AccessError::MissingIndex(name.clone())),
        }
    }
}

/// Implement [`Node`] for leaf types that implement [`Leaf`](crate::value::Leaf)
#[macro_export]
macro_rules! leaf_node {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::access::Node for $ty {
            fn child(
                &self,
                path: &[$crate::path::Step],
            ) -> ::std::result::Result<
                ::std::option::Option<&dyn $crate::access::Node>,
                $crate::error::AccessError,
            > {
                if path.is_empty() {
                    Ok(Some(self as &dyn $crate::access::Node))
                } else {
                    Err($crate::access::past_leaf(path))
                }
            }

            fn child_mut(
                &mut self,
                path: &[$crate::path::Step],
            ) -> ::std::result::Result<&mut dyn $crate::access::Node, $crate::error::AccessError> {
                if path.is_empty() {
                    Ok(self as &mut dyn $crate::access::Node)
                } else {
                    Err($crate::access::past_leaf(path))
                }
            }

            fn value(
                &self,
            ) -> ::std::result::Result<
                ::std::option::Option<$crate::value::Value>,
                $crate::error::AccessError,
            > {
                Ok(Some($crate::value::Leaf::to_value(self)))
            }

            fn assign(
                &mut self,
                value: $crate::value::Value,
            ) -> ::std::result::Result<(), $crate::error::AccessError> {
                *self = $crate::value::Leaf::from_value(value)?;
                Ok(())
            }

            fn count(&self) -> ::std::option::Option<usize> {
                None
            }

            fn is_blank(&self) -> bool {
                $crate::value::Leaf::is_zero(self)
            }

            fn shape(
                &self,
                path: &[$crate::path::Step],
            ) -> ::std::result::Result<$crate::access::Shape, $crate::error::AccessError> {
                if path.is_empty() {
                    Ok($crate::access::Shape::Leaf)
                } else {
                    Err($crate::access::past_leaf(path))
                }
            }
        }
    )+};
}

/// Implement [`Node`] for a struct from its `"Name" => field` table
#[macro_export]
macro_rules! path_node {
    (@methods $($tag:literal => $field:ident),*) => {
        fn child(
            &self,
            path: &[$crate::path::Step],
        ) -> ::std::result::Result<
            ::std::option::Option<&dyn $crate::access::Node>,
            $crate::error::AccessError,
        > {
            let Some((name, rest)) = $crate::access::split_field(path)? else {
                return Ok(Some(self as &dyn $crate::access::Node));
            };
            match name {
                $($tag => $crate::access::Node::child(&self.$field, rest),)*
                _ => Err($crate::error::AccessError::FieldNotFound(name.to_string())),
            }
        }

        fn child_mut(
            &mut self,
            path: &[$crate::path::Step],
        ) -> ::std::result::Result<&mut dyn $crate::access::Node, $crate::error::AccessError> {
            let Some((name, rest)) = $crate::access::split_field(path)? else {
                return Ok(self as &mut dyn $crate::access::Node);
            };
            match name {
                $($tag => $crate::access::Node::child_mut(&mut self.$field, rest),)*
                _ => Err($crate::error::AccessError::FieldNotFound(name.to_string())),
            }
        }

        fn value(
            &self,
        ) -> ::std::result::Result<
            ::std::option::Option<$crate::value::Value>,
            $crate::error::AccessError,
        > {
            Err($crate::error::AccessError::NotALeaf)
        }

        fn assign(
            &mut self,
            _value: $crate::value::Value,
        ) -> ::std::result::Result<(), $crate::error::AccessError> {
            Err($crate::error::AccessError::NotALeaf)
        }

        fn count(&self) -> ::std::option::Option<usize> {
            None
        }

        fn is_blank(&self) -> bool {
            true $(&& $crate::access::Node::is_blank(&self.$field))*
        }

        fn shape(
            &self,
            path: &[$crate::path::Step],
        ) -> ::std::result::Result<$crate::access::Shape, $crate::error::AccessError> {
            let Some((name, rest)) = $crate::access::split_field(path)? else {
                return Ok($crate::access::Shape::Composite);
            };
            match name {
                $($tag => $crate::access::Node::shape(&self.$field, rest),)*
                _ => Err($crate::error::AccessError::FieldNotFound(name.to_string())),
            }
        }
    };
    (impl<$gen:ident : $bound:path> $ty:ty { $($tag:literal => $field:ident),* $(,)? }) => {
        impl<$gen: $bound> $crate::access::Node for $ty {
            $crate::path_node!(@methods $($tag => $field),*);
        }
    };
    ($ty:ty { $($tag:literal => $field:ident),* $(,)? }) => {
        impl $crate::access::Node for $ty {
            $crate::path_node!(@methods $($tag => $field),*);
        }
    };
}

leaf_node!(
    String,
    bool,
    rust_decimal::Decimal,
    chrono::DateTime<chrono::Utc>,
    chrono::NaiveDate,
);
