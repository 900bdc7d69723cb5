//! Path map tables
//!
//! A [`PathMap`] lists, for one schema version, which document path feeds which
//! model path. Repeated elements carry a per-element sub-map that the
//! [remapper](crate::remap) expands against live data.
//!
//! ```
//! use wire20022::table::PathMap;
//!
//! let map = PathMap::builder()
//!     .field("BkToCstmrAcctRpt.GrpHdr.MsgId", "MessageId")
//!     .repeated("BkToCstmrAcctRpt.Rpt[0].Ntry : EntryDetails", |e| {
//!         e.field("Amt.Value", "Amount.Amount")
//!             .field("Amt.Ccy", "Amount.Currency")
//!     })
//!     .build()
//!     .unwrap();
//! assert_eq!(map.len(), 2);
//! ```

use crate::access::{Node, Shape};
use crate::error::{AccessError, FieldError, PathError};
use crate::path::{split_repeated, Path};

/// Element-relative mapping inside a repeated entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMapping {
    /// Path below one document element
    pub document: Path,
    /// Path below one model element
    pub model: Path,
}

/// One table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mapping {
    /// Single leaf to single leaf
    Field {
        /// Document path
        document: Path,
        /// Model path
        model: Path,
    },
    /// Repeated document element to a model sequence
    Repeated {
        /// Document sequence
        document: Path,
        /// Model sequence
        model: Path,
        /// Per-element sub-map
        elements: Vec<ElementMapping>,
    },
}

impl Mapping {
    /// Document-side path of the entry
    pub fn document(&self) -> &Path {
        match self {
            Mapping::Field { document, .. } | Mapping::Repeated { document, .. } => document,
        }
    }

    /// Model-side path of the entry
    pub fn model(&self) -> &Path {
        match self {
            Mapping::Field { model, .. } | Mapping::Repeated { model, .. } => model,
        }
    }
}

/// Immutable mapping table for one schema version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMap {
    entries: Vec<Mapping>,
}

impl PathMap {
    /// Start building a table
    pub fn builder() -> PathMapBuilder {
        PathMapBuilder::default()
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[Mapping] {
        &self.entries
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Mapping> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve every entry against a document and a model type
    ///
    /// Fields must end at leaves on both sides; repeated entries must start at
    /// sequences, and their element paths must end at leaves.
    pub fn check(&self, document: &dyn Node, model: &dyn Node) -> Result<(), FieldError> {
        for mapping in &self.entries {
            match mapping {
                Mapping::Field { document: d, model: m } => {
                    expect_shape(document, d, Shape::Leaf)?;
                    expect_shape(model, m, Shape::Leaf)?;
                }
                Mapping::Repeated {
                    document: d,
                    model: m,
                    elements,
                } => {
                    expect_shape(document, d, Shape::Sequence)?;
                    expect_shape(model, m, Shape::Sequence)?;
                    for element in elements {
                        expect_shape(document, &d.with_index(0).join(&element.document), Shape::Leaf)?;
                        expect_shape(model, &m.with_index(0).join(&element.model), Shape::Leaf)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a PathMap {
    type Item = &'a Mapping;
    type IntoIter = std::slice::Iter<'a, Mapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn expect_shape(root: &dyn Node, path: &Path, expected: Shape) -> Result<(), FieldError> {
    let actual = root
        .shape(path.steps())
        .map_err(|e| FieldError::new("resolve", path.to_string(), e))?;
    if actual == expected {
        return Ok(());
    }
    let cause = match expected {
        Shape::Leaf => AccessError::NotALeaf,
        Shape::Sequence => AccessError::NotRepeated(0),
        Shape::Composite => AccessError::PastLeaf(path.to_string()),
    };
    Err(FieldError::new("resolve", path.to_string(), cause))
}

/// Builder for [`PathMap`]
///
/// Path text is parsed as entries are added; the first malformed path is
/// reported by [`build`](PathMapBuilder::build).
#[derive(Debug, Default)]
pub struct PathMapBuilder {
    entries: Vec<Mapping>,
    error: Option<FieldError>,
}

impl PathMapBuilder {
    /// Add a leaf mapping
    pub fn field(mut self, document: &str, model: &str) -> Self {
        if let Some((document, model)) = self.parse_pair(document, model) {
            self.entries.push(Mapping::Field { document, model });
        }
        self
    }

    /// Add a repeated mapping from a `"<document path> : <model field>"` key
    pub fn repeated(
        mut self,
        key: &str,
        elements: impl FnOnce(ElementsBuilder) -> ElementsBuilder,
    ) -> Self {
        let Some((document, model)) = split_repeated(key) else {
            self.fail(key, PathError::InvalidRepeatedKey(key.to_string()));
            return self;
        };
        let Some((document, model)) = self.parse_pair(document, model) else {
            return self;
        };
        let built = elements(ElementsBuilder::default());
        match built.error {
            Some(error) => self.error = self.error.take().or(Some(error)),
            None => self.entries.push(Mapping::Repeated {
                document,
                model,
                elements: built.elements,
            }),
        }
        self
    }

    /// Copy every entry of `base`, in order
    pub fn inherit(mut self, base: &PathMap) -> Self {
        self.entries.extend(base.entries.iter().cloned());
        self
    }

    /// Finish the table
    pub fn build(self) -> Result<PathMap, FieldError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(PathMap {
                entries: self.entries,
            }),
        }
    }

    fn parse_pair(&mut self, document: &str, model: &str) -> Option<(Path, Path)> {
        let document = self.parse(document)?;
        let model = self.parse(model)?;
        Some((document, model))
    }

    fn parse(&mut self, text: &str) -> Option<Path> {
        match Path::parse(text) {
            Ok(path) => Some(path),
            Err(e) => {
                self.fail(text, e);
                None
            }
        }
    }

    fn fail(&mut self, text: &str, error: PathError) {
        if self.error.is_none() {
            self.error = Some(FieldError::new("parse", text, error));
        }
    }
}

/// Builder for the element sub-map of a repeated entry
#[derive(Debug, Default)]
pub struct ElementsBuilder {
    elements: Vec<ElementMapping>,
    error: Option<FieldError>,
}

impl ElementsBuilder {
    /// Map a document path to a model path, both relative to one element
    pub fn field(mut self, document: &str, model: &str) -> Self {
        match (Path::parse(document), Path::parse(model)) {
            (Ok(document), Ok(model)) => self.elements.push(ElementMapping { document, model }),
            (Err(e), _) => self.fail(document, e),
            (_, Err(e)) => self.fail(model, e),
        }
        self
    }

    fn fail(&mut self, text: &str, error: PathError) {
        if self.error.is_none() {
            self.error = Some(FieldError::new("parse", text, error));
        }
    }
}
