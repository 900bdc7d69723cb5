//! Expansion of repeated entries against live data

use crate::access::{element_count, Node};
use crate::error::FieldError;
use crate::path::Path;
use crate::table::{Mapping, PathMap};

/// Which side of the table is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Read the document, write the model
    DocumentToModel,
    /// Read the model, write the document
    ModelToDocument,
}

/// One concrete document path / model path pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMapping {
    /// Concrete document path
    pub document: Path,
    /// Concrete model path
    pub model: Path,
}

/// Expand `map` into concrete pairs
///
/// `source` is the side being read. A repeated entry whose source sequence holds
/// `n` elements yields `n` copies of its sub-map, each with `[i]` substituted
/// into both base paths. Output order is table order, then element index.
pub fn remake_mapping(
    map: &PathMap,
    source: &dyn Node,
    direction: Direction,
) -> Result<Vec<ResolvedMapping>, FieldError> {
    let mut resolved = Vec::with_capacity(map.len());

    for mapping in map {
        match mapping {
            Mapping::Field { document, model } => resolved.push(ResolvedMapping {
                document: document.clone(),
                model: model.clone(),
            }),
            Mapping::Repeated {
                document,
                model,
                elements,
            } => {
                let base = match direction {
                    Direction::DocumentToModel => document,
                    Direction::ModelToDocument => model,
                };
                let count = element_count(source, base)
                    .map_err(|e| FieldError::new("remap", base.to_string(), e))?;

                tracing::debug!(path = %base, count, "expanding repeated mapping");

                for i in 0..count {
                    let document = document.with_index(i);
                    let model = model.with_index(i);
                    resolved.extend(elements.iter().map(|element| ResolvedMapping {
                        document: document.join(&element.document),
                        model: model.join(&element.model),
                    }));
                }
            }
        }
    }

    Ok(resolved)
}
