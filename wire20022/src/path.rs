//! Path expressions
//!
//! A path addresses one location in a document or model tree:
//!
//! ```text
//! path    = segment ("." segment)*
//! segment = name ("[" index "]")?
//! ```
//!
//! `BkToCstmrAcctRpt.Rpt[0].Ntry` parses to the steps
//! `Field("BkToCstmrAcctRpt")`, `Field("Rpt")`, `Index(0)`, `Field("Ntry")`.
//! Path map tables mark repeated elements with a `"<path> : <Target>"` key,
//! split by [`split_repeated`]. There is no escaping.

use crate::error::PathError;
use std::fmt;
use std::str::FromStr;

/// One step of a parsed path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Named child element or field
    Field(String),
    /// Zero-based position inside a repeated element
    Index(usize),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Field(name) => f.write_str(name),
            Step::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Parsed path expression
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// Parse path text
    pub fn parse(text: &str) -> Result<Self, PathError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PathError::Empty);
        }

        let mut steps = Vec::new();
        for segment in text.split('.') {
            if segment.is_empty() {
                return Err(PathError::EmptySegment(text.to_string()));
            }
            let (name, index) = parse_segment(segment)?;
            steps.push(Step::Field(name.to_string()));
            if let Some(index) = index {
                steps.push(Step::Index(index));
            }
        }

        Ok(Self { steps })
    }

    /// Parsed steps
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// True for the empty (root) path
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// This path followed by `[index]`
    pub fn with_index(&self, index: usize) -> Self {
        let mut steps = self.steps.clone();
        steps.push(Step::Index(index));
        Self { steps }
    }

    /// This path followed by `other`
    pub fn join(&self, other: &Path) -> Self {
        let mut steps = self.steps.clone();
        steps.extend(other.steps.iter().cloned());
        Self { steps }
    }
}

fn parse_segment(segment: &str) -> Result<(&str, Option<usize>), PathError> {
    let (name, index) = match segment.find('[') {
        None => (segment, None),
        Some(open) => {
            let digits = segment[open + 1..]
                .strip_suffix(']')
                .ok_or_else(|| PathError::InvalidIndex(segment.to_string()))?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PathError::InvalidIndex(segment.to_string()));
            }
            let index = digits
                .parse::<usize>()
                .map_err(|_| PathError::InvalidIndex(segment.to_string()))?;
            (&segment[..open], Some(index))
        }
    };

    if name.is_empty() {
        return Err(PathError::EmptySegment(segment.to_string()));
    }
    if name
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '[' | ']' | ':'))
    {
        return Err(PathError::InvalidName(name.to_string()));
    }

    Ok((name, index))
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 && matches!(step, Step::Field(_)) {
                f.write_str(".")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

/// Split a repeated-element key `"<path> : <Target>"` into its two halves
///
/// Returns `None` for plain keys.
pub fn split_repeated(key: &str) -> Option<(&str, &str)> {
    let (path, target) = key.split_once(" : ")?;
    Some((path.trim(), target.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_and_indexed() {
        let path = Path::parse("BkToCstmrAcctRpt.Rpt[0].Ntry").unwrap();
        assert_eq!(
            path.steps(),
            &[
                Step::Field("BkToCstmrAcctRpt".to_string()),
                Step::Field("Rpt".to_string()),
                Step::Index(0),
                Step::Field("Ntry".to_string()),
            ]
        );
        assert_eq!(path.to_string(), "BkToCstmrAcctRpt.Rpt[0].Ntry");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Path::parse(""), Err(PathError::Empty));
        assert!(matches!(Path::parse("A..B"), Err(PathError::EmptySegment(_))));
        assert!(matches!(Path::parse("A[-1]"), Err(PathError::InvalidIndex(_))));
        assert!(matches!(Path::parse("A[x].B"), Err(PathError::InvalidIndex(_))));
        assert!(matches!(Path::parse("A[0"), Err(PathError::InvalidIndex(_))));
        assert!(matches!(Path::parse("A[0]B"), Err(PathError::InvalidIndex(_))));
        assert!(matches!(Path::parse("[0].B"), Err(PathError::EmptySegment(_))));
        assert!(matches!(Path::parse("A B.C"), Err(PathError::InvalidName(_))));
    }

    #[test]
    fn test_with_index_and_join() {
        let base = Path::parse("BkToCstmrAcctRpt.Rpt[0].Ntry").unwrap();
        let element = Path::parse("Amt.Value").unwrap();
        let concrete = base.with_index(3).join(&element);
        assert_eq!(concrete.to_string(), "BkToCstmrAcctRpt.Rpt[0].Ntry[3].Amt.Value");
        assert_eq!(concrete, "BkToCstmrAcctRpt.Rpt[0].Ntry[3].Amt.Value".parse().unwrap());
    }

    #[test]
    fn test_split_repeated() {
        assert_eq!(
            split_repeated("BkToCstmrAcctRpt.Rpt[0].Ntry : EntryDetails"),
            Some(("BkToCstmrAcctRpt.Rpt[0].Ntry", "EntryDetails"))
        );
        assert_eq!(split_repeated("AcctRptgReq.GrpHdr.MsgId"), None);
    }
}
