//! Parsed path expressions

use std::fmt;

/// One navigation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Field or mapping key (`.name`)
    Field(String),
    /// Sequence element (`[N]`)
    Index(i64),
    /// Inclusive sequence range (`[N:M]`)
    Range { from: i64, to: i64 },
}

/// Trailing assignment operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `=`
    Set,
    /// `+=`
    Merge,
}

/// Parsed path: segments plus an optional trailing assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpression {
    pub(crate) segments: Vec<PathSegment>,
    pub(crate) assignment: Option<AssignOp>,
    pub(crate) source: String,
}

impl PathExpression {
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    #[must_use]
    pub fn assignment(&self) -> Option<AssignOp> {
        self.assignment
    }

    /// The expression as written
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{name}"),
            PathSegment::Index(index) => write!(f, ".[{index}]"),
            PathSegment::Range { from, to } => write!(f, ".[{from}:{to}]"),
        }
    }
}

/// Canonical form, e.g. `.Def.[1:2]` or `. += %v`
impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            f.write_str(".")?;
        }
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        match self.assignment {
            Some(AssignOp::Set) => f.write_str(" = %v"),
            Some(AssignOp::Merge) => f.write_str(" += %v"),
            None => Ok(()),
        }
    }
}
