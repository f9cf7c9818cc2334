use std::error::Error;
use std::fmt;

/// Represents errors that can occur when registering a route template.
///
/// Registration fails fast: a template that is rejected here would
/// otherwise degrade into a silent catch-all or misaligned captures at
/// request time. Every variant names the offending template, and a failed
/// registration never leaves a partial entry in the route table.
#[non_exhaustive]
#[derive(Debug)]
pub enum TemplateError {
    /// A `{...}` segment has an empty parameter name after trimming.
    EmptyParam {
        /// The rejected template.
        template: String,
    },
    /// A segment contains a brace but is not a complete `{...}` group.
    UnterminatedBrace {
        /// The rejected template.
        template: String,
    },
    /// A `{name:pattern}` constraint is not a valid regular expression.
    InvalidConstraint {
        /// The rejected template.
        template: String,
        /// The underlying regex compilation error.
        source: regex::Error,
    },
    /// A `{name:pattern}` constraint contains capturing groups of its own,
    /// which would desynchronize parameter names from capture indices.
    NestedCapture {
        /// The rejected template.
        template: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyParam { template } => {
                write!(f, "template '{template}' has a parameter with an empty name")
            }
            Self::UnterminatedBrace { template } => {
                write!(f, "template '{template}' has an unterminated brace segment")
            }
            Self::InvalidConstraint { template, source } => {
                write!(f, "template '{template}' has an invalid constraint: {source}")
            }
            Self::NestedCapture { template } => {
                write!(
                    f,
                    "template '{template}' has a constraint containing capturing groups"
                )
            }
        }
    }
}

impl Error for TemplateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConstraint { source, .. } => Some(source),
            _ => None,
        }
    }
}

// `regex::Error` does not implement `PartialEq`, so constraint errors
// compare by template alone.
impl PartialEq for TemplateError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmptyParam { template: a }, Self::EmptyParam { template: b }) => a == b,
            (Self::UnterminatedBrace { template: a }, Self::UnterminatedBrace { template: b }) => {
                a == b
            }
            (
                Self::InvalidConstraint { template: a, .. },
                Self::InvalidConstraint { template: b, .. },
            ) => a == b,
            (Self::NestedCapture { template: a }, Self::NestedCapture { template: b }) => a == b,
            _ => false,
        }
    }
}

impl Eq for TemplateError {}
