use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TemplateError;
use crate::path;

/// The `name[:pattern]` mini-grammar inside a brace segment. A chunk that
/// does not fit the grammar keeps its raw text as the parameter name and
/// degrades to the permissive fragment.
static VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w[-\w.]* *)(:(.+))?$").expect("variable grammar is valid"));

/// Fragment for an unconstrained named parameter: one-or-more non-slash
/// characters, non-greedy.
const PERMISSIVE_FRAGMENT: &str = "([^/]+?)";

/// The unnamed wildcard token, and its non-capturing fragment. Matches
/// across slash boundaries.
const WILDCARD: &str = "**";
const WILDCARD_FRAGMENT: &str = ".*?";

/// A path template compiled to an anchored regular expression plus the
/// ordered list of parameter names, one per capturing group.
///
/// Immutable once built; lives for the router's lifetime.
#[derive(Debug)]
pub(crate) struct CompiledTemplate {
    pattern: Regex,
    names: Vec<String>,
}

impl CompiledTemplate {
    /// Compiles a path template.
    ///
    /// The template is normalized (slash runs collapsed, trailing slash
    /// stripped), split into segments, and each segment is translated:
    /// `{name}` and `{name:pattern}` become capturing groups, `**` becomes a
    /// non-capturing multi-segment wildcard, and anything else is spliced in
    /// as an escaped literal. The joined pattern is anchored so matching is
    /// always full-string, never substring.
    pub(crate) fn compile(template: &str) -> Result<Self, TemplateError> {
        let normalized = path::normalize(template);

        let mut fragments = Vec::new();
        let mut names = Vec::new();

        for segment in normalized.split('/') {
            if let Some(chunk) = segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
            {
                let (name, constraint) = parse_variable(chunk);
                if name.is_empty() {
                    return Err(TemplateError::EmptyParam {
                        template: template.to_owned(),
                    });
                }
                names.push(name);
                match constraint {
                    Some(pattern) => fragments.push(format!("({pattern})")),
                    None => fragments.push(PERMISSIVE_FRAGMENT.to_owned()),
                }
            } else if segment == WILDCARD {
                fragments.push(WILDCARD_FRAGMENT.to_owned());
            } else if segment.contains('{') || segment.contains('}') {
                return Err(TemplateError::UnterminatedBrace {
                    template: template.to_owned(),
                });
            } else {
                fragments.push(regex::escape(segment));
            }
        }

        let anchored = format!("^{}$", fragments.join("/"));

        // Literals are escaped and the generated fragments are fixed, so a
        // compile failure can only come from a user-supplied constraint.
        let pattern = Regex::new(&anchored).map_err(|source| TemplateError::InvalidConstraint {
            template: template.to_owned(),
            source,
        })?;

        // One capturing group per recorded name (group 0 is the whole
        // match). A constraint with its own groups would shift every
        // capture index after it.
        if pattern.captures_len() != names.len() + 1 {
            return Err(TemplateError::NestedCapture {
                template: template.to_owned(),
            });
        }

        Ok(Self { pattern, names })
    }

    pub(crate) fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }
}

/// Splits the inside of a brace segment into a parameter name and an
/// optional constraint pattern.
fn parse_variable(chunk: &str) -> (String, Option<String>) {
    let chunk = chunk.trim();
    match VARIABLE.captures(chunk) {
        Some(caps) => {
            let name = caps[1].trim().to_owned();
            let constraint = caps.get(3).map(|m| m.as_str().trim().to_owned());
            (name, constraint)
        }
        None => {
            if !chunk.is_empty() {
                warn!("segment {{{chunk}}} does not fit the name[:pattern] grammar, matching it permissively");
            }
            (chunk.to_owned(), None)
        }
    }
}
