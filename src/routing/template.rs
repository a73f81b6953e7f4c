//! Path template parsing.
//!
//! # Responsibilities
//! - Split a pattern such as `/users/{id}/posts/{post_id}` into literal text
//!   and named placeholders
//! - Record placeholder names in order of appearance
//! - Reject patterns that cannot be substituted unambiguously
//!
//! # Design Decisions
//! - Parsed once at declaration time, never re-derived afterwards
//! - The raw pattern is kept verbatim for routers that match on it
//! - No regex, wildcards or nested braces

use std::fmt;
use std::str::FromStr;

use crate::routing::error::{RouteError, RouteResult};
use crate::routing::render::{self, PathParams, QueryParams};

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim into every rendered URL.
    Literal(String),
    /// A `{name}` substitution point.
    Placeholder(String),
}

/// An immutable path pattern with named placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    pattern: String,
    segments: Vec<Segment>,
    parameter_names: Vec<String>,
}

impl PathTemplate {
    /// Parse a pattern.
    ///
    /// Fails with [`RouteError::MalformedTemplate`] on an unclosed `{`, a stray `}`,
    /// nested braces, an empty placeholder name or a repeated placeholder name.
    pub fn parse(pattern: impl Into<String>) -> RouteResult<Self> {
        let pattern = pattern.into();
        let mut segments = Vec::new();
        let mut parameter_names: Vec<String> = Vec::new();
        let mut rest = pattern.as_str();

        while !rest.is_empty() {
            let Some(open) = rest.find(is_brace) else {
                segments.push(Segment::Literal(rest.to_string()));
                break;
            };
            if rest.as_bytes()[open] == b'}' {
                return Err(RouteError::malformed(&pattern, "unmatched `}`"));
            }
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }

            let after = &rest[open + 1..];
            let close = match after.find(is_brace) {
                Some(i) if after.as_bytes()[i] == b'}' => i,
                Some(_) => {
                    return Err(RouteError::malformed(&pattern, "nested `{` inside a placeholder"))
                }
                None => return Err(RouteError::malformed(&pattern, "unclosed `{`")),
            };

            let name = &after[..close];
            if name.is_empty() {
                return Err(RouteError::malformed(&pattern, "empty placeholder name"));
            }
            if parameter_names.iter().any(|existing| existing == name) {
                return Err(RouteError::malformed(
                    &pattern,
                    format!("placeholder `{name}` appears more than once"),
                ));
            }

            parameter_names.push(name.to_string());
            segments.push(Segment::Placeholder(name.to_string()));
            rest = &after[close + 1..];
        }

        Ok(Self {
            pattern,
            segments,
            parameter_names,
        })
    }

    /// The pattern exactly as declared, placeholders included.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Placeholder names in order of appearance.
    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Check that a builder's declared arguments match the placeholders,
    /// same names in the same order. A raw identifier such as `r#type`
    /// matches the placeholder `{type}`.
    pub fn expect_parameters(&self, declared: &[&str]) -> RouteResult<()> {
        let matches = declared.len() == self.parameter_names.len()
            && declared
                .iter()
                .zip(&self.parameter_names)
                .all(|(&declared, actual)| {
                    declared.strip_prefix("r#").unwrap_or(declared) == actual
                });

        if matches {
            Ok(())
        } else {
            Err(RouteError::malformed(
                &self.pattern,
                format!(
                    "builder declares parameters {:?} but the pattern has {:?}",
                    declared, self.parameter_names
                ),
            ))
        }
    }

    /// Render with named bindings. See [`render::render`].
    pub fn render(&self, path: &PathParams, query: &QueryParams) -> RouteResult<String> {
        render::render(self, path, query)
    }

    /// Render with values given positionally, in placeholder order.
    ///
    /// Used by builders generated with [`route!`](crate::route), whose arity is
    /// checked against the template when the route is declared.
    #[doc(hidden)]
    pub fn fill(&self, values: &[&str], query: &QueryParams) -> String {
        render::render_positional(self, values, query)
    }
}

fn is_brace(c: char) -> bool {
    c == '{' || c == '}'
}

impl FromStr for PathTemplate {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
