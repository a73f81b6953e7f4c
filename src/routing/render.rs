//! URL rendering.
//!
//! # Responsibilities
//! - Substitute placeholder values into a parsed template
//! - Append query parameters in declared order, dropping empty ones
//!
//! # Design Decisions
//! - Pure functions: no shared state, safe to call from any thread
//! - Values are copied verbatim, never URL-escaped; callers pre-encode
//! - An empty query never leaves a bare `?` behind

use crate::routing::error::{RouteError, RouteResult};
use crate::routing::template::{PathTemplate, Segment};

/// Named path parameter values.
///
/// Setting the same name twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    entries: Vec<(String, String)>,
}

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Ordered query parameters. Entries without a value, or with an empty one,
/// are left out of the rendered URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Option<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, Some(value.into()));
        self
    }

    pub fn with_optional<V: Into<String>>(
        mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        self.push(key, value.map(Into::into));
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: Option<String>) {
        self.entries.push((key.into(), value));
    }

    /// Entries that will appear in a rendered URL, in declared order.
    pub fn retained(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(key, value)| match value.as_deref() {
            Some(value) if !value.is_empty() => Some((key.as_str(), value)),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.push(key, Some(value.into()));
        }
        params
    }
}

/// Render `template` with named path values and a query.
///
/// Fails with [`RouteError::UnknownPathParameter`] when `path` names a placeholder
/// the template lacks, and with [`RouteError::MissingPathParameter`] when a
/// placeholder has no value.
pub fn render(
    template: &PathTemplate,
    path: &PathParams,
    query: &QueryParams,
) -> RouteResult<String> {
    let names = template.parameter_names();
    if let Some((unknown, _)) = path.iter().find(|(name, _)| !names.iter().any(|p| p == name)) {
        return Err(RouteError::UnknownPathParameter {
            pattern: template.pattern().to_string(),
            name: unknown.to_string(),
        });
    }

    let mut url = String::with_capacity(template.pattern().len());
    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => url.push_str(text),
            Segment::Placeholder(name) => {
                let value = path.get(name).ok_or_else(|| RouteError::MissingPathParameter {
                    pattern: template.pattern().to_string(),
                    name: name.clone(),
                })?;
                url.push_str(value);
            }
        }
    }

    append_query(&mut url, query);
    Ok(url)
}

/// Render with one value per placeholder, in placeholder order.
///
/// # Panics
///
/// When `values` does not hold exactly one value per placeholder. Typed
/// routes check their arity when declared, so this only fires for a route
/// built around an unchecked template.
pub(crate) fn render_positional(
    template: &PathTemplate,
    values: &[&str],
    query: &QueryParams,
) -> String {
    assert_eq!(
        values.len(),
        template.parameter_names().len(),
        "expected one value per placeholder of `{}`",
        template.pattern()
    );

    let mut values = values.iter();
    let mut url = String::with_capacity(template.pattern().len());
    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => url.push_str(text),
            Segment::Placeholder(_) => url.extend(values.next().copied()),
        }
    }

    append_query(&mut url, query);
    url
}

fn append_query(url: &mut String, query: &QueryParams) {
    let mut separator = '?';
    for (key, value) in query.retained() {
        url.push(separator);
        url.push_str(key);
        url.push('=');
        url.push_str(value);
        separator = '&';
    }
}
