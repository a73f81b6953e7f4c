//! Route declaration and URL building errors.

use thiserror::Error;

/// Errors raised while declaring routes, building the registry or rendering URLs.
///
/// None of these are transient: every variant points at a defect in a route
/// declaration or in the code calling a builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The pattern has bad placeholder syntax, a repeated placeholder name,
    /// or does not agree with the parameters its builder declares.
    #[error("Malformed template `{pattern}`: {reason}")]
    MalformedTemplate { pattern: String, reason: String },

    /// Two descriptors were registered under the same name.
    #[error("Route name `{0}` is already registered")]
    DuplicateRouteName(String),

    /// A placeholder of the template has no bound value.
    #[error("Missing path parameter `{name}` for `{pattern}`")]
    MissingPathParameter { pattern: String, name: String },

    /// A bound value names a placeholder the template does not have.
    #[error("Unknown path parameter `{name}` for `{pattern}`")]
    UnknownPathParameter { pattern: String, name: String },

    /// A typed lookup found no route with that name and pattern.
    #[error("No route named `{0}` is registered")]
    UnknownRoute(String),
}

impl RouteError {
    pub(crate) fn malformed(pattern: &str, reason: impl Into<String>) -> Self {
        RouteError::MalformedTemplate {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for route operations.
pub type RouteResult<T> = Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouteError::DuplicateRouteName("User".into());
        assert_eq!(err.to_string(), "Route name `User` is already registered");

        let err = RouteError::MissingPathParameter {
            pattern: "/users/{id}".into(),
            name: "id".into(),
        };
        assert!(err.to_string().contains("`id`"));
        assert!(err.to_string().contains("/users/{id}"));
    }

    #[test]
    fn test_malformed_helper() {
        let err = RouteError::malformed("/x/{", "unclosed `{`");
        assert_eq!(
            err,
            RouteError::MalformedTemplate {
                pattern: "/x/{".into(),
                reason: "unclosed `{`".into(),
            }
        );
    }
}
