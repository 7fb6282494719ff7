use std::fmt;

use crate::options::MiddlewareOptions;

/// A resolved middleware ready for the router.
///
/// The middleware string uses the router's `name:arg1,arg2` syntax, where a
/// single argument may hold alternatives joined by `|`. The options decide
/// which controller methods the middleware runs for.
///
/// # Examples
///
/// ```
/// use controller_middleware::{MiddlewareDescriptor, MiddlewareOptions};
///
/// let descriptor = MiddlewareDescriptor::new("role:admin|editor,strict", MiddlewareOptions::new());
///
/// assert_eq!(descriptor.name(), "role");
/// assert_eq!(descriptor.parameters(), vec!["admin|editor", "strict"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddlewareDescriptor {
    middleware: String,
    options: MiddlewareOptions,
}

impl MiddlewareDescriptor {
    /// Creates a descriptor from a middleware string and its filter.
    pub fn new(middleware: impl Into<String>, options: MiddlewareOptions) -> Self {
        Self {
            middleware: middleware.into(),
            options,
        }
    }

    /// Returns the full middleware string.
    pub fn middleware(&self) -> &str {
        &self.middleware
    }

    /// Returns the method filter.
    pub fn options(&self) -> &MiddlewareOptions {
        &self.options
    }

    /// Returns the middleware name, the part before the first `:`.
    pub fn name(&self) -> &str {
        self.middleware
            .split_once(':')
            .map_or(self.middleware.as_str(), |(name, _)| name)
    }

    /// Returns the comma-separated parameters after the first `:`.
    ///
    /// A middleware without parameters yields an empty list.
    pub fn parameters(&self) -> Vec<&str> {
        match self.middleware.split_once(':') {
            Some((_, params)) => params.split(',').collect(),
            None => Vec::new(),
        }
    }

    /// Splits the descriptor into its string and options.
    pub fn into_parts(self) -> (String, MiddlewareOptions) {
        (self.middleware, self.options)
    }
}

impl fmt::Display for MiddlewareDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.middleware)?;
        if let Some(only) = self.options.only_methods() {
            write!(f, " only [{}]", only.join(", "))?;
        }
        if let Some(except) = self.options.except_methods() {
            write!(f, " except [{}]", except.join(", "))?;
        }
        Ok(())
    }
}
