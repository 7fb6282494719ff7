use std::fmt;

use crate::argument::Argument;

/// Which attribute a class-level middleware was declared with.
///
/// `ClassMiddleware` attributes resolve before any method-level middleware;
/// ordinary `Middleware` attributes on the class resolve after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Higher-priority class attribute.
    ClassMiddleware,
    /// Ordinary middleware attribute.
    Middleware,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::ClassMiddleware => write!(f, "ClassMiddleware"),
            AttributeKind::Middleware => write!(f, "Middleware"),
        }
    }
}

/// A middleware attribute as declared on a controller or one of its methods.
///
/// # Examples
///
/// ```
/// use controller_middleware::Middleware;
///
/// let attr = Middleware::new("throttle")
///     .arguments(["60", "1"])
///     .except(["index"]);
///
/// assert_eq!(attr.name(), "throttle");
/// assert_eq!(attr.except_methods(), ["index"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Middleware {
    name: String,
    arguments: Argument,
    only: Vec<String>,
    except: Vec<String>,
}

impl Middleware {
    /// Creates an attribute for the named middleware with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Argument::default(),
            only: Vec::new(),
            except: Vec::new(),
        }
    }

    /// Sets the arguments, replacing any previous ones.
    ///
    /// A sequence is the argument list; any other value is one argument.
    pub fn arguments(mut self, arguments: impl Into<Argument>) -> Self {
        self.arguments = arguments.into();
        self
    }

    /// Appends one argument to the list.
    pub fn argument(mut self, argument: impl Into<Argument>) -> Self {
        let argument = argument.into();
        self.arguments = match self.arguments {
            Argument::Group(mut items) => {
                items.push(argument);
                Argument::Group(items)
            }
            single => Argument::Group(vec![single, argument]),
        };
        self
    }

    /// Limits a class-level attribute to the given methods.
    pub fn only<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Keeps a class-level attribute off the given methods.
    pub fn except<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the middleware name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared arguments.
    pub fn declared_arguments(&self) -> &Argument {
        &self.arguments
    }

    /// Returns the declared `only` methods.
    pub fn only_methods(&self) -> &[String] {
        &self.only
    }

    /// Returns the declared `except` methods.
    pub fn except_methods(&self) -> &[String] {
        &self.except
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_arguments() {
        let attr = Middleware::new("auth");
        assert_eq!(attr.declared_arguments(), &Argument::Group(vec![]));
        assert!(attr.only_methods().is_empty());
        assert!(attr.except_methods().is_empty());
    }

    #[test]
    fn single_argument_is_kept_as_scalar() {
        let attr = Middleware::new("auth").arguments("web");
        assert_eq!(attr.declared_arguments(), &Argument::from("web"));
    }

    #[test]
    fn argument_appends_to_list() {
        let attr = Middleware::new("can").argument("edit").argument(["post", "comment"]);
        assert_eq!(
            attr.declared_arguments(),
            &Argument::Group(vec![Argument::from("edit"), Argument::from(["post", "comment"])])
        );
    }

    #[test]
    fn argument_after_scalar_builds_a_list() {
        let attr = Middleware::new("can").arguments("edit").argument("post");
        assert_eq!(
            attr.declared_arguments(),
            &Argument::Group(vec![Argument::from("edit"), Argument::from("post")])
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(AttributeKind::ClassMiddleware.to_string(), "ClassMiddleware");
        assert_eq!(AttributeKind::Middleware.to_string(), "Middleware");
    }
}
