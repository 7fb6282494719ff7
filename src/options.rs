/// Per-method filter attached to a resolved middleware.
///
/// `MiddlewareOptions` restricts which controller methods a middleware runs
/// for. An `only` list admits just the named methods; an `except` list
/// admits everything but the named methods. A value with neither applies to
/// every method.
///
/// # Examples
///
/// ```
/// use controller_middleware::MiddlewareOptions;
///
/// let mut options = MiddlewareOptions::new();
/// options.only(["index", "show"]);
///
/// assert!(options.applies_to("show"));
/// assert!(options.excludes("destroy"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiddlewareOptions {
    only: Option<Vec<String>>,
    except: Option<Vec<String>>,
}

impl MiddlewareOptions {
    /// Creates options that apply to every method.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the middleware to the given methods.
    ///
    /// Replaces any previous `only` list.
    pub fn only<I, S>(&mut self, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    /// Excludes the given methods from the middleware.
    ///
    /// Replaces any previous `except` list.
    pub fn except<I, S>(&mut self, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the `only` list, if one was set.
    pub fn only_methods(&self) -> Option<&[String]> {
        self.only.as_deref()
    }

    /// Returns the `except` list, if one was set.
    pub fn except_methods(&self) -> Option<&[String]> {
        self.except.as_deref()
    }

    /// Returns true when neither `only` nor `except` was set.
    pub fn is_unfiltered(&self) -> bool {
        self.only.is_none() && self.except.is_none()
    }

    /// Returns true when the middleware must be skipped for `method`.
    ///
    /// A set `only` list that lacks the method excludes it, even when the
    /// list is empty. A non-empty `except` list that names the method
    /// excludes it too.
    pub fn excludes(&self, method: &str) -> bool {
        let outside_only = self
            .only
            .as_ref()
            .is_some_and(|only| !only.iter().any(|m| m == method));
        let in_except = self
            .except
            .as_ref()
            .is_some_and(|except| except.iter().any(|m| m == method));

        outside_only || in_except
    }

    /// Returns true when the middleware runs for `method`.
    pub fn applies_to(&self, method: &str) -> bool {
        !self.excludes(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_applies_everywhere() {
        let options = MiddlewareOptions::new();
        assert!(options.is_unfiltered());
        assert!(options.applies_to("index"));
        assert!(options.applies_to("anything"));
    }

    #[test]
    fn only_admits_listed_methods() {
        let mut options = MiddlewareOptions::new();
        options.only(["index"]);

        assert!(!options.is_unfiltered());
        assert!(options.applies_to("index"));
        assert!(options.excludes("store"));
        assert_eq!(options.only_methods(), Some(&["index".to_string()][..]));
    }

    #[test]
    fn empty_only_excludes_everything() {
        let mut options = MiddlewareOptions::new();
        options.only(Vec::<String>::new());

        assert!(options.excludes("index"));
    }

    #[test]
    fn except_rejects_listed_methods() {
        let mut options = MiddlewareOptions::new();
        options.except(["destroy", "update"]);

        assert!(options.excludes("destroy"));
        assert!(options.applies_to("index"));
        assert_eq!(options.except_methods().map(<[String]>::len), Some(2));
    }

    #[test]
    fn only_mutator_replaces_previous_list() {
        let mut options = MiddlewareOptions::new();
        options.only(["a"]).only(["b"]);

        assert_eq!(options.only_methods(), Some(&["b".to_string()][..]));
    }
}
