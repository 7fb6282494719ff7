//! Resolution of controller attributes into middleware descriptors.
//!
//! Resolution runs in three phases over a [`ControllerAttributes`] table:
//!
//! ```text
//! ClassMiddleware attributes (class)   → options from the attribute
//!   ↓
//! Middleware attributes (each method)  → options forced to only = [method]
//!   ↓
//! Middleware attributes (class)        → options from the attribute
//! ```
//!
//! Every attribute's arguments are formatted the same way: each top-level
//! argument becomes one comma-separated parameter, and a sequence argument
//! becomes alternatives joined by `|`. Values that are not non-empty strings
//! or backed enum cases are dropped without error.

use crate::{
    attribute::{AttributeKind, Middleware},
    controller::ControllerAttributes,
    descriptor::MiddlewareDescriptor,
    options::MiddlewareOptions,
};

/// Turns a controller's attribute table into ordered middleware descriptors.
///
/// The resolver holds no state; every call recomputes the descriptors.
///
/// # Examples
///
/// ```
/// use controller_middleware::{AttributeResolver, ControllerAttributes, Middleware};
///
/// let attrs = ControllerAttributes::builder("AdminController")
///     .class_middleware(Middleware::new("auth"))
///     .method("edit", [Middleware::new("can").arguments("edit")])
///     .middleware(Middleware::new("role").arguments([["admin", "owner"]]))
///     .build()
///     .unwrap();
///
/// let descriptors = AttributeResolver::new().resolve(&attrs);
/// let strings: Vec<&str> = descriptors.iter().map(|d| d.middleware()).collect();
///
/// assert_eq!(strings, vec!["auth", "can:edit", "role:admin|owner"]);
/// assert!(descriptors[1].options().applies_to("edit"));
/// assert!(descriptors[1].options().excludes("index"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeResolver;

impl AttributeResolver {
    /// Creates a resolver.
    pub fn new() -> Self {
        Self
    }

    /// Resolves every attribute in the table, in priority order.
    pub fn resolve(&self, attrs: &ControllerAttributes) -> Vec<MiddlewareDescriptor> {
        let mut descriptors = Vec::new();

        for attr in attrs.class_attributes(AttributeKind::ClassMiddleware) {
            descriptors.push(self.describe(attr, None));
        }

        for method in attrs.methods() {
            for attr in method.middleware() {
                descriptors.push(self.describe(attr, Some(method.name())));
            }
        }

        for attr in attrs.class_attributes(AttributeKind::Middleware) {
            descriptors.push(self.describe(attr, None));
        }

        tracing::debug!(
            controller = %attrs.controller(),
            count = descriptors.len(),
            "resolved attribute middleware"
        );

        descriptors
    }

    /// Formats an attribute as a middleware string.
    ///
    /// Returns the bare name when no argument survives filtering.
    ///
    /// # Examples
    ///
    /// ```
    /// use controller_middleware::{Argument, AttributeResolver, Middleware};
    ///
    /// let resolver = AttributeResolver::new();
    ///
    /// let attr = Middleware::new("m").arguments(vec![Argument::from(["a", "b"]), Argument::from("c")]);
    /// assert_eq!(resolver.format_middleware(&attr), "m:a|b,c");
    ///
    /// let attr = Middleware::new("m").arguments([""]);
    /// assert_eq!(resolver.format_middleware(&attr), "m");
    /// ```
    pub fn format_middleware(&self, attr: &Middleware) -> String {
        let arguments: Vec<String> = attr
            .declared_arguments()
            .as_list()
            .iter()
            .filter_map(|argument| argument.format_group())
            .collect();

        if arguments.is_empty() {
            attr.name().to_string()
        } else {
            format!("{}:{}", attr.name(), arguments.join(","))
        }
    }

    /// Builds the descriptor for one attribute.
    ///
    /// A method-level attribute is always limited to its own method.
    /// On a class-level attribute a non-empty `only` wins over `except`.
    fn describe(&self, attr: &Middleware, method: Option<&str>) -> MiddlewareDescriptor {
        let mut options = MiddlewareOptions::new();

        if let Some(method) = method {
            options.only([method]);
        } else if !attr.only_methods().is_empty() {
            options.only(attr.only_methods().iter().cloned());
        } else if !attr.except_methods().is_empty() {
            options.except(attr.except_methods().iter().cloned());
        }

        MiddlewareDescriptor::new(self.format_middleware(attr), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{Argument, BackedEnum, EnumValue};

    enum Guard {
        Web,
        Empty,
        Legacy,
    }

    impl BackedEnum for Guard {
        fn value(&self) -> EnumValue {
            match self {
                Guard::Web => EnumValue::Str("web".to_string()),
                Guard::Empty => EnumValue::Str(String::new()),
                Guard::Legacy => EnumValue::Int(1),
            }
        }
    }

    fn format(attr: Middleware) -> String {
        AttributeResolver::new().format_middleware(&attr)
    }

    #[test]
    fn no_attributes_resolves_to_nothing() {
        let attrs = ControllerAttributes::empty("Empty");
        assert!(AttributeResolver::new().resolve(&attrs).is_empty());
    }

    #[test]
    fn methods_without_attributes_contribute_nothing() {
        let attrs = ControllerAttributes::builder("C")
            .method("index", [])
            .method("show", [])
            .build()
            .unwrap();
        assert!(AttributeResolver::new().resolve(&attrs).is_empty());
    }

    #[test]
    fn single_scalar_argument() {
        assert_eq!(format(Middleware::new("auth").arguments("web")), "auth:web");
    }

    #[test]
    fn list_of_scalars_is_comma_separated() {
        assert_eq!(format(Middleware::new("throttle").arguments(["60", "1"])), "throttle:60,1");
    }

    #[test]
    fn group_and_scalar() {
        let attr = Middleware::new("name").arguments(vec![Argument::from(["a", "b"]), Argument::from("c")]);
        assert_eq!(format(attr), "name:a|b,c");
    }

    #[test]
    fn empty_strings_are_dropped() {
        assert_eq!(format(Middleware::new("name").arguments(["", "x"])), "name:x");
        assert_eq!(format(Middleware::new("name").arguments([""])), "name");
        assert_eq!(format(Middleware::new("name").arguments("")), "name");
    }

    #[test]
    fn numbers_are_dropped() {
        let attr = Middleware::new("throttle").argument(60).argument("requests");
        assert_eq!(format(attr), "throttle:requests");
    }

    #[test]
    fn enum_cases_format_by_value() {
        let attr = Middleware::new("auth")
            .argument(Argument::backed(&Guard::Web))
            .argument(Argument::backed(&Guard::Empty))
            .argument(Argument::backed(&Guard::Legacy));
        assert_eq!(format(attr), "auth:web,1");
    }

    #[test]
    fn enum_cases_inside_group() {
        let attr = Middleware::new("auth").argument(Argument::group([
            Argument::backed(&Guard::Web),
            Argument::backed(&Guard::Empty),
            Argument::from("api"),
        ]));
        assert_eq!(format(attr), "auth:web|api");
    }

    #[test]
    fn group_with_no_survivors_is_skipped() {
        let attr = Middleware::new("m")
            .argument(Argument::from(["", ""]))
            .argument("kept");
        assert_eq!(format(attr), "m:kept");
    }

    #[test]
    fn ordering_is_class_then_methods_then_ordinary() {
        let attrs = ControllerAttributes::builder("C")
            .middleware(Middleware::new("c"))
            .method("edit", [Middleware::new("b")])
            .class_middleware(Middleware::new("a"))
            .build()
            .unwrap();

        let names: Vec<String> = AttributeResolver::new()
            .resolve(&attrs)
            .into_iter()
            .map(|d| d.into_parts().0)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn method_attribute_is_limited_to_its_method() {
        let attrs = ControllerAttributes::builder("C")
            .method(
                "show",
                [Middleware::new("throttle").only(["index"]).except(["show"])],
            )
            .build()
            .unwrap();

        let descriptors = AttributeResolver::new().resolve(&attrs);
        let options = descriptors[0].options();
        assert_eq!(options.only_methods(), Some(&["show".to_string()][..]));
        assert_eq!(options.except_methods(), None);
    }

    #[test]
    fn class_only_wins_over_except() {
        let attrs = ControllerAttributes::builder("C")
            .middleware(Middleware::new("auth").only(["index"]).except(["index"]))
            .build()
            .unwrap();

        let descriptors = AttributeResolver::new().resolve(&attrs);
        let options = descriptors[0].options();
        assert_eq!(options.only_methods(), Some(&["index".to_string()][..]));
        assert_eq!(options.except_methods(), None);
        assert!(options.applies_to("index"));
    }

    #[test]
    fn class_except_is_applied() {
        let attrs = ControllerAttributes::builder("C")
            .class_middleware(Middleware::new("auth").except(["login"]))
            .build()
            .unwrap();

        let descriptors = AttributeResolver::new().resolve(&attrs);
        assert!(descriptors[0].options().excludes("login"));
        assert!(descriptors[0].options().applies_to("logout"));
    }

    #[test]
    fn class_without_filter_is_unfiltered() {
        let attrs = ControllerAttributes::builder("C")
            .middleware(Middleware::new("auth").arguments("web"))
            .build()
            .unwrap();

        let descriptors = AttributeResolver::new().resolve(&attrs);
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].middleware(), "auth:web");
        assert!(descriptors[0].options().is_unfiltered());
    }
}
