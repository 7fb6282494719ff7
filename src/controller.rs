use crate::{
    attribute::{AttributeKind, Middleware},
    descriptor::MiddlewareDescriptor,
    error::{DeclarationError, DeclarationErrorKind},
    resolver::AttributeResolver,
};

/// The middleware attributes declared on one controller method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodAttributes {
    name: String,
    middleware: Vec<Middleware>,
}

impl MethodAttributes {
    /// Returns the method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the method's middleware attributes in declaration order.
    pub fn middleware(&self) -> &[Middleware] {
        &self.middleware
    }
}

/// The attribute table of a controller type.
///
/// Lists the class-level attributes and every declared method with its
/// attributes, each in declaration order. [`AttributeResolver`] walks this
/// table to produce middleware descriptors.
///
/// Construct it with [`ControllerAttributes::builder`].
///
/// # Examples
///
/// ```
/// use controller_middleware::{ControllerAttributes, Middleware};
///
/// let attrs = ControllerAttributes::builder("PostController")
///     .middleware(Middleware::new("auth").arguments("web"))
///     .method("index", [])
///     .method("show", [Middleware::new("cache")])
///     .build()
///     .expect("valid declaration");
///
/// assert_eq!(attrs.controller(), "PostController");
/// assert_eq!(attrs.methods().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerAttributes {
    controller: String,
    class: Vec<(AttributeKind, Middleware)>,
    methods: Vec<MethodAttributes>,
}

impl ControllerAttributes {
    /// Starts declaring the attributes of the named controller.
    pub fn builder(controller: impl Into<String>) -> ControllerAttributesBuilder {
        ControllerAttributesBuilder {
            controller: controller.into(),
            class: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// A controller with no attributes at all.
    pub fn empty(controller: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            class: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Returns the controller name.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// Returns the class-level attributes of the given kind, in declaration order.
    pub fn class_attributes(&self, kind: AttributeKind) -> impl Iterator<Item = &Middleware> + '_ {
        self.class
            .iter()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, attr)| attr)
    }

    /// Returns the declared methods in declaration order.
    pub fn methods(&self) -> &[MethodAttributes] {
        &self.methods
    }
}

/// Builder for [`ControllerAttributes`].
#[derive(Debug)]
pub struct ControllerAttributesBuilder {
    controller: String,
    class: Vec<(AttributeKind, Middleware)>,
    methods: Vec<MethodAttributes>,
}

impl ControllerAttributesBuilder {
    /// Adds a higher-priority `ClassMiddleware` attribute to the class.
    pub fn class_middleware(mut self, attr: Middleware) -> Self {
        self.class.push((AttributeKind::ClassMiddleware, attr));
        self
    }

    /// Adds an ordinary `Middleware` attribute to the class.
    pub fn middleware(mut self, attr: Middleware) -> Self {
        self.class.push((AttributeKind::Middleware, attr));
        self
    }

    /// Declares a method and its middleware attributes.
    ///
    /// Methods resolve in the order they are declared here.
    pub fn method(
        mut self,
        name: impl Into<String>,
        middleware: impl IntoIterator<Item = Middleware>,
    ) -> Self {
        self.methods.push(MethodAttributes {
            name: name.into(),
            middleware: middleware.into_iter().collect(),
        });
        self
    }

    /// Validates the declaration and builds the table.
    ///
    /// # Errors
    ///
    /// Returns a `DeclarationError` when an attribute has an empty name or a
    /// method is declared twice.
    pub fn build(self) -> Result<ControllerAttributes, DeclarationError> {
        for (kind, attr) in &self.class {
            if attr.name().is_empty() {
                return Err(DeclarationError::new(
                    DeclarationErrorKind::EmptyName,
                    format!("{} attribute on {} has no name", kind, self.controller),
                ));
            }
        }

        for (i, method) in self.methods.iter().enumerate() {
            if self.methods[..i].iter().any(|m| m.name == method.name) {
                return Err(DeclarationError::new(
                    DeclarationErrorKind::DuplicateMethod {
                        method: method.name.clone(),
                    },
                    format!("{}::{} is declared more than once", self.controller, method.name),
                ));
            }

            for attr in &method.middleware {
                if attr.name().is_empty() {
                    return Err(DeclarationError::new(
                        DeclarationErrorKind::EmptyName,
                        format!(
                            "Middleware attribute on {}::{} has no name",
                            self.controller, method.name
                        ),
                    ));
                }

                if !attr.only_methods().is_empty() || !attr.except_methods().is_empty() {
                    tracing::warn!(
                        controller = %self.controller,
                        method = %method.name,
                        middleware = %attr.name(),
                        "only/except on a method attribute is ignored"
                    );
                }
            }
        }

        Ok(ControllerAttributes {
            controller: self.controller,
            class: self.class,
            methods: self.methods,
        })
    }
}

/// Middleware declared through attributes.
///
/// Controllers implement [`attributes`](Self::attributes) to describe their
/// attribute table; the provided methods resolve it on every call.
///
/// # Examples
///
/// ```
/// use controller_middleware::{AttributeMiddleware, ControllerAttributes, Middleware};
///
/// struct UserController;
///
/// impl AttributeMiddleware for UserController {
///     fn attributes(&self) -> ControllerAttributes {
///         ControllerAttributes::builder("UserController")
///             .middleware(Middleware::new("auth").arguments("web"))
///             .method("show", [Middleware::new("throttle").argument(60).argument("requests")])
///             .build()
///             .expect("valid declaration")
///     }
/// }
///
/// let resolved: Vec<String> = UserController
///     .middleware()
///     .iter()
///     .map(|d| d.middleware().to_string())
///     .collect();
///
/// assert_eq!(resolved, vec!["throttle:requests", "auth:web"]);
/// ```
pub trait AttributeMiddleware {
    /// Returns this controller's attribute table.
    fn attributes(&self) -> ControllerAttributes;

    /// Middleware the controller registered without attributes.
    fn registered_middleware(&self) -> Vec<MiddlewareDescriptor> {
        Vec::new()
    }

    /// Resolves the attribute table into descriptors.
    fn middleware_by_attributes(&self) -> Vec<MiddlewareDescriptor> {
        AttributeResolver::new().resolve(&self.attributes())
    }

    /// All middleware of the controller: registered first, then attributes.
    fn middleware(&self) -> Vec<MiddlewareDescriptor> {
        let mut all = self.registered_middleware();
        all.extend(self.middleware_by_attributes());
        all
    }

    /// The middleware strings that run for `method`, in order.
    fn middleware_for(&self, method: &str) -> Vec<String> {
        self.middleware()
            .into_iter()
            .filter(|d| d.options().applies_to(method))
            .map(|d| d.into_parts().0)
            .collect()
    }
}
