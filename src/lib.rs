//! Attribute-declared middleware for web controllers.
//!
//! Controllers describe their middleware as attributes on the controller
//! type and on its action methods. This crate resolves those attributes into
//! the router's registration contract:
//! - **Descriptors**: a middleware string in `name:arg1|alt,arg2` syntax
//! - **Options**: an `only`/`except` filter deciding which methods it runs for
//! - **Priority**: `ClassMiddleware` first, then method attributes, then
//!   class `Middleware` attributes
//!
//! # Core Types
//!
//! - [`Middleware`]: A declared middleware attribute
//! - [`Argument`]: An attribute argument (string, backed enum case, or sequence)
//! - [`ControllerAttributes`]: The attribute table of a controller type
//! - [`AttributeMiddleware`]: Trait controllers implement to expose their table
//! - [`AttributeResolver`]: Turns a table into [`MiddlewareDescriptor`]s
//! - [`MiddlewareOptions`]: The per-method filter attached to a descriptor
//!
//! # Examples
//!
//! ```
//! use controller_middleware::{AttributeMiddleware, ControllerAttributes, Middleware};
//!
//! struct PostController;
//!
//! impl AttributeMiddleware for PostController {
//!     fn attributes(&self) -> ControllerAttributes {
//!         ControllerAttributes::builder("PostController")
//!             .class_middleware(Middleware::new("auth").except(["index", "show"]))
//!             .method("index", [])
//!             .method("show", [Middleware::new("cache").arguments("public")])
//!             .method("store", [Middleware::new("throttle").arguments(["10", "1"])])
//!             .build()
//!             .expect("valid declaration")
//!     }
//! }
//!
//! assert_eq!(PostController.middleware_for("index"), Vec::<String>::new());
//! assert_eq!(PostController.middleware_for("show"), vec!["cache:public"]);
//! assert_eq!(PostController.middleware_for("store"), vec!["auth", "throttle:10,1"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod argument;
mod attribute;
mod controller;
mod descriptor;
mod error;
mod options;
mod resolver;

pub use argument::{Argument, BackedEnum, EnumValue};
pub use attribute::{AttributeKind, Middleware};
pub use controller::{
    AttributeMiddleware, ControllerAttributes, ControllerAttributesBuilder, MethodAttributes,
};
pub use descriptor::MiddlewareDescriptor;
pub use error::{DeclarationError, DeclarationErrorKind, Error};
pub use options::MiddlewareOptions;
pub use resolver::AttributeResolver;
