//! Resource controller demonstration.
//!
//! This demo shows how a controller declares middleware as attributes:
//! 1. A higher-priority `ClassMiddleware` for authentication
//! 2. Method attributes scoped to a single action
//! 3. Ordinary class attributes with `only`/`except` filters
//! 4. What the router sees for each action
//!
//! Run with: `RUST_LOG=trace cargo run --example resource_controller`

use controller_middleware::{
    Argument, AttributeMiddleware, BackedEnum, ControllerAttributes, EnumValue, Middleware,
};

enum Role {
    Admin,
    Editor,
}

impl BackedEnum for Role {
    fn value(&self) -> EnumValue {
        match self {
            Role::Admin => "admin".into(),
            Role::Editor => "editor".into(),
        }
    }
}

struct ArticleController;

impl AttributeMiddleware for ArticleController {
    fn attributes(&self) -> ControllerAttributes {
        ControllerAttributes::builder("ArticleController")
            .class_middleware(Middleware::new("auth").arguments("web").except(["index", "show"]))
            .method("index", [Middleware::new("cache.headers").arguments("public")])
            .method("show", [])
            .method(
                "store",
                [Middleware::new("throttle").argument(10).argument("uploads")],
            )
            .method(
                "destroy",
                [Middleware::new("role").arguments(vec![Argument::group([
                    Argument::backed(&Role::Admin),
                    Argument::backed(&Role::Editor),
                ])])],
            )
            .middleware(Middleware::new("verified").only(["store", "destroy"]))
            .build()
            .expect("article controller declaration is valid")
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Resource Controller Example ===\n");

    println!("--- Resolved descriptors ---");
    for descriptor in ArticleController.middleware() {
        println!("{}", descriptor);
    }

    println!("\n--- Middleware per action ---");
    for action in ["index", "show", "store", "destroy"] {
        println!("{:>8}: {:?}", action, ArticleController.middleware_for(action));
    }
}
