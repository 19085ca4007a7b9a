//! Shape factory example for tag-factory.
//!
//! Demonstrates:
//! - Declaring a factory with `define_factory!`
//! - Registering by type name, by custom tag, and by closure
//! - Definition-time registration with `auto_register!`
//! - Handling unregistered tags and duplicate registrations
//!
//! Run with: `cargo run --example shapes`

use tag_factory::{
    auto_register, define_factory, install_pending, Construct, FactoryApi, FactoryError,
};

trait Shape {
    fn describe(&self) -> String;
}

struct Circle {
    radius: f64,
}

impl Shape for Circle {
    fn describe(&self) -> String {
        format!("circle r={}", self.radius)
    }
}

struct Square {
    side: f64,
}

impl Shape for Square {
    fn describe(&self) -> String {
        format!("square side={}", self.side)
    }
}

define_factory!(ShapeFactory: f64 => Box<dyn Shape>);

impl Construct<ShapeFactory> for Circle {
    fn construct(radius: f64) -> Box<dyn Shape> {
        Box::new(Circle { radius })
    }
}

impl Construct<ShapeFactory> for Square {
    fn construct(side: f64) -> Box<dyn Shape> {
        Box::new(Square { side })
    }
}

auto_register!(ShapeFactory, Circle);

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== tag-factory: Shapes ===\n");

    // -------------------------------------------------------------------------
    // 1. Install definition-time registrations
    // -------------------------------------------------------------------------
    let installed = install_pending();
    println!("1. Installed {installed} pending registration(s)");

    // -------------------------------------------------------------------------
    // 2. Register at runtime
    // -------------------------------------------------------------------------
    ShapeFactory.register::<Square>(Some("sq"));
    ShapeFactory.register_fn("unit-circle", |_| {
        Box::new(Circle { radius: 1.0 }) as Box<dyn Shape>
    });
    println!("2. Registered tags: {:?}", ShapeFactory.tags().unwrap_or_default());

    // -------------------------------------------------------------------------
    // 3. Create by tag
    // -------------------------------------------------------------------------
    for (tag, size) in [("Circle", 2.0), ("sq", 3.0), ("unit-circle", 0.0), ("triangle", 1.0)] {
        match ShapeFactory.create(tag, size) {
            Ok(shape) => println!("3. {tag:>12} -> {}", shape.describe()),
            Err(err) => println!("3. {tag:>12} -> error: {err}"),
        }
    }

    // -------------------------------------------------------------------------
    // 4. Duplicates are rejected
    // -------------------------------------------------------------------------
    if let Err(FactoryError::DuplicateRegistration { key }) =
        ShapeFactory.try_register::<Circle>(Some("sq"))
    {
        println!("4. Rejected duplicate key {key}");
    }
}
