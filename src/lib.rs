//! # Tag Factory
//!
//! A namespaced factory registry: constructors are registered under string tags
//! and instances are created by tag.
//!
//! Every factory is its own type with its own table, so the same tag can be
//! used by two factories without colliding. Tags are stored as canonical keys
//! (`namespace.tag`), which keeps diagnostics unambiguous.
//!
//! ## Quick Start
//!
//! ```rust
//! use tag_factory::{define_factory, Construct, FactoryApi, FactoryError};
//!
//! #[derive(Debug, PartialEq)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! define_factory!(ShapeFactory: f64 => Shape);
//!
//! struct Circle;
//!
//! impl Construct<ShapeFactory> for Circle {
//!     fn construct(radius: f64) -> Shape {
//!         Shape::Circle(radius)
//!     }
//! }
//!
//! ShapeFactory.register::<Circle>(None);
//! ShapeFactory.register_fn("sq", Shape::Square);
//!
//! assert_eq!(ShapeFactory.create("Circle", 1.0).unwrap(), Shape::Circle(1.0));
//! assert_eq!(ShapeFactory.create("sq", 2.0).unwrap(), Shape::Square(2.0));
//! assert!(matches!(
//!     ShapeFactory.create("triangle", 3.0),
//!     Err(FactoryError::NotRegistered { .. })
//! ));
//! ```
//!
//! ## Features
//!
//! - **Isolated**: each factory owns its table
//! - **Insert-only**: a registered tag is never replaced
//! - **Thread-safe**: registration and lookup may happen from any thread
//! - **Observable**: `tracing` logs plus an optional per-factory callback
//! - **Definition-time registration**: `auto_register!` with the `inventory` feature
//!
//! ## Main Items
//!
//! - [`define_factory!`] - Declare a factory type
//! - [`FactoryApi`] - Register, create and inspect
//! - [`Construct`] - A named constructor; its type name is the default tag
//! - [`FactoryError`] - Duplicate or missing tags
//! - [`FactoryEvent`] - Events passed to trace callbacks

#[cfg(feature = "inventory")]
pub mod auto;
mod factory_error;
mod factory_event;
mod factory_trait;
mod macros;
mod tag;

#[cfg(feature = "inventory")]
pub use auto::{install_pending, PendingRegistration};
pub use factory_error::FactoryError;
pub use factory_event::FactoryEvent;
pub use factory_trait::{Constructor, Construct, FactoryApi, FactoryTable, TraceSlot};
pub use tag::{default_tag, join_key, KEY_DELIMITER};

#[cfg(feature = "inventory")]
#[doc(hidden)]
pub use inventory;
