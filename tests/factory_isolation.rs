//! Integration tests for factory isolation.
//!
//! Each factory owns a table, so identical tags in two factories never
//! collide and never leak into each other.

use tag_factory::{define_factory, FactoryApi, FactoryError};

#[test]
fn test_same_tag_in_three_factories() {
    define_factory!(Parsers: &'static str => String);
    define_factory!(Printers: &'static str => String);
    define_factory!(Loaders: &'static str => String);

    Parsers.register_fn("json", |s| format!("parse {s}"));
    Printers.register_fn("json", |s| format!("print {s}"));
    Loaders.register_fn("json", |s| format!("load {s}"));

    assert_eq!(Parsers.create("json", "a").unwrap(), "parse a");
    assert_eq!(Printers.create("json", "b").unwrap(), "print b");
    assert_eq!(Loaders.create("json", "c").unwrap(), "load c");
}

#[test]
fn test_canonical_keys_differ_between_factories() {
    define_factory!(Alpha: () => ());
    define_factory!(Beta: () => ());

    assert_ne!(Alpha.namespace(), Beta.namespace());
    assert_ne!(Alpha.canonicalize("tag"), Beta.canonicalize("tag"));
    assert!(Alpha.canonicalize("tag").ends_with("Alpha.tag"));
}

#[test]
fn test_factory_does_not_leak_between_instances() {
    define_factory!(IsolatedA: () => u8);
    define_factory!(IsolatedB: () => u8);

    IsolatedA.register_fn("only-a", |()| 1);

    assert!(IsolatedA.contains("only-a").unwrap());
    assert!(!IsolatedB.contains("only-a").unwrap());

    let err = IsolatedB.create("only-a", ()).unwrap_err();
    assert!(matches!(err, FactoryError::NotRegistered { .. }));
}

#[test]
fn test_same_name_in_different_modules() {
    mod module_a {
        use tag_factory::{define_factory, FactoryApi};
        define_factory!(pub Scoped: () => &'static str);

        pub fn setup() {
            Scoped.register_fn("who", |()| "module A");
        }
    }

    mod module_b {
        use tag_factory::{define_factory, FactoryApi};
        define_factory!(pub Scoped: () => &'static str);

        pub fn setup() {
            Scoped.register_fn("who", |()| "module B");
        }
    }

    module_a::setup();
    module_b::setup();

    assert_ne!(module_a::Scoped.namespace(), module_b::Scoped.namespace());
    assert_eq!(module_a::Scoped.create("who", ()).unwrap(), "module A");
    assert_eq!(module_b::Scoped.create("who", ()).unwrap(), "module B");
}

#[test]
fn test_pinned_namespaces_stay_isolated() {
    define_factory!(First: () => u8, namespace = "plugins.first");
    define_factory!(Second: () => u8, namespace = "plugins.second");

    First.register_fn("x", |()| 1);
    Second.register_fn("x", |()| 2);

    assert_eq!(First.canonicalize("x"), "plugins.first.x");
    assert_eq!(Second.canonicalize("x"), "plugins.second.x");
    assert_eq!(First.create("x", ()).unwrap(), 1);
    assert_eq!(Second.create("x", ()).unwrap(), 2);
}

#[test]
fn test_tracing_isolation() {
    define_factory!(TracedA: () => u8);
    define_factory!(TracedB: () => u8);

    let events = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let events_clone = events.clone();

    TracedA.set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(event.to_string());
    });

    TracedA.register_fn("one", |()| 1);
    TracedB.register_fn("two", |()| 2);

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert!(captured[0].starts_with("register"));
}
