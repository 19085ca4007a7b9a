//! Macros for declaring factories.

/// Declares a factory type with its own table and trace slot.
///
/// The macro generates a unit struct implementing [`FactoryApi`](crate::FactoryApi).
/// Its namespace defaults to the struct's fully-qualified path and can be
/// pinned with `namespace = "..."`.
///
/// A `pub` factory exposes its argument and product types, so those must be
/// public too.
///
/// Factories declared inside functions share the enclosing module's path, so
/// two same-named factories in different functions get the same namespace.
/// Pin a namespace for those.
///
/// # Examples
///
/// ```rust
/// use tag_factory::{define_factory, Construct, FactoryApi};
///
/// pub trait Shape {
///     fn area(&self) -> f64;
/// }
///
/// struct Square(f64);
///
/// impl Shape for Square {
///     fn area(&self) -> f64 {
///         self.0 * self.0
///     }
/// }
///
/// impl Construct<ShapeFactory> for Square {
///     fn construct(side: f64) -> Box<dyn Shape> {
///         Box::new(Square(side))
///     }
/// }
///
/// define_factory!(pub ShapeFactory: f64 => Box<dyn Shape>);
///
/// ShapeFactory.register::<Square>(Some("sq"));
/// let shape = ShapeFactory.create("sq", 3.0).unwrap();
/// assert_eq!(shape.area(), 9.0);
/// ```
///
/// # Pinned Namespace
///
/// ```rust
/// use tag_factory::{define_factory, FactoryApi};
///
/// define_factory!(Codecs: () => &'static str, namespace = "codecs");
///
/// assert_eq!(Codecs.canonicalize("gzip"), "codecs.gzip");
/// ```
#[macro_export]
macro_rules! define_factory {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident : $args:ty => $product:ty, namespace = $namespace:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::FactoryApi for $name {
            type Args = $args;
            type Product = $product;
            const NAMESPACE: &'static str = $namespace;

            fn storage() -> &'static $crate::FactoryTable<$args, $product> {
                static STORAGE: $crate::FactoryTable<$args, $product> =
                    ::std::sync::LazyLock::new(|| {
                        ::std::sync::RwLock::new(::std::collections::HashMap::new())
                    });
                &STORAGE
            }

            fn trace() -> &'static $crate::TraceSlot {
                static TRACE: $crate::TraceSlot =
                    ::std::sync::LazyLock::new(|| ::std::sync::Mutex::new(None));
                &TRACE
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident : $args:ty => $product:ty $(,)?
    ) => {
        $crate::define_factory!(
            $(#[$meta])*
            $vis $name : $args => $product,
            namespace = concat!(module_path!(), "::", stringify!($name))
        );
    };
}
