//! Tag derivation and canonical key construction.

/// Separator between a namespace and a tag in a canonical key.
pub const KEY_DELIMITER: char = '.';

/// Derives the default tag for `T`: its bare type name.
///
/// Module path and generic arguments are dropped, so `app::shapes::Circle`
/// and `app::Boxed<u8>` yield `Circle` and `Boxed`.
///
/// ```rust
/// struct Circle;
/// assert_eq!(tag_factory::default_tag::<Circle>(), "Circle");
/// ```
pub fn default_tag<T: ?Sized>() -> &'static str {
    short_name(std::any::type_name::<T>())
}

fn short_name(full: &'static str) -> &'static str {
    let base = match full.find('<') {
        Some(idx) => &full[..idx],
        None => full,
    };
    match base.rfind("::") {
        Some(idx) => &base[idx + 2..],
        None => base,
    }
}

/// Joins a namespace and a tag into a canonical key.
pub fn join_key(namespace: &str, tag: &str) -> String {
    let mut key = String::with_capacity(namespace.len() + tag.len() + 1);
    key.push_str(namespace);
    key.push(KEY_DELIMITER);
    key.push_str(tag);
    key
}

/// Strips `namespace.` from a canonical key, if present.
pub(crate) fn strip_namespace<'a>(namespace: &str, key: &'a str) -> Option<&'a str> {
    key.strip_prefix(namespace)?.strip_prefix(KEY_DELIMITER)
}
