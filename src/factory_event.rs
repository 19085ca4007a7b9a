/// Events emitted by a factory during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// Keys are canonical (`namespace.tag`).
///
/// # Examples
///
/// ```rust
/// use tag_factory::FactoryEvent;
///
/// let event = FactoryEvent::Register { key: "app::Shapes.sq".into() };
/// assert_eq!(event.to_string(), "register { key: app::Shapes.sq }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactoryEvent {
    /// A constructor was registered.
    Register {
        /// Canonical key of the new entry
        key: String,
    },

    /// A registration was refused because the key already exists.
    Duplicate {
        /// Canonical key that was already taken
        key: String,
    },

    /// A constructor was looked up for `create`.
    Create {
        /// Canonical key that was requested
        key: String,
        /// Whether a constructor was found
        found: bool,
    },

    /// A tag existence check was performed.
    Contains {
        /// Canonical key that was checked
        key: String,
        /// Whether the key exists
        found: bool,
    },
}

impl std::fmt::Display for FactoryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactoryEvent::Register { key } => write!(f, "register {{ key: {key} }}"),
            FactoryEvent::Duplicate { key } => write!(f, "duplicate {{ key: {key} }}"),
            FactoryEvent::Create { key, found } => {
                write!(f, "create {{ key: {key}, found: {found} }}")
            }
            FactoryEvent::Contains { key, found } => {
                write!(f, "contains {{ key: {key}, found: {found} }}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_event_display() {
        let event = FactoryEvent::Duplicate {
            key: "a.Circle".into(),
        };
        assert_eq!(event.to_string(), "duplicate { key: a.Circle }");

        let event = FactoryEvent::Create {
            key: "a.sq".into(),
            found: true,
        };
        assert_eq!(event.to_string(), "create { key: a.sq, found: true }");

        let event = FactoryEvent::Contains {
            key: "a.hex".into(),
            found: false,
        };
        assert_eq!(event.to_string(), "contains { key: a.hex, found: false }");
    }

    #[test]
    fn test_factory_event_clone() {
        let event = FactoryEvent::Register { key: "a.b".into() };
        assert_eq!(event.clone(), event);
    }
}
