//! Lexically chained bindings

use crate::value::Value;
use std::collections::HashMap;
use tracing::trace;

/// A frame of bindings, chained to the frame it was created from.
///
/// Lookups walk outward until a frame binds the name. Writes only ever go into this frame, so a
/// child shadows its parent instead of changing it.
#[derive(Debug, Default)]
pub struct Environment<'p> {
    bindings: HashMap<String, Value>,
    parent: Option<&'p Environment<'p>>,
}

impl<'p> Environment<'p> {
    /// Creates a root environment with no bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty frame whose lookups fall back to this one
    pub fn child(&self) -> Environment<'_> {
        Environment {
            bindings: HashMap::new(),
            parent: Some(self),
        }
    }

    pub fn parent(&self) -> Option<&Environment<'p>> {
        self.parent
    }

    /// Finds the closest binding of `name`
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.bindings.get(name) {
            Some(value) => Some(value),
            None => self.parent.and_then(|parent| parent.get(name)),
        }
    }

    /// Whether `name` is bound in this frame itself
    pub fn is_local(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Binds `name` in this frame, giving back what this frame bound it to before
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        trace!("binding {name} = {value}");
        self.bindings.insert(name, value)
    }

    /// The number of frames above this one
    pub fn depth(&self) -> usize {
        self.parent.map(|parent| parent.depth() + 1).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_walks_outward() {
        let mut root = Environment::new();
        root.set("x", Value::Integer(1));
        let child = root.child();
        let grandchild = child.child();
        assert_eq!(grandchild.get("x"), Some(&Value::Integer(1)));
        assert_eq!(grandchild.depth(), 2);
        assert!(grandchild.get("y").is_none());
    }

    #[test]
    fn test_child_shadows_parent() {
        let mut root = Environment::new();
        root.set("x", Value::Integer(1));
        {
            let mut child = root.child();
            child.set("x", Value::Integer(2));
            assert_eq!(child.get("x"), Some(&Value::Integer(2)));
            assert!(child.is_local("x"));
            assert_eq!(child.parent().and_then(|p| p.get("x")), Some(&Value::Integer(1)));
        }
        assert_eq!(root.get("x"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_set_replaces_in_frame() {
        let mut env = Environment::new();
        assert_eq!(env.set("x", Value::Integer(1)), None);
        assert_eq!(env.set("x", Value::Nil), Some(Value::Integer(1)));
        assert_eq!(env.get("x"), Some(&Value::Nil));
    }
}
