use std::{collections::HashMap, rc::Rc};

use crate::{ast::FunctionDef, interpreter::value::core::Value};

/// A scope of variable and function bindings.
///
/// Each function call gets a fresh `Environment` whose parent is the
/// caller's environment. Lookups walk the parent chain; writes only ever
/// touch the current scope, so an assignment inside a function shadows an
/// outer binding instead of changing it.
///
/// The parent is borrowed, not owned: a child cannot outlive the call that
/// created it.
#[derive(Debug, Default)]
pub struct Environment<'p> {
    variables: HashMap<String, Value>,
    functions: HashMap<String, Rc<FunctionDef>>,
    parent:    Option<&'p Environment<'p>>,
}

impl<'p> Environment<'p> {
    /// Creates an empty root environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty environment whose lookups fall back to `self`.
    #[must_use]
    pub fn child(&'p self) -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               parent:    Some(self), }
    }

    /// Looks up a variable in this scope, then in each ancestor.
    ///
    /// The chain is as long as the call depth, so it is walked in a loop.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        let mut scope = Some(self);
        while let Some(env) = scope {
            if let Some(value) = env.variables.get(name) {
                return Some(value);
            }
            scope = env.parent;
        }
        None
    }

    /// Binds `name` in this scope, replacing any binding it already holds
    /// here. Ancestors are never modified.
    pub fn set(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Registers a function in this scope. A later definition with the same
    /// name replaces the earlier one.
    pub fn define_function(&mut self, def: Rc<FunctionDef>) {
        self.functions.insert(def.name.clone(), def);
    }

    /// Looks up a function in this scope, then in each ancestor.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Rc<FunctionDef>> {
        let mut scope = Some(self);
        while let Some(env) = scope {
            if let Some(def) = env.functions.get(name) {
                return Some(Rc::clone(def));
            }
            scope = env.parent;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::Position;

    fn function(name: &str, params: &[&str]) -> Rc<FunctionDef> {
        Rc::new(FunctionDef { name:   name.to_string(),
                              params: params.iter().map(ToString::to_string).collect(),
                              body:   Vec::new(),
                              pos:    Position::new(1, 1), })
    }

    #[test]
    fn lookup_walks_the_parent_chain() {
        let mut global = Environment::new();
        global.set("x", Value::Integer(1));

        let child = global.child();
        let grandchild = child.child();

        assert_eq!(grandchild.get("x"), Some(&Value::Integer(1)));
        assert_eq!(grandchild.get("y"), None);
    }

    #[test]
    fn assignment_shadows_without_touching_the_parent() {
        let mut global = Environment::new();
        global.set("x", Value::Integer(1));

        {
            let mut child = global.child();
            child.set("x", Value::Integer(2));
            assert_eq!(child.get("x"), Some(&Value::Integer(2)));
        }

        assert_eq!(global.get("x"), Some(&Value::Integer(1)));
    }

    #[test]
    fn later_function_definition_wins() {
        let mut global = Environment::new();
        global.define_function(function("f", &["a"]));
        global.define_function(function("f", &["a", "b"]));

        assert_eq!(global.function("f").map(|f| f.params.len()), Some(2));
    }

    #[test]
    fn functions_are_visible_from_children() {
        let mut global = Environment::new();
        global.define_function(function("gaisuwa", &[]));

        let child = global.child();

        assert!(child.function("gaisuwa").is_some());
        assert!(child.function("babu").is_none());
    }
}
