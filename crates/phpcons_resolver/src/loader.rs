//! Lazy command instantiation.

use rustc_hash::FxHashMap;

/// Maps command names to factories and defers construction until a name is
/// actually resolved. Registering a command costs a map insert; nothing is
/// built up front.
pub struct FactoryLoader<T> {
    factories: FxHashMap<String, Box<dyn Fn() -> T>>,
}

impl<T> FactoryLoader<T> {
    pub fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// Register a factory under a name, replacing any earlier registration.
    pub fn register(&mut self, name: impl Into<String>, factory: impl Fn() -> T + 'static) {
        self.factories.insert(name.into(), Box::new(factory));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Build the command registered under `name`. Each call runs the
    /// factory again.
    pub fn resolve(&self, name: &str) -> Option<T> {
        self.factories.get(name).map(|factory| factory())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<T> Default for FactoryLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_registration_does_not_instantiate() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut loader = FactoryLoader::new();
        loader.register("greet", move || {
            counter.set(counter.get() + 1);
            "greeter"
        });
        assert_eq!(calls.get(), 0);
        assert!(loader.contains("greet"));
        assert_eq!(loader.resolve("greet"), Some("greeter"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unknown_name() {
        let loader: FactoryLoader<&str> = FactoryLoader::new();
        assert!(!loader.contains("missing"));
        assert_eq!(loader.resolve("missing"), None);
    }

    #[test]
    fn test_later_registration_wins() {
        let mut loader = FactoryLoader::new();
        loader.register("dup", || 1);
        loader.register("dup", || 2);
        assert_eq!(loader.len(), 1);
        assert_eq!(loader.resolve("dup"), Some(2));
    }

    #[test]
    fn test_names_sorted() {
        let mut loader = FactoryLoader::new();
        loader.register("beta", || ());
        loader.register("alpha", || ());
        assert_eq!(loader.names(), vec!["alpha", "beta"]);
    }
}
