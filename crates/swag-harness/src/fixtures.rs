//! Per-test fixture provider
//!
//! An explicit registry maps fixture names to factories with declared
//! dependencies. Each test invocation opens a fresh [`FixtureScope`];
//! resolution walks dependencies depth-first, caches each instance for
//! the duration of that one scope, and rejects cycles. Two tests never
//! observe each other's fixture instances.

use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;
use swag_core::{Result, SwagError};
use tracing::debug;

/// Conventional name of the root browser-tab fixture
pub const PAGE_FIXTURE: &str = "page";

type Factory = Box<dyn Fn(&mut FixtureScope) -> Result<Rc<dyn Any>>>;

struct FixtureDef {
    deps: &'static [&'static str],
    factory: Factory,
}

/// Registry of named fixture definitions
#[derive(Default)]
pub struct FixtureRegistry {
    defs: HashMap<&'static str, FixtureDef>,
}

impl FixtureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fixture under a name with its declared dependencies
    ///
    /// Declared dependencies are resolved (and cached in the scope)
    /// before the factory runs; the factory fetches them via
    /// [`FixtureScope::get`].
    pub fn register<T, F>(&mut self, name: &'static str, deps: &'static [&'static str], factory: F)
    where
        T: Any,
        F: Fn(&mut FixtureScope) -> Result<T> + 'static,
    {
        self.defs.insert(
            name,
            FixtureDef {
                deps,
                factory: Box::new(move |scope| {
                    let value = factory(scope)?;
                    Ok(Rc::new(value) as Rc<dyn Any>)
                }),
            },
        );
    }

    pub fn contains(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }

    /// Open a fresh scope for one test invocation
    pub fn scope(&self) -> FixtureScope<'_> {
        FixtureScope {
            registry: self,
            cache: HashMap::new(),
            resolving: Vec::new(),
        }
    }
}

/// One test invocation's resolved fixtures
///
/// Instances live exactly as long as the scope; dropping the scope at
/// teardown releases every fixture (and with it the browser tab).
pub struct FixtureScope<'r> {
    registry: &'r FixtureRegistry,
    cache: HashMap<&'static str, Rc<dyn Any>>,
    resolving: Vec<&'static str>,
}

impl FixtureScope<'_> {
    /// Resolve a fixture by name, instantiating it (and its dependency
    /// chain) on first use within this scope
    pub fn resolve(&mut self, name: &str) -> Result<Rc<dyn Any>> {
        if let Some(cached) = self.cache.get(name) {
            return Ok(Rc::clone(cached));
        }

        let registry = self.registry;
        let (key, def) = registry
            .defs
            .get_key_value(name)
            .ok_or_else(|| SwagError::UnknownFixture(name.to_string()))?;
        let key: &'static str = key;

        if self.resolving.contains(&key) {
            let mut chain: Vec<&str> = self.resolving.clone();
            chain.push(key);
            return Err(SwagError::FixtureCycle(chain.join(" -> ")));
        }

        debug!("Resolving fixture '{}'", key);
        self.resolving.push(key);

        let built = (|| {
            for dep in def.deps {
                self.resolve(dep)?;
            }
            (def.factory)(self)
        })();

        self.resolving.pop();

        let value = built.map_err(|e| match e {
            err @ (SwagError::UnknownFixture(_)
            | SwagError::FixtureCycle(_)
            | SwagError::FixtureSetup { .. }) => err,
            err => SwagError::FixtureSetup {
                name: key.to_string(),
                reason: err.to_string(),
            },
        })?;

        self.cache.insert(key, Rc::clone(&value));
        Ok(value)
    }

    /// Resolve a fixture and downcast it to its concrete type
    pub fn get<T: Any>(&mut self, name: &str) -> Result<Rc<T>> {
        self.resolve(name)?
            .downcast::<T>()
            .map_err(|_| SwagError::FixtureType {
                name: name.to_string(),
            })
    }

    /// Peek at an already-instantiated fixture without creating one
    ///
    /// Used by artifact capture at teardown: if no page was ever built
    /// (setup failed early), capture must not launch a browser just to
    /// photograph nothing.
    pub fn cached<T: Any>(&self, name: &str) -> Option<Rc<T>> {
        self.cache
            .get(name)
            .and_then(|value| Rc::clone(value).downcast::<T>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_resolution_caches_within_one_scope() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut registry = FixtureRegistry::new();
        registry.register("base", &[], move |_| {
            counter.set(counter.get() + 1);
            Ok(42u32)
        });
        registry.register("left", &["base"], |scope| {
            Ok(*scope.get::<u32>("base")? + 1)
        });
        registry.register("right", &["base"], |scope| {
            Ok(*scope.get::<u32>("base")? + 2)
        });

        let mut scope = registry.scope();
        assert_eq!(*scope.get::<u32>("left").unwrap(), 43);
        assert_eq!(*scope.get::<u32>("right").unwrap(), 44);

        // Both dependents shared one "base" instance.
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_each_scope_is_isolated() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut registry = FixtureRegistry::new();
        registry.register("base", &[], move |_| {
            counter.set(counter.get() + 1);
            Ok(counter.get())
        });

        let first = *registry.scope().get::<i32>("base").unwrap();
        let second = *registry.scope().get::<i32>("base").unwrap();

        assert_eq!(calls.get(), 2);
        assert_ne!(first, second);
    }

    #[test]
    fn test_unknown_fixture_errors() {
        let registry = FixtureRegistry::new();
        let err = registry.scope().resolve("nope").unwrap_err();
        assert!(matches!(err, SwagError::UnknownFixture(_)));
    }

    #[test]
    fn test_cycle_is_detected() {
        let mut registry = FixtureRegistry::new();
        registry.register("a", &["b"], |_| Ok(0u8));
        registry.register("b", &["a"], |_| Ok(0u8));

        let err = registry.scope().resolve("a").unwrap_err();
        assert!(matches!(err, SwagError::FixtureCycle(_)));
    }

    #[test]
    fn test_factory_error_becomes_setup_failure() {
        let mut registry = FixtureRegistry::new();
        registry.register("broken", &[], |_| -> Result<u8> {
            Err(SwagError::Other("login submission failed".to_string()))
        });
        registry.register("dependent", &["broken"], |scope| scope.get::<u8>("broken").map(|v| *v));

        let err = registry.scope().resolve("dependent").unwrap_err();
        match err {
            SwagError::FixtureSetup { name, reason } => {
                assert_eq!(name, "broken");
                assert!(reason.contains("login submission failed"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_type_downcast_errors() {
        let mut registry = FixtureRegistry::new();
        registry.register("num", &[], |_| Ok(7u32));

        let err = registry.scope().get::<String>("num").unwrap_err();
        assert!(matches!(err, SwagError::FixtureType { .. }));
    }

    #[test]
    fn test_cached_peek_does_not_instantiate() {
        let mut registry = FixtureRegistry::new();
        registry.register("lazy", &[], |_| Ok(1u8));

        let mut scope = registry.scope();
        assert!(scope.cached::<u8>("lazy").is_none());

        scope.get::<u8>("lazy").unwrap();
        assert_eq!(*scope.cached::<u8>("lazy").unwrap(), 1);
    }
}
