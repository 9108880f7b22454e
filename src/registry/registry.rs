use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::{json::JsonBackend, registry::{Detected, Opener}, source::{ReaderConfig, Source, SourceError}};

/// Ordered table of format backends and the dispatcher that walks it.
///
/// Backends are consulted in registration order, so a file that several
/// backends could read always resolves to the same one. The table only
/// grows: there is no way to unregister. Once populated, a shared `&Registry`
/// can serve `open` from any number of threads.
#[derive(Default)]
pub struct Registry {
    by_name: IndexMap<String, Box<dyn Opener>>,
}

impl Registry {
    pub fn new() -> Self {
        Self { by_name: IndexMap::new() }
    }

    /// Registry pre-loaded with the built-in backends.
    pub fn with_defaults(config: ReaderConfig) -> Self {
        let mut registry = Self::new();
        registry.by_name.insert(JsonBackend::NAME.to_string(), Box::new(JsonBackend::new(config)));
        registry
    }

    /// Add a backend under a unique, non-empty name.
    ///
    /// A duplicate name is rejected and the backend already registered under
    /// it stays in place.
    pub fn register<O: Opener + 'static>(&mut self, name: &str, opener: O) -> Result<(), SourceError> {
        if name.trim().is_empty() {
            return SourceError::EmptyName.err();
        }
        if self.by_name.contains_key(name) {
            warn!(backend = name, "source already registered");
            return SourceError::DuplicateRegistration(name.to_string()).err();
        }

        debug!(backend = name, position = self.by_name.len(), "registering source");
        self.by_name.insert(name.to_string(), Box::new(opener));
        Ok(())
    }

    /// Open `path` with the first backend that recognizes it.
    ///
    /// A backend error aborts the search and is returned as is; when every
    /// backend declines, the result is `SourceError::UnsupportedFormat`.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Box<dyn Source>, SourceError> {
        let path = path.as_ref();

        for (name, opener) in &self.by_name {
            debug!(backend = %name, path = %path.display(), "trying source");
            match opener.open(path) {
                Ok(Detected::Opened(source)) => {
                    info!(backend = %name, path = %path.display(), "opened source");
                    return Ok(source);
                }
                Ok(Detected::NotInFormat) => continue,
                Err(e) => {
                    warn!(backend = %name, path = %path.display(), error = %e, "source failed to open file");
                    return Err(e);
                }
            }
        }

        SourceError::UnsupportedFormat(path.display().to_string()).err()
    }

    /// Registered names, in dispatch order.
    pub fn names(&self) -> Vec<String> {
        self.by_name.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::fixtures::{tag_of, Answer, ScriptedOpener};

    fn corrupt() -> SourceError {
        SourceError::parse("x.fmt", "bad magic")
    }

    #[test]
    fn every_unique_name_is_dispatchable() {
        let mut r = Registry::new();
        assert!(r.is_empty());
        for name in ["a", "b", "c"] {
            r.register(name, ScriptedOpener::new(Answer::Mismatch)).unwrap();
        }
        assert_eq!(r.names(), vec!["a", "b", "c"]);
        assert_eq!(r.len(), 3);
        assert!(r.contains("b"));
        assert!(!r.contains("d"));
    }

    #[test]
    fn duplicate_registration_keeps_original() {
        let mut r = Registry::new();
        let original = ScriptedOpener::new(Answer::Match("original"));
        let intruder = ScriptedOpener::new(Answer::Match("intruder"));
        r.register("fmt", original.clone()).unwrap();

        let err = r.register("fmt", intruder.clone()).unwrap_err();
        assert_eq!(err, SourceError::DuplicateRegistration("fmt".into()));
        assert_eq!(r.len(), 1);

        let src = r.open("x.fmt").unwrap();
        assert_eq!(tag_of(src.as_ref()), "original");
        assert_eq!(original.calls(), 1);
        assert_eq!(intruder.calls(), 0);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut r = Registry::new();
        assert_eq!(r.register("", ScriptedOpener::new(Answer::Mismatch)), Err(SourceError::EmptyName));
        assert_eq!(r.register("  ", ScriptedOpener::new(Answer::Mismatch)), Err(SourceError::EmptyName));
        assert!(r.is_empty());
    }

    #[test]
    fn mismatch_then_match() {
        let a = ScriptedOpener::new(Answer::Mismatch);
        let b = ScriptedOpener::new(Answer::Match("B"));
        let mut r = Registry::new();
        r.register("A", a.clone()).unwrap();
        r.register("B", b.clone()).unwrap();

        let src = r.open("x.fmt").unwrap();
        assert_eq!(tag_of(src.as_ref()), "B");
        assert_eq!(a.calls(), 1);
        assert_eq!(b.calls(), 1);
    }

    #[test]
    fn first_match_wins_and_later_backends_are_never_called() {
        let openers = [
            ScriptedOpener::new(Answer::Mismatch),
            ScriptedOpener::new(Answer::Mismatch),
            ScriptedOpener::new(Answer::Match("third")),
            ScriptedOpener::new(Answer::Match("fourth")),
            ScriptedOpener::new(Answer::Fail(corrupt())),
        ];
        let mut r = Registry::new();
        for (i, o) in openers.iter().enumerate() {
            r.register(&format!("b{i}"), o.clone()).unwrap();
        }

        let src = r.open("x.fmt").unwrap();
        assert_eq!(tag_of(src.as_ref()), "third");
        let calls: Vec<_> = openers.iter().map(ScriptedOpener::calls).collect();
        assert_eq!(calls, vec![1, 1, 1, 0, 0]);
    }

    #[test]
    fn no_match_is_unsupported() {
        let mut r = Registry::new();
        r.register("A", ScriptedOpener::new(Answer::Mismatch)).unwrap();
        r.register("B", ScriptedOpener::new(Answer::Mismatch)).unwrap();
        let err = r.open("x.fmt").unwrap_err();
        assert_eq!(err, SourceError::UnsupportedFormat("x.fmt".into()));
    }

    #[test]
    fn empty_registry_is_unsupported() {
        assert!(matches!(Registry::new().open("x"), Err(SourceError::UnsupportedFormat(_))));
    }

    #[test]
    fn backend_error_aborts_dispatch() {
        for position in 0..3 {
            let openers: Vec<_> = (0..3)
                .map(|i| match i {
                    i if i == position => ScriptedOpener::new(Answer::Fail(corrupt())),
                    i if i < position => ScriptedOpener::new(Answer::Mismatch),
                    _ => ScriptedOpener::new(Answer::Match("late")),
                })
                .collect();
            let mut r = Registry::new();
            for (i, o) in openers.iter().enumerate() {
                r.register(&format!("b{i}"), o.clone()).unwrap();
            }

            assert_eq!(r.open("x.fmt").unwrap_err(), corrupt());
            for (i, o) in openers.iter().enumerate() {
                assert_eq!(o.calls(), usize::from(i <= position), "backend {i}, failing at {position}");
            }
        }
    }

    #[test]
    fn dispatch_is_deterministic() {
        let mut r = Registry::new();
        r.register("one", ScriptedOpener::new(Answer::Match("one"))).unwrap();
        r.register("two", ScriptedOpener::new(Answer::Match("two"))).unwrap();
        for _ in 0..5 {
            assert_eq!(tag_of(r.open("x.fmt").unwrap().as_ref()), "one");
        }
    }

    #[test]
    fn concurrent_open_on_shared_registry() {
        let b = ScriptedOpener::new(Answer::Match("B"));
        let mut r = Registry::new();
        r.register("A", ScriptedOpener::new(Answer::Mismatch)).unwrap();
        r.register("B", b.clone()).unwrap();
        let r = std::sync::Arc::new(r);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let r = std::sync::Arc::clone(&r);
                std::thread::spawn(move || tag_of(r.open("x.fmt").unwrap().as_ref()))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), "B");
        }
        assert_eq!(b.calls(), 8);
    }

    #[test]
    fn defaults_include_json() {
        let r = Registry::with_defaults(ReaderConfig::default());
        assert_eq!(r.names(), vec![JsonBackend::NAME]);
    }
}
