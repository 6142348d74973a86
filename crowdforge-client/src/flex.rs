//! Flexible (open-ended) enumerations
//!
//! The platform adds enum values server-side without coordinating client
//! releases, so every enum-like field tolerates names this build has never
//! seen. Known values are fixed constants; unseen names are interned in a
//! per-category registry so repeated parses of the same name return the same
//! instance.

use std::collections::HashMap;
use std::sync::RwLock;

/// A value with a stable wire name.
pub trait FlexValue: Clone + PartialEq {
    fn name(&self) -> &str;
}

/// Per-category store of runtime-discovered values.
///
/// The map grows for the process lifetime; there is no eviction. Its size is
/// bounded by the number of distinct names the server ever sends, which in
/// practice is the platform's enum vocabulary.
pub struct FlexRegistry<T> {
    discovered: RwLock<HashMap<String, T>>,
}

impl<T: FlexValue> FlexRegistry<T> {
    pub fn new() -> Self {
        Self {
            discovered: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve `name` against the known-constant table first, then the
    /// discovered cache, creating and interning a new value on first sight.
    ///
    /// Under a concurrent race on an unseen name the first insert wins; every
    /// caller gets the winning instance back and the losers' constructions
    /// are discarded.
    pub fn resolve(&self, known: &[T], name: &str, factory: impl FnOnce(&str) -> T) -> T {
        if let Some(value) = known.iter().find(|v| v.name() == name) {
            return value.clone();
        }
        if let Some(value) = self
            .discovered
            .read()
            .expect("flex registry poisoned")
            .get(name)
        {
            return value.clone();
        }
        let mut discovered = self.discovered.write().expect("flex registry poisoned");
        discovered
            .entry(name.to_string())
            .or_insert_with(|| factory(name))
            .clone()
    }

    /// Known constants followed by a snapshot of the discovered values.
    ///
    /// The snapshot is copied out under the read lock, so iteration never
    /// races with concurrent inserts.
    pub fn values(&self, known: &[T]) -> Vec<T> {
        let discovered = self.discovered.read().expect("flex registry poisoned");
        let mut all = known.to_vec();
        all.extend(discovered.values().cloned());
        all
    }
}

impl<T: FlexValue> Default for FlexRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Declare a flexible enum: unit variants for the known constants plus an
/// `Unknown` variant interning unseen wire names.
///
/// Generates the `KNOWN` table, `from_name`/`values` backed by a
/// process-wide [`FlexRegistry`], `Display`, and string-based serde impls.
macro_rules! flex_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A value this client release does not know about yet.
            Unknown(::std::sync::Arc<str>),
        }

        impl $name {
            /// Well-known values, checked before the discovered registry.
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            fn registry() -> &'static $crate::flex::FlexRegistry<$name> {
                static REGISTRY: ::once_cell::sync::Lazy<$crate::flex::FlexRegistry<$name>> =
                    ::once_cell::sync::Lazy::new($crate::flex::FlexRegistry::new);
                &REGISTRY
            }

            /// Resolve a wire name, interning unseen names for the process
            /// lifetime.
            pub fn from_name(name: &str) -> $name {
                Self::registry().resolve(Self::KNOWN, name, |n| {
                    $name::Unknown(::std::sync::Arc::from(n))
                })
            }

            /// Every value seen by this process: the known constants plus a
            /// snapshot of the discovered ones.
            pub fn values() -> Vec<$name> {
                Self::registry().values(Self::KNOWN)
            }
        }

        impl $crate::flex::FlexValue for $name {
            fn name(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Unknown(name) => name,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::flex::FlexValue::name(self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::flex::FlexValue::name(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let name =
                    <::std::borrow::Cow<'de, str> as ::serde::Deserialize>::deserialize(
                        deserializer,
                    )?;
                Ok($name::from_name(&name))
            }
        }
    };
}

pub(crate) use flex_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    flex_enum! {
        pub enum Flavor {
            Vanilla = "VANILLA",
            Chocolate = "CHOCOLATE",
        }
    }

    #[test]
    fn test_known_name_returns_constant() {
        assert_eq!(Flavor::from_name("VANILLA"), Flavor::Vanilla);
        assert_eq!(Flavor::from_name("CHOCOLATE"), Flavor::Chocolate);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let parsed = Flavor::from_name("vanilla");
        assert!(matches!(parsed, Flavor::Unknown(_)));
        assert_eq!(parsed.name(), "vanilla");
    }

    #[test]
    fn test_discovered_values_share_one_instance() {
        let first = Flavor::from_name("PISTACHIO");
        let second = Flavor::from_name("PISTACHIO");
        match (&first, &second) {
            (Flavor::Unknown(a), Flavor::Unknown(b)) => assert!(Arc::ptr_eq(a, b)),
            other => panic!("expected two Unknown values, got {:?}", other),
        }
    }

    #[test]
    fn test_known_values_win_over_prepopulated_cache() {
        let registry = FlexRegistry::new();
        // Seed the discovered cache with an impostor carrying a known name.
        let impostor = registry.resolve(&[], "VANILLA", |n| Flavor::Unknown(Arc::from(n)));
        assert!(matches!(impostor, Flavor::Unknown(_)));

        let resolved = registry.resolve(Flavor::KNOWN, "VANILLA", |n| {
            Flavor::Unknown(Arc::from(n))
        });
        assert_eq!(resolved, Flavor::Vanilla);
    }

    #[test]
    fn test_concurrent_parse_single_winner() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| Flavor::from_name("RACED_FLAVOR")))
            .collect();
        let parsed: Vec<Flavor> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let Flavor::Unknown(winner) = &parsed[0] else {
            panic!("expected a discovered value");
        };
        for value in &parsed {
            let Flavor::Unknown(name) = value else {
                panic!("expected a discovered value");
            };
            assert!(Arc::ptr_eq(winner, name));
        }
    }

    #[test]
    fn test_values_includes_discovered_snapshot() {
        let _ = Flavor::from_name("STRAWBERRY");
        let values = Flavor::values();
        assert!(values.contains(&Flavor::Vanilla));
        assert!(values.contains(&Flavor::Chocolate));
        assert!(values.iter().any(|v| v.name() == "STRAWBERRY"));
    }

    #[test]
    fn test_serde_round_trip_through_names() {
        let json = serde_json::to_string(&Flavor::Vanilla).unwrap();
        assert_eq!(json, r#""VANILLA""#);

        let parsed: Flavor = serde_json::from_str(r#""MATCHA""#).unwrap();
        assert_eq!(parsed.name(), "MATCHA");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""MATCHA""#);
    }
}
