// crates/objdictgen/src/resolver.rs

//! Resolves abstract type names into concrete storage descriptions.
//!
//! Type names are first classified into a closed `TypeFamily` and only then
//! turned into a `ResolvedType`; no later stage inspects type-name strings.

use crate::error::GenError;
use crate::types::{ResolvedType, SemanticKind, StorageType};
use objdict::ObjectValue;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static TYPE_MODEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([_A-Z]+?)([0-9]*)$").expect("type name pattern is valid")
});

/// Widths admitted for the integer families.
const INTEGER_WIDTHS: [u8; 8] = [8, 16, 24, 32, 40, 48, 56, 64];

/// Classification of a type name, derived once before any emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    Unsigned(u8),
    Integer(u8),
    Real(u8),
    /// `VISIBLE_STRING` or `OCTET_STRING`, with an optional declared length.
    String(Option<usize>),
    Domain,
    Boolean,
}

impl TypeFamily {
    /// Classifies a type name, or `None` if it is not a supported type.
    pub fn classify(type_name: &str) -> Option<Self> {
        let caps = TYPE_MODEL.captures(type_name)?;
        let family = caps.get(1).map_or("", |m| m.as_str());
        let digits = caps.get(2).map_or("", |m| m.as_str());

        let width = || {
            digits
                .parse::<u8>()
                .ok()
                .filter(|w| INTEGER_WIDTHS.contains(w))
        };

        match family {
            "UNSIGNED" => width().map(TypeFamily::Unsigned),
            "INTEGER" => width().map(TypeFamily::Integer),
            "REAL" => match digits {
                "32" => Some(TypeFamily::Real(32)),
                "64" => Some(TypeFamily::Real(64)),
                _ => None,
            },
            "VISIBLE_STRING" | "OCTET_STRING" => {
                if digits.is_empty() {
                    Some(TypeFamily::String(None))
                } else {
                    digits.parse::<usize>().ok().map(|n| TypeFamily::String(Some(n)))
                }
            }
            "DOMAIN" if digits.is_empty() => Some(TypeFamily::Domain),
            "BOOLEAN" if digits.is_empty() => Some(TypeFamily::Boolean),
            _ => None,
        }
    }
}

/// Per-run type resolver with its memoisation cache.
///
/// One instance lives for exactly one generation run, so string sizing of
/// one dictionary never leaks into another.
#[derive(Debug)]
pub struct TypeResolver {
    cache: BTreeMap<String, ResolvedType>,
    default_string_size: usize,
}

impl TypeResolver {
    pub fn new(default_string_size: usize) -> Self {
        Self {
            cache: BTreeMap::new(),
            default_string_size,
        }
    }

    pub fn default_string_size(&self) -> usize {
        self.default_string_size
    }

    /// Registers a synthetic type (value-range types) under `name`.
    pub fn register(&mut self, name: impl Into<String>, resolved: ResolvedType) {
        self.cache.insert(name.into(), resolved);
    }

    /// Resolves a type name without candidate values.
    pub fn resolve(&mut self, type_name: &str) -> Result<ResolvedType, GenError> {
        self.resolve_for(type_name, std::iter::empty())
    }

    /// Resolves a type name, sizing string and domain kinds to fit every
    /// candidate value that will be stored under it.
    pub fn resolve_for<'v>(
        &mut self,
        type_name: &str,
        candidates: impl IntoIterator<Item = &'v ObjectValue>,
    ) -> Result<ResolvedType, GenError> {
        if let Some(resolved) = self.cache.get(type_name) {
            return Ok(*resolved);
        }

        let family = TypeFamily::classify(type_name).ok_or_else(|| GenError::UnresolvableType {
            type_name: type_name.to_string(),
        })?;
        let longest = candidates
            .into_iter()
            .filter_map(ObjectValue::byte_len)
            .max()
            .unwrap_or(0);

        let resolved = match family {
            TypeFamily::Unsigned(width) => ResolvedType {
                storage: StorageType::Unsigned(width),
                size: None,
                kind: SemanticKind::Unsigned(width),
                unsigned: true,
            },
            TypeFamily::Integer(width) => ResolvedType {
                storage: StorageType::Integer(width),
                size: None,
                kind: SemanticKind::Integer(width),
                unsigned: false,
            },
            TypeFamily::Real(width) => ResolvedType {
                storage: StorageType::Real(width),
                size: None,
                kind: SemanticKind::Real(width),
                unsigned: false,
            },
            TypeFamily::String(declared) => ResolvedType {
                storage: StorageType::Unsigned(8),
                size: Some(
                    self.default_string_size
                        .max(longest)
                        .max(declared.unwrap_or(0)),
                ),
                kind: SemanticKind::VisibleString,
                unsigned: false,
            },
            TypeFamily::Domain => ResolvedType {
                storage: StorageType::Unsigned(8),
                size: Some(longest),
                kind: SemanticKind::Domain,
                unsigned: false,
            },
            TypeFamily::Boolean => ResolvedType {
                storage: StorageType::Unsigned(8),
                size: None,
                kind: SemanticKind::Boolean,
                unsigned: false,
            },
        };

        // String and domain sizes depend on the call site's values.
        if !resolved.kind.is_byte_sequence() {
            self.cache.insert(type_name.to_string(), resolved);
        }
        Ok(resolved)
    }

    #[cfg(test)]
    fn is_cached(&self, type_name: &str) -> bool {
        self.cache.contains_key(type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RangeTypeId;

    #[test]
    fn test_integer_widths() {
        let mut resolver = TypeResolver::new(10);
        for width in INTEGER_WIDTHS {
            let uns = resolver.resolve(&format!("UNSIGNED{}", width)).unwrap();
            assert_eq!(uns.storage, StorageType::Unsigned(width));
            assert_eq!(uns.kind, SemanticKind::Unsigned(width));
            assert_eq!(uns.size, None);
            assert!(uns.unsigned);

            let int = resolver.resolve(&format!("INTEGER{}", width)).unwrap();
            assert_eq!(int.storage, StorageType::Integer(width));
            assert_eq!(int.kind, SemanticKind::Integer(width));
            assert_eq!(int.size, None);
            assert!(!int.unsigned);
        }
    }

    #[test]
    fn test_unsupported_widths_fail() {
        let mut resolver = TypeResolver::new(10);
        for name in ["UNSIGNED12", "INTEGER0", "INTEGER128", "UNSIGNED", "REAL16", "UNSIGNED72"] {
            let result = resolver.resolve(name);
            assert!(
                matches!(&result, Err(GenError::UnresolvableType { type_name }) if type_name == name),
                "{} should not resolve, got {:?}",
                name,
                result
            );
        }
    }

    #[test]
    fn test_unknown_names_fail() {
        let mut resolver = TypeResolver::new(10);
        assert!(resolver.resolve("UNICODE_STRING").is_err());
        assert!(resolver.resolve("unsigned8").is_err());
        assert!(resolver.resolve("").is_err());
        assert!(resolver.resolve("UNSIGNED8[0-100]").is_err());
    }

    #[test]
    fn test_reals_and_boolean() {
        let mut resolver = TypeResolver::new(10);
        let real = resolver.resolve("REAL64").unwrap();
        assert_eq!(real.storage, StorageType::Real(64));
        assert_eq!(real.kind, SemanticKind::Real(64));

        let boolean = resolver.resolve("BOOLEAN").unwrap();
        assert_eq!(boolean.storage, StorageType::Unsigned(8));
        assert_eq!(boolean.kind, SemanticKind::Boolean);
        assert_eq!(boolean.size, None);
    }

    #[test]
    fn test_string_sizing_uses_longest_value() {
        let mut resolver = TypeResolver::new(10);
        let short = ObjectValue::from("abc");
        let long = ObjectValue::from("abcdefghijkl");

        let resolved = resolver
            .resolve_for("VISIBLE_STRING", [&short, &long])
            .unwrap();
        assert_eq!(resolved.size, Some(12));
        assert_eq!(resolved.kind, SemanticKind::VisibleString);

        let resolved = resolver.resolve_for("VISIBLE_STRING", [&short]).unwrap();
        assert_eq!(resolved.size, Some(10));
    }

    #[test]
    fn test_string_declared_length() {
        let mut resolver = TypeResolver::new(10);
        let value = ObjectValue::from("abc");
        let resolved = resolver.resolve_for("VISIBLE_STRING20", [&value]).unwrap();
        assert_eq!(resolved.size, Some(20));
        let resolved = resolver.resolve_for("OCTET_STRING4", [&value]).unwrap();
        assert_eq!(resolved.size, Some(10));
    }

    #[test]
    fn test_domain_has_no_floor() {
        let mut resolver = TypeResolver::new(10);
        let value = ObjectValue::Domain(vec![1, 2, 3]);
        let resolved = resolver.resolve_for("DOMAIN", [&value]).unwrap();
        assert_eq!(resolved.size, Some(3));
        assert_eq!(resolver.resolve("DOMAIN").unwrap().size, Some(0));
    }

    #[test]
    fn test_only_fixed_kinds_are_cached() {
        let mut resolver = TypeResolver::new(10);
        let first = resolver.resolve("UNSIGNED16").unwrap();
        assert!(resolver.is_cached("UNSIGNED16"));
        assert_eq!(resolver.resolve("UNSIGNED16").unwrap(), first);

        let value = ObjectValue::from("a much longer string");
        resolver.resolve_for("VISIBLE_STRING", [&value]).unwrap();
        assert!(!resolver.is_cached("VISIBLE_STRING"));
        assert_eq!(resolver.resolve("VISIBLE_STRING").unwrap().size, Some(10));
    }

    #[test]
    fn test_registered_types_resolve() {
        let mut resolver = TypeResolver::new(10);
        let range = ResolvedType {
            storage: StorageType::Unsigned(8),
            size: None,
            kind: SemanticKind::ValueRange(RangeTypeId::Numbered(1)),
            unsigned: true,
        };
        resolver.register("UNSIGNED8[0-100]", range);
        assert_eq!(resolver.resolve("UNSIGNED8[0-100]").unwrap(), range);
    }
}
