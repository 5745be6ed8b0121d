use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::{
    config::ShimConfig,
    types::{Declaration, DeclarationKind, MarshalCategory, ReturnClass},
};

lazy_static! {
    static ref PROMISE: Regex = Regex::new(r"^Promise<(.+)>$").unwrap();
}

/// Maps type names to marshal categories. Filled during the pre-pass and
/// only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypeRegistry {
    categories: BTreeMap<String, MarshalCategory>,
}

impl TypeRegistry {
    pub fn with_builtins(config: &ShimConfig) -> Self {
        let mut registry = TypeRegistry::default();
        for (type_name, category) in config.builtin_categories() {
            registry.categories.insert(type_name, category);
        }
        registry
    }

    /// Runs after the builtin seeds, so a class named like a builtin
    /// replaces the seed.
    pub fn register_class(&mut self, name: &str) {
        if let Some(previous) = self.categories.insert(name.to_string(), MarshalCategory::Object) {
            if previous != MarshalCategory::Object {
                log::warn!(
                    "class {} shadows builtin category {}",
                    name,
                    previous.tag()
                );
            }
        }
    }

    pub fn lookup(&self, type_name: &str) -> Option<MarshalCategory> {
        self.categories.get(type_name).copied()
    }

    /// Registry lookup with an explicit `Value` default. `T[]` is an
    /// object array when `T` is an object and `T[]` has no entry of its own.
    pub fn category_of(&self, type_name: &str) -> MarshalCategory {
        if let Some(category) = self.lookup(type_name) {
            return category;
        }
        if let Some(element) = type_name.strip_suffix("[]") {
            if self.lookup(element) == Some(MarshalCategory::Object) {
                return MarshalCategory::ObjectArray;
            }
        }
        MarshalCategory::Value
    }

    /// Classifies by the promised type, but always declares a promise.
    pub fn classify_return(&self, return_type: &str) -> ReturnClass {
        let inner = match PROMISE.captures(return_type) {
            Some(caps) => caps.get(1).map_or(return_type, |m| m.as_str()),
            None       => return_type,
        };
        ReturnClass {
            declared: format!("Promise<{}>", inner),
            category: self.category_of(inner),
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, MarshalCategory)> {
        self.categories.iter().map(|(name, category)| (name.as_str(), *category))
    }
}

/// Pre-pass: seeds the builtins and registers every class header in
/// `declarations`, wherever it appears.
pub fn scan_classes(declarations: &[Declaration], config: &ShimConfig) -> TypeRegistry {
    let mut registry = TypeRegistry::with_builtins(config);
    for declaration in declarations {
        if let DeclarationKind::ClassHeader { name } = &declaration.kind {
            log::trace!("line {}: registering class {}", declaration.line, name);
            registry.register_class(name);
        }
    }
    registry
}
