//! Profile registry
//!
//! The registry is immutable data assembled at process start: known tool
//! profiles plus the shared concepts that tie their options together.
//! Concepts are kept in declaration order, which fixes resolution order and
//! therefore report ordering downstream.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::schema::{MergeStrategy, SharedConcept, ToolProfile};
use crate::value::OptionType;

/// Static catalog of known tools and shared concepts.
///
/// Adding a new tool means registering a profile, not changing logic.
/// Tests construct fresh registries per case for isolation.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: HashMap<String, ToolProfile>,
    concepts: Vec<SharedConcept>,
}

impl ProfileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in tool catalog.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for profile in crate::builtins::builtin_profiles() {
            registry.register_profile(profile);
        }
        for concept in crate::builtins::builtin_concepts() {
            registry.register_concept(concept);
        }
        registry
    }

    /// Register a tool profile. Replaces any profile with the same slug.
    pub fn register_profile(&mut self, profile: ToolProfile) {
        self.profiles.insert(profile.slug.clone(), profile);
    }

    /// Register a shared concept. Concepts resolve in registration order.
    pub fn register_concept(&mut self, concept: SharedConcept) {
        self.concepts.push(concept);
    }

    /// Look up a profile by slug.
    pub fn profile(&self, slug: &str) -> Option<&ToolProfile> {
        self.profiles.get(slug)
    }

    /// Check if a tool is registered.
    pub fn contains(&self, slug: &str) -> bool {
        self.profiles.contains_key(slug)
    }

    /// All registered concepts, in declaration order.
    pub fn concepts(&self) -> &[SharedConcept] {
        &self.concepts
    }

    /// Look up a concept by id.
    pub fn concept(&self, id: &str) -> Option<&SharedConcept> {
        self.concepts.iter().find(|c| c.id == id)
    }

    /// All registered tool slugs (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut slugs: Vec<_> = self.profiles.keys().map(String::as_str).collect();
        slugs.sort();
        slugs
    }

    /// Number of registered profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if the registry has no profiles.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Check the registry for internal defects.
    ///
    /// A registry that passes validation guarantees the resolver can always
    /// compute a resolution: every concept binding points at a registered
    /// profile option of a compatible type, and every strategy that needs a
    /// precedence order has one covering all participating tools.
    pub fn validate(&self) -> Result<()> {
        for profile in self.profiles.values() {
            for spec in profile.options() {
                if !spec.default_matches_type() {
                    return Err(Error::DefaultTypeMismatch {
                        tool: profile.slug.clone(),
                        option: spec.name.clone(),
                        expected: spec.value_type,
                        actual: spec.default.value_type(),
                    });
                }
            }
        }

        for concept in &self.concepts {
            if self.concepts.iter().filter(|c| c.id == concept.id).count() > 1 {
                return Err(Error::invalid_binding(
                    &concept.id,
                    "duplicate concept id",
                ));
            }

            for binding in concept.bindings() {
                let profile = self.profiles.get(&binding.tool).ok_or_else(|| {
                    Error::invalid_binding(
                        &concept.id,
                        format!("unknown tool '{}'", binding.tool),
                    )
                })?;
                let spec = profile.option(&binding.option).ok_or_else(|| {
                    Error::invalid_binding(
                        &concept.id,
                        format!("unknown option '{}.{}'", binding.tool, binding.option),
                    )
                })?;
                if spec.concept.as_deref() != Some(concept.id.as_str()) {
                    return Err(Error::invalid_binding(
                        &concept.id,
                        format!("option '{}' is not tagged with this concept", binding),
                    ));
                }
                match concept.strategy {
                    MergeStrategy::Union if spec.value_type != OptionType::StringSet => {
                        return Err(Error::invalid_binding(
                            &concept.id,
                            format!("union concepts need string-set options, '{}' is {}", binding, spec.value_type),
                        ));
                    }
                    MergeStrategy::MostPermissive if spec.value_type != OptionType::Integer => {
                        return Err(Error::invalid_binding(
                            &concept.id,
                            format!("most-permissive concepts need integer options, '{}' is {}", binding, spec.value_type),
                        ));
                    }
                    _ => {}
                }
            }

            if concept.strategy.requires_precedence() {
                if concept.precedence().is_empty() {
                    return Err(Error::MissingPrecedence {
                        concept: concept.id.clone(),
                    });
                }
                for binding in concept.bindings() {
                    if concept.precedence_rank(&binding.tool).is_none() {
                        return Err(Error::invalid_binding(
                            &concept.id,
                            format!("precedence order does not cover tool '{}'", binding.tool),
                        ));
                    }
                }
                for tool in concept.precedence() {
                    if concept.binding_for(tool).is_none() {
                        return Err(Error::invalid_binding(
                            &concept.id,
                            format!("precedence names non-participating tool '{}'", tool),
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
