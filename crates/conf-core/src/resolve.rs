//! Consistency resolver stage
//!
//! The algorithmic core. For every shared concept with at least one
//! explicitly-set participant, compares canonical values, classifies
//! agreement, and computes one authoritative value per the concept's merge
//! strategy. Concepts resolve in registry declaration order, which is what
//! makes report ordering reproducible.
//!
//! Only explicit values participate: a tool that never overrode a shared
//! setting is not in conflict, it just inherits the resolution.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use conf_meta::{CanonicalValue, ConceptBinding, MergeStrategy, ProfileRegistry, SharedConcept};

use crate::config::{CanonicalConfig, EntryValue, Origin};
use crate::error::Result;
use crate::finding::{Finding, ToolValue};

/// The authoritative value computed for one shared concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptResolution {
    pub concept: String,
    pub strategy: MergeStrategy,
    pub value: CanonicalValue,
}

type Explicit<'a> = (&'a ConceptBinding, CanonicalValue);

/// Resolve every shared concept and write inherited values back into the
/// canonical config.
///
/// Explicit disagreements keep their own entries (the resolution informs the
/// report, it does not silently overwrite them); the one exception is union
/// concepts, where every participant's effective set becomes the union.
pub fn resolve(
    config: &mut CanonicalConfig,
    registry: &ProfileRegistry,
) -> Result<(Vec<ConceptResolution>, Vec<Finding>)> {
    let mut resolutions = Vec::new();
    let mut findings = Vec::new();

    for concept in registry.concepts() {
        let explicit = collect_explicit(config, concept);
        let Some((_, first_value)) = explicit.first() else {
            continue;
        };

        let (resolved, concept_findings) = match concept.strategy {
            MergeStrategy::MustMatch => must_match(concept, &explicit, first_value)?,
            MergeStrategy::Union => union(concept, &explicit),
            MergeStrategy::MostPermissive => most_permissive(concept, &explicit, first_value),
            MergeStrategy::PrecedenceList => precedence_list(concept, &explicit)?,
        };

        tracing::debug!(concept = %concept.id, strategy = %concept.strategy, value = %resolved, "resolved concept");
        write_back(config, concept, &resolved);
        findings.extend(concept_findings);
        resolutions.push(ConceptResolution {
            concept: concept.id.clone(),
            strategy: concept.strategy,
            value: resolved,
        });
    }

    Ok((resolutions, findings))
}

/// Explicit canonical values of a concept's participants, in binding order.
fn collect_explicit<'a>(config: &CanonicalConfig, concept: &'a SharedConcept) -> Vec<Explicit<'a>> {
    let mut explicit = Vec::new();
    for binding in concept.bindings() {
        let Some(entry) = config
            .section(&binding.tool)
            .and_then(|s| s.entry(&binding.option))
        else {
            continue;
        };
        if entry.origin != Origin::Explicit {
            continue;
        }
        if let EntryValue::Canonical(value) = &entry.value {
            explicit.push((binding, value.clone()));
        }
    }
    explicit
}

/// First explicit value in the concept's precedence order.
fn precedence_winner<'a, 'b>(
    concept: &SharedConcept,
    explicit: &'a [Explicit<'b>],
) -> Result<&'a Explicit<'b>> {
    concept
        .precedence()
        .iter()
        .find_map(|tool| explicit.iter().find(|(b, _)| &b.tool == tool))
        .ok_or_else(|| {
            conf_meta::Error::MissingPrecedence {
                concept: concept.id.clone(),
            }
            .into()
        })
}

fn tool_values(explicit: &[Explicit<'_>]) -> Vec<ToolValue> {
    explicit
        .iter()
        .map(|(b, v)| ToolValue::new(&b.tool, &b.option, v))
        .collect()
}

fn must_match(
    concept: &SharedConcept,
    explicit: &[Explicit<'_>],
    first: &CanonicalValue,
) -> Result<(CanonicalValue, Vec<Finding>)> {
    if explicit.iter().all(|(_, v)| v == first) {
        return Ok((first.clone(), Vec::new()));
    }

    let (winner_binding, winner_value) = precedence_winner(concept, explicit)?;
    let winner = ToolValue::new(&winner_binding.tool, &winner_binding.option, winner_value);
    let finding = Finding::conflicting_value(&concept.id, tool_values(explicit), &winner);
    Ok((winner_value.clone(), vec![finding]))
}

fn union(concept: &SharedConcept, explicit: &[Explicit<'_>]) -> (CanonicalValue, Vec<Finding>) {
    let mut merged: BTreeSet<String> = BTreeSet::new();
    for (_, value) in explicit {
        if let CanonicalValue::StringSet(items) = value {
            merged.extend(items.iter().cloned());
        }
    }
    let resolved = CanonicalValue::StringSet(merged.clone());

    let mut findings = Vec::new();
    for (binding, value) in explicit {
        let Some(own) = value.as_set() else {
            continue;
        };
        let missing: Vec<String> = merged.difference(own).cloned().collect();
        if !missing.is_empty() {
            findings.push(Finding::partial_coverage(
                &concept.id,
                &binding.tool,
                &binding.option,
                &missing,
                &resolved,
            ));
        }
    }
    (resolved, findings)
}

fn most_permissive(
    concept: &SharedConcept,
    explicit: &[Explicit<'_>],
    first: &CanonicalValue,
) -> (CanonicalValue, Vec<Finding>) {
    let Some(max) = explicit.iter().filter_map(|(_, v)| v.as_integer()).max() else {
        // Registry validation restricts most-permissive bindings to integers.
        return (first.clone(), Vec::new());
    };
    let resolved = CanonicalValue::Integer(max);

    let divergent = explicit.iter().any(|(_, v)| v.as_integer() != Some(max));
    let findings = if divergent {
        vec![Finding::shadowed_value(
            &concept.id,
            tool_values(explicit),
            format!("loosest bound {} wins", max),
        )]
    } else {
        Vec::new()
    };
    (resolved, findings)
}

fn precedence_list(
    concept: &SharedConcept,
    explicit: &[Explicit<'_>],
) -> Result<(CanonicalValue, Vec<Finding>)> {
    let (winner_binding, winner_value) = precedence_winner(concept, explicit)?;

    let shadowed: Vec<ToolValue> = explicit
        .iter()
        .filter(|(b, v)| b.tool != winner_binding.tool && v != winner_value)
        .map(|(b, v)| ToolValue::new(&b.tool, &b.option, v))
        .collect();
    let findings = if shadowed.is_empty() {
        Vec::new()
    } else {
        vec![Finding::shadowed_value(
            &concept.id,
            shadowed,
            format!(
                "{} wins by precedence",
                ToolValue::new(&winner_binding.tool, &winner_binding.option, winner_value)
            ),
        )]
    };
    Ok((winner_value.clone(), findings))
}

/// Write the resolved value into every participating pair that did not
/// explicitly set it. Tools with no section in the document are not touched.
fn write_back(config: &mut CanonicalConfig, concept: &SharedConcept, resolved: &CanonicalValue) {
    for binding in concept.bindings() {
        let Some(section) = config.section_mut(&binding.tool) else {
            continue;
        };
        let exists = section.entry(&binding.option).is_some();
        if !exists {
            section.set(&binding.option, resolved.clone(), Origin::Inherited);
            continue;
        }
        if let Some(entry) = section.entry_mut(&binding.option) {
            match entry.origin {
                Origin::Explicit => {
                    if concept.strategy == MergeStrategy::Union
                        && entry.value.as_canonical() != Some(resolved)
                    {
                        entry.value = EntryValue::Canonical(resolved.clone());
                        entry.origin = Origin::Resolved;
                    }
                }
                Origin::Default => {
                    entry.value = EntryValue::Canonical(resolved.clone());
                    entry.origin = Origin::Inherited;
                }
                Origin::Inherited | Origin::Resolved => {}
            }
        }
    }
}
