//! Normalizer stage
//!
//! Converts raw option values into canonical semantic values using the
//! registry's type information. Coercion is pure: the same raw value and
//! spec always yield the same canonical value, which is what makes bundles
//! reproducible.

use conf_content::RawValue;
use conf_meta::{CanonicalValue, OptionType, ProfileRegistry};

use crate::config::{
    CanonicalConfig, CanonicalSection, ConfigEntry, EntryValue, Origin, RawConfig,
};
use crate::finding::Finding;

/// Coerce one raw value to a semantic type. `None` means type mismatch.
///
/// Comma-separated strings are accepted for set/list options because the
/// modeled tools accept that form in their own config files.
pub fn coerce(raw: &RawValue, value_type: OptionType) -> Option<CanonicalValue> {
    match value_type {
        OptionType::Bool => match raw {
            RawValue::Bool(b) => Some(CanonicalValue::Bool(*b)),
            RawValue::Str(s) if s.trim().eq_ignore_ascii_case("true") => {
                Some(CanonicalValue::Bool(true))
            }
            RawValue::Str(s) if s.trim().eq_ignore_ascii_case("false") => {
                Some(CanonicalValue::Bool(false))
            }
            _ => None,
        },
        OptionType::Integer => match raw {
            RawValue::Integer(i) => Some(CanonicalValue::Integer(*i)),
            RawValue::Str(s) => s.trim().parse::<i64>().ok().map(CanonicalValue::Integer),
            _ => None,
        },
        OptionType::Str => match raw {
            RawValue::List(_) => None,
            scalar => Some(CanonicalValue::Str(scalar.to_string())),
        },
        OptionType::StringSet => {
            strings(raw).map(|items| CanonicalValue::StringSet(items.into_iter().collect()))
        }
        OptionType::StringList => strings(raw).map(CanonicalValue::StringList),
    }
}

/// Extract string items from a list of scalars or a comma-separated string.
fn strings(raw: &RawValue) -> Option<Vec<String>> {
    match raw {
        RawValue::Str(s) => Some(
            s.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(String::from)
                .collect(),
        ),
        RawValue::List(items) => items
            .iter()
            .map(|item| item.is_scalar().then(|| item.to_string()))
            .collect(),
        _ => None,
    }
}

/// Normalize a whole [`RawConfig`] against the registry.
///
/// Unknown tools and options are warned about and carried through untyped;
/// type mismatches substitute the option's default and the run continues.
pub fn normalize(raw: &RawConfig, registry: &ProfileRegistry) -> (CanonicalConfig, Vec<Finding>) {
    let mut config = CanonicalConfig::default();
    let mut findings = Vec::new();

    for raw_section in raw.sections() {
        let Some(profile) = registry.profile(&raw_section.tool) else {
            tracing::debug!(tool = %raw_section.tool, "unknown tool, carrying through");
            findings.push(Finding::unknown_tool(&raw_section.tool));
            let mut section = CanonicalSection::new(&raw_section.tool, false);
            for (option, value) in &raw_section.options {
                section.push(ConfigEntry {
                    option: option.clone(),
                    value: EntryValue::Untyped(value.clone()),
                    origin: Origin::Explicit,
                });
            }
            config.push_section(section);
            continue;
        };

        let mut section = CanonicalSection::new(&raw_section.tool, true);
        for (option, value) in &raw_section.options {
            match profile.option(option) {
                None => {
                    findings.push(Finding::unknown_option(&raw_section.tool, option));
                    section.push(ConfigEntry {
                        option: option.clone(),
                        value: EntryValue::Untyped(value.clone()),
                        origin: Origin::Explicit,
                    });
                }
                Some(spec) => match coerce(value, spec.value_type) {
                    Some(canonical) => section.push(ConfigEntry {
                        option: option.clone(),
                        value: EntryValue::Canonical(canonical),
                        origin: Origin::Explicit,
                    }),
                    None => {
                        findings.push(Finding::type_mismatch(
                            &raw_section.tool,
                            option,
                            spec.value_type,
                            value,
                            &spec.default,
                        ));
                        section.push(ConfigEntry {
                            option: option.clone(),
                            value: EntryValue::Canonical(spec.default.clone()),
                            origin: Origin::Default,
                        });
                    }
                },
            }
        }
        config.push_section(section);
    }

    tracing::debug!(sections = config.sections().len(), findings = findings.len(), "normalized");
    (config, findings)
}
