//! Integration tests for the profile registry and built-in catalog

use conf_meta::{
    MergeStrategy, OptionSpec, OptionType, ProfileRegistry, SharedConcept, ToolKind, ToolProfile,
};
use pretty_assertions::assert_eq;

#[test]
fn test_builtins_cover_the_five_tool_roles() {
    let registry = ProfileRegistry::with_builtins();

    let kinds: Vec<_> = registry
        .list()
        .iter()
        .filter_map(|slug| registry.profile(slug))
        .map(|p| p.kind)
        .collect();

    assert!(kinds.contains(&ToolKind::Formatter));
    assert!(kinds.contains(&ToolKind::ImportSorter));
    assert!(kinds.contains(&ToolKind::Linter));
    assert!(kinds.contains(&ToolKind::TypeChecker));
    assert!(kinds.contains(&ToolKind::TestRunner));
}

#[test]
fn test_builtin_line_length_concept() {
    let registry = ProfileRegistry::with_builtins();

    let concept = registry.concept("line_length").expect("built-in concept");
    assert_eq!(concept.strategy, MergeStrategy::MustMatch);
    assert_eq!(concept.precedence()[0], "black");

    // Every binding resolves to a registered integer option.
    for binding in concept.bindings() {
        let spec = registry
            .profile(&binding.tool)
            .and_then(|p| p.option(&binding.option))
            .expect("binding must resolve");
        assert_eq!(spec.value_type, OptionType::Integer);
    }
}

#[test]
fn test_builtin_exclude_patterns_touch_every_tool() {
    let registry = ProfileRegistry::with_builtins();

    let concept = registry.concept("exclude_patterns").expect("built-in concept");
    let mut tools: Vec<_> = concept.bindings().iter().map(|b| b.tool.as_str()).collect();
    tools.sort();
    assert_eq!(tools, registry.list());
}

#[test]
fn test_fresh_registry_can_redefine_strategies() {
    // Strategy-per-concept is registry data, not engine behavior: the same
    // concept id can be registered with a different strategy.
    let mut registry = ProfileRegistry::new();
    registry.register_profile(
        ToolProfile::new("black", "Black", ToolKind::Formatter).with_option(
            OptionSpec::new("line-length", OptionType::Integer, 88).with_concept("line_length"),
        ),
    );
    registry.register_profile(
        ToolProfile::new("flake8", "Flake8", ToolKind::Linter).with_option(
            OptionSpec::new("max-line-length", OptionType::Integer, 79)
                .with_concept("line_length"),
        ),
    );
    registry.register_concept(
        SharedConcept::new("line_length", MergeStrategy::MostPermissive)
            .with_binding("black", "line-length")
            .with_binding("flake8", "max-line-length"),
    );

    assert!(registry.validate().is_ok());
    assert_eq!(
        registry.concept("line_length").map(|c| c.strategy),
        Some(MergeStrategy::MostPermissive)
    );
}

#[test]
fn test_unknown_tool_lookup() {
    let registry = ProfileRegistry::with_builtins();
    assert!(registry.profile("prettier").is_none());
    assert!(!registry.contains("prettier"));
}
