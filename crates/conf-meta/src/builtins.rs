//! Built-in tool catalog
//!
//! This module is the single source of truth for the tools and shared
//! concepts the engine knows out of the box: a formatter (black), an import
//! sorter (isort), a style linter (flake8), a static type checker (mypy),
//! and a test runner (pytest). Defaults mirror each tool's own documented
//! defaults.

use crate::schema::{MergeStrategy, OptionSpec, SharedConcept, ToolKind, ToolProfile};
use crate::value::{CanonicalValue, OptionType};

/// Number of built-in tool profiles.
pub const BUILTIN_COUNT: usize = 5;

/// Number of built-in shared concepts.
pub const BUILTIN_CONCEPT_COUNT: usize = 3;

fn empty_set() -> CanonicalValue {
    CanonicalValue::set(Vec::<String>::new())
}

fn empty_list() -> CanonicalValue {
    CanonicalValue::list(Vec::<String>::new())
}

/// Returns all built-in tool profiles.
pub fn builtin_profiles() -> Vec<ToolProfile> {
    vec![
        ToolProfile::new("black", "Black", ToolKind::Formatter)
            .with_option(
                OptionSpec::new("line-length", OptionType::Integer, 88)
                    .with_concept("line_length"),
            )
            .with_option(OptionSpec::new(
                "target-version",
                OptionType::StringList,
                empty_list(),
            ))
            .with_option(
                OptionSpec::new("extend-exclude", OptionType::StringSet, empty_set())
                    .with_concept("exclude_patterns"),
            )
            .with_option(OptionSpec::new(
                "skip-string-normalization",
                OptionType::Bool,
                false,
            ))
            .with_option(OptionSpec::new("preview", OptionType::Bool, false)),
        ToolProfile::new("isort", "isort", ToolKind::ImportSorter)
            .with_option(
                OptionSpec::new("line_length", OptionType::Integer, 79)
                    .with_concept("line_length"),
            )
            .with_option(OptionSpec::new("profile", OptionType::Str, ""))
            .with_option(
                OptionSpec::new("skip_glob", OptionType::StringSet, empty_set())
                    .with_concept("exclude_patterns"),
            )
            .with_option(
                OptionSpec::new("src_paths", OptionType::StringList, empty_list())
                    .with_concept("source_paths"),
            )
            .with_option(OptionSpec::new("force_single_line", OptionType::Bool, false)),
        ToolProfile::new("flake8", "Flake8", ToolKind::Linter)
            .with_option(
                OptionSpec::new("max-line-length", OptionType::Integer, 79)
                    .with_concept("line_length"),
            )
            .with_option(OptionSpec::new("max-complexity", OptionType::Integer, 10))
            .with_option(
                OptionSpec::new("exclude", OptionType::StringSet, empty_set())
                    .with_concept("exclude_patterns"),
            )
            .with_option(OptionSpec::new(
                "extend-ignore",
                OptionType::StringList,
                empty_list(),
            ))
            .with_option(OptionSpec::new("doctests", OptionType::Bool, false)),
        ToolProfile::new("mypy", "Mypy", ToolKind::TypeChecker)
            .with_option(OptionSpec::new("python_version", OptionType::Str, "3.12"))
            .with_option(OptionSpec::new("strict", OptionType::Bool, false))
            .with_option(
                OptionSpec::new("exclude", OptionType::StringSet, empty_set())
                    .with_concept("exclude_patterns"),
            )
            .with_option(OptionSpec::new(
                "ignore_missing_imports",
                OptionType::Bool,
                false,
            ))
            .with_option(OptionSpec::new("warn_unused_ignores", OptionType::Bool, false)),
        ToolProfile::new("pytest", "pytest", ToolKind::TestRunner)
            .with_option(
                OptionSpec::new("testpaths", OptionType::StringList, empty_list())
                    .with_concept("source_paths"),
            )
            .with_option(
                OptionSpec::new("norecursedirs", OptionType::StringSet, empty_set())
                    .with_concept("exclude_patterns"),
            )
            .with_option(OptionSpec::new("addopts", OptionType::Str, ""))
            .with_option(OptionSpec::new("minversion", OptionType::Str, ""))
            .with_option(OptionSpec::new("log_cli", OptionType::Bool, false)),
    ]
}

/// Returns all built-in shared concepts, in resolution order.
///
/// Strategy assignments are catalog data: a registry built from scratch is
/// free to assign different strategies to the same concepts.
pub fn builtin_concepts() -> Vec<SharedConcept> {
    vec![
        // The formatter owns line length; everyone else must agree with it.
        SharedConcept::new("line_length", MergeStrategy::MustMatch)
            .with_binding("black", "line-length")
            .with_binding("isort", "line_length")
            .with_binding("flake8", "max-line-length")
            .with_precedence(["black", "isort", "flake8"]),
        // Every tool should skip at least what any other tool skips.
        SharedConcept::new("exclude_patterns", MergeStrategy::Union)
            .with_binding("black", "extend-exclude")
            .with_binding("isort", "skip_glob")
            .with_binding("flake8", "exclude")
            .with_binding("mypy", "exclude")
            .with_binding("pytest", "norecursedirs"),
        // The test runner's layout wins; the import sorter follows it.
        SharedConcept::new("source_paths", MergeStrategy::PrecedenceList)
            .with_binding("pytest", "testpaths")
            .with_binding("isort", "src_paths")
            .with_precedence(["pytest", "isort"]),
    ]
}
