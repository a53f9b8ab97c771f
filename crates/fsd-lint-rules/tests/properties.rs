//! Property-based tests for the import rules.
//!
//! These tests use proptest to verify invariants around:
//! - Relative specifiers never being policed
//! - Alias stripping being transparent to classification
//! - Relative fixes pointing at the same module and being accepted
//! - Files outside the source root never producing violations

use fsd_lint_core::{ImportContext, ImportTarget, Layer, PatternList, RuleConfig};
use fsd_lint_rules::{all_rules, ImportRule, PathChecker};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_layer() -> impl Strategy<Value = Layer> {
    prop::sample::select(Layer::ALL.to_vec())
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,11}")
        .unwrap()
        .prop_filter("must not be the root marker", |s| s != "src")
}

fn arb_segments(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_name(), 0..=max)
}

/// A file path under `src/<layer>/<slice>/...`, in either separator style.
fn arb_source_file() -> impl Strategy<Value = (Layer, String, Vec<String>, String)> {
    (arb_layer(), arb_name(), arb_segments(3), any::<bool>()).prop_map(
        |(layer, slice, rest, windows)| {
            let mut parts = vec!["project".to_string(), "src".to_string()];
            parts.push(layer.to_string());
            parts.push(slice.clone());
            parts.extend(rest.iter().cloned());
            parts.push("File.tsx".to_string());
            let file = if windows {
                format!("C:\\{}", parts.join("\\"))
            } else {
                format!("/{}", parts.join("/"))
            };
            (layer, slice, rest, file)
        },
    )
}

fn arb_relative_specifier() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        arb_segments(4).prop_map(|s| format!("./{}", s.join("/"))),
        (1usize..4, arb_segments(4))
            .prop_map(|(up, s)| format!("{}{}", "../".repeat(up), s.join("/"))),
    ]
}

fn arb_absolute_specifier() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(String::new()), Just("@/".to_string())],
        arb_layer(),
        arb_name(),
        arb_segments(3),
    )
        .prop_map(|(prefix, layer, slice, rest)| {
            let mut parts = vec![layer.to_string(), slice];
            parts.extend(rest);
            format!("{prefix}{}", parts.join("/"))
        })
}

fn full_config() -> RuleConfig {
    RuleConfig::new()
        .with_alias("@")
        .with_ignore_import_patterns(PatternList::new(["**/StoreProvider"]).unwrap())
        .with_test_files_patterns(PatternList::new(["**/*.test.ts"]).unwrap())
}

/// Lexically resolves a relative specifier against a directory.
fn resolve(dir: &[String], specifier: &str) -> Vec<String> {
    let mut out: Vec<String> = dir.to_vec();
    for part in specifier.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                out.pop();
            }
            other => out.push(other.to_string()),
        }
    }
    out
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Relative specifiers are allowed by every rule, whatever the config.
    #[test]
    fn relative_imports_are_always_allowed(
        (_, _, _, file) in arb_source_file(),
        specifier in arb_relative_specifier(),
        aliased in any::<bool>(),
    ) {
        let config = if aliased { full_config() } else { RuleConfig::new() };
        let ctx = ImportContext::new(&file, &specifier);
        for rule in all_rules() {
            prop_assert!(
                rule.check(&ctx, &config).is_allow(),
                "{} flagged '{}' from '{}'",
                rule.name(),
                specifier,
                file
            );
        }
    }

    /// Aliased and bare specifiers classify identically.
    #[test]
    fn alias_is_transparent(layer in arb_layer(), slice in arb_name(), rest in arb_segments(3)) {
        let mut parts = vec![layer.to_string(), slice];
        parts.extend(rest);
        let bare = parts.join("/");

        let aliased = ImportTarget::classify(&format!("@/{bare}"), "@");
        let plain = ImportTarget::classify(&bare, "");
        prop_assert_eq!(aliased, plain);
    }

    /// A relative fix resolves to the original target and is accepted.
    #[test]
    fn relative_fix_is_idempotent(
        (layer, slice, dir, file) in arb_source_file(),
        target_rest in arb_segments(4),
    ) {
        let mut target = vec![layer.to_string(), slice.clone()];
        target.extend(target_rest);
        let specifier = format!("@/{}", target.join("/"));

        let config = RuleConfig::new().with_alias("@");
        let decision = PathChecker::new().check(&ImportContext::new(&file, &specifier), &config);
        let fix = decision.fix().map(str::to_string);
        prop_assert!(fix.is_some(), "no fix for '{}' from '{}'", specifier, file);
        let fix = fix.unwrap_or_default();

        prop_assert!(fix.starts_with('.'));
        prop_assert!(!fix.contains('\\'));

        let mut file_dir = vec![layer.to_string(), slice];
        file_dir.extend(dir);
        prop_assert_eq!(resolve(&file_dir, &fix), target);

        let again = PathChecker::new().check(&ImportContext::new(&file, &fix), &config);
        prop_assert!(again.is_allow());
    }

    /// Files outside the source root are never flagged.
    #[test]
    fn out_of_tree_files_are_never_flagged(
        dirs in arb_segments(4),
        specifier in prop_oneof![arb_absolute_specifier(), arb_relative_specifier()],
    ) {
        let file = format!("cypress/{}/Login.cy.tsx", dirs.join("/"));
        let ctx = ImportContext::new(&file, &specifier);
        for rule in all_rules() {
            prop_assert!(
                rule.check(&ctx, &full_config()).is_allow(),
                "{} flagged '{}' from '{}'",
                rule.name(),
                specifier,
                file
            );
        }
    }
}
