//! List rules command implementation.

use fsd_lint_core::RuleBox;
use fsd_lint_rules::{all_rules, minimal_rules, recommended_rules};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<22} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<22} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - {} (default)", codes(&recommended_rules()));
    println!("  minimal      - {} (for gradual adoption)", codes(&minimal_rules()));

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  fsd-lint check-edges --rules layer-imports,path-checker imports.jsonl");
    println!("  fsd-lint check-edges --rules FSD001,FSD003 imports.jsonl");
}

fn codes(rules: &[RuleBox]) -> String {
    rules.iter().map(|r| r.code()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_preset_codes() {
        assert_eq!(codes(&recommended_rules()), "FSD001, FSD002, FSD003");
        assert_eq!(codes(&minimal_rules()), "FSD001");
    }
}
