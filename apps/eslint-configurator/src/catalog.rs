//! Built-in catalog of selectable ESLint rules.

use crate::models::RuleDescriptor;

const fn rule(
    name: &'static str,
    category: &'static str,
    description: &'static str,
) -> RuleDescriptor {
    RuleDescriptor {
        name,
        category,
        description,
    }
}

/// Rules offered by the selection prompt, in prompt order.
pub const RULES: &[RuleDescriptor] = &[
    rule("no-console", "Best Practices", "Disallow console statements"),
    rule("eqeqeq", "Best Practices", "Require strict equality operators"),
    rule("no-unused-vars", "Variables", "Disallow unused variables"),
    rule("indent", "Stylistic Issues", "Enforce consistent indentation"),
    rule(
        "@typescript-eslint/no-explicit-any",
        "TypeScript",
        "Disallow usage of the `any` type",
    ),
    rule("no-debugger", "Best Practices", "Disallow the use of debugger"),
    rule("no-empty", "Stylistic Issues", "Disallow empty block statements"),
    rule("no-eval", "Best Practices", "Disallow the use of eval()"),
    rule(
        "prefer-const",
        "Best Practices",
        "Require `const` declarations for variables that are never reassigned",
    ),
    rule(
        "no-var",
        "Best Practices",
        "Disallow the use of `var` to declare variables",
    ),
    rule(
        "object-shorthand",
        "Stylistic Issues",
        "Enforce the use of object shorthand notation",
    ),
    rule(
        "arrow-body-style",
        "Stylistic Issues",
        "Enforce the use of arrow functions with a concise body",
    ),
    rule("no-undef", "Variables", "Disallow the use of undeclared variables"),
    rule(
        "prefer-template",
        "Best Practices",
        "Enforce the use of template literals over string concatenation",
    ),
    rule(
        "no-magic-numbers",
        "Best Practices",
        "Disallow magic numbers (i.e., literal numbers with no explanation)",
    ),
    rule(
        "react/react-in-jsx-scope",
        "React",
        "Forces the React import in the current scope.",
    ),
];

pub fn rules() -> &'static [RuleDescriptor] {
    RULES
}

/// Label shown for a rule in the multi-select prompt.
pub fn choice_label(rule: &RuleDescriptor) -> String {
    format!("{} - {} [{}]", rule.name, rule.description, rule.category)
}
