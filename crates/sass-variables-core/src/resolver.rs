//! Turns a declaration value into a [`ResolvedValue`].
//!
//! ```text
//! "10px"             → Scalar("10px")
//! "(1, 2, 3)"        → List(["1", "2", "3"])
//! "((1,2),(3,4))"    → NestedList([List(["1","2"]), List(["3","4"])])
//! ```
//!
//! Only the first top-level group decides the shape. If it contains
//! parenthesized sub-groups, every sub-group is resolved on its own;
//! otherwise its contents are split on commas. Values such as
//! `rgba(0, 0, 0, .5)` therefore come out as lists too.

use crate::matcher::Delimiters;
use crate::variables::ResolvedValue;

/// Resolves a value, recursing through nested parenthesized lists.
pub fn resolve(value: &str) -> ResolvedValue {
    resolve_with(&Delimiters::parens(), value)
}

fn resolve_with(parens: &Delimiters, value: &str) -> ResolvedValue {
    let Some(group) = parens.find(value).into_iter().next() else {
        return ResolvedValue::Scalar(value.to_string());
    };

    let sub_groups = parens.find(&group);
    if sub_groups.is_empty() {
        return ResolvedValue::List(
            group.split(',').map(|item| item.trim().to_string()).collect(),
        );
    }

    ResolvedValue::NestedList(
        sub_groups
            .iter()
            .map(|sub_group| resolve_with(parens, &format!("({sub_group})")))
            .collect(),
    )
}
