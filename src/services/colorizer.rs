//! Category coloring for fastfetch modules.
//!
//! The module list is split into categories by separator modules
//! (objects with `"type": "custom"`). Each category takes one palette color,
//! cycling through the palette when there are more categories than colors,
//! and that color is written into the `keyColor` of every module in the
//! category that already declares one.
//!
//! Modules before the first separator never belong to a category.

use serde_json::Value;
use std::ops::Range;
use tracing::debug;

use crate::constants::{KEY_COLOR_FIELD, MODULE_TYPE_FIELD, SEPARATOR_TYPE};

/// Returns true if `module` is a category separator.
pub fn is_separator(module: &Value) -> bool {
    match module {
        Value::Object(map) => {
            matches!(map.get(MODULE_TYPE_FIELD), Some(Value::String(t)) if t == SEPARATOR_TYPE)
        }
        _ => false,
    }
}

/// Indices of separator modules, in order.
pub fn separator_indices(modules: &[Value]) -> Vec<usize> {
    modules
        .iter()
        .enumerate()
        .filter(|(_, module)| is_separator(module))
        .map(|(idx, _)| idx)
        .collect()
}

/// Index ranges of the categories in `modules`.
///
/// Without separators the whole list is one category. Otherwise each
/// separator opens a category that runs until the next separator or the end.
pub fn category_groups(modules: &[Value]) -> Vec<Range<usize>> {
    let separators = separator_indices(modules);
    if separators.is_empty() {
        return vec![0..modules.len()];
    }

    separators
        .iter()
        .enumerate()
        .map(|(i, &sep)| {
            let end = separators.get(i + 1).copied().unwrap_or(modules.len());
            sep + 1..end
        })
        .collect()
}

/// Writes one color per category into existing `keyColor` fields.
///
/// Does nothing when `colors` is empty. Never adds, removes or reorders
/// modules, and never adds a `keyColor` to a module that lacks one.
pub fn apply_category_colors(modules: &mut [Value], colors: &[String]) {
    if colors.is_empty() {
        return;
    }

    for (i, group) in category_groups(modules).into_iter().enumerate() {
        let color = &colors[i % colors.len()];
        debug!(category = i, start = group.start, end = group.end, %color, "Coloring category");

        for module in &mut modules[group] {
            if let Value::Object(map) = module {
                if let Some(key_color) = map.get_mut(KEY_COLOR_FIELD) {
                    *key_color = Value::String(color.clone());
                }
            }
        }
    }
}
