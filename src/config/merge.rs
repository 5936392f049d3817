//! Deep merge of an override mapping into a base catalog.
//!
//! - Mappings: merged key by key, recursively
//! - Sequences: replaced wholesale, never merged element-wise
//! - Scalars and null: the override wins

use super::Mapping;
use serde_json::map::Entry;
use serde_json::Value;

/// Merge `overlay` into `base` and return the result.
///
/// Both inputs are consumed; callers keep their own copies when they need the
/// originals. Keys only present in `base` are kept as-is. Existing keys keep
/// their position; new keys are appended in override order.
pub fn merge(base: Mapping, overlay: Mapping) -> Mapping {
    let mut base = base;
    for (key, overlay_value) in overlay {
        match base.entry(key) {
            Entry::Occupied(mut slot) => {
                let base_value = std::mem::take(slot.get_mut());
                *slot.get_mut() = merge_value(base_value, overlay_value);
            }
            Entry::Vacant(slot) => {
                slot.insert(overlay_value);
            }
        }
    }
    base
}

/// Merge two values: recurse only when both sides are mappings.
pub fn merge_value(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            Value::Object(merge(base_map, overlay_map))
        }
        (_, overlay) => overlay,
    }
}
