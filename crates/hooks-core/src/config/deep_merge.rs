//! Structural merge of configuration trees

use super::value::{ConfigTree, ConfigValue};

/// Merge `overlay` on top of `base`, returning a new tree.
///
/// For every key in `overlay`:
/// - a mapping is merged recursively with `base`'s value at that key; an
///   absent or non-mapping base value counts as an empty mapping
/// - a scalar (including `null`) or sequence replaces `base`'s value
///   wholesale; sequences are never concatenated
///
/// Keys only present in `base` are carried through. Neither input is
/// modified.
pub fn merge(base: &ConfigTree, overlay: &ConfigTree) -> ConfigTree {
    let mut result = base.clone();

    for (key, overlay_value) in overlay.iter() {
        let merged = match overlay_value {
            ConfigValue::Mapping(overlay_map) => {
                let merged_map = match base.get(key) {
                    Some(ConfigValue::Mapping(base_map)) => merge(base_map, overlay_map),
                    _ => merge(&ConfigTree::new(), overlay_map),
                };
                ConfigValue::Mapping(merged_map)
            }
            ConfigValue::Scalar(_) | ConfigValue::Sequence(_) => overlay_value.clone(),
        };
        result.insert(key.clone(), merged);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> ConfigTree {
        ConfigTree::from_json(value).unwrap()
    }

    #[test]
    fn overlay_scalars_win() {
        let base = tree(json!({ "a": 1, "b": "keep" }));
        let overlay = tree(json!({ "a": 2 }));

        assert_eq!(merge(&base, &overlay), tree(json!({ "a": 2, "b": "keep" })));
    }

    #[test]
    fn nested_mappings_accumulate() {
        let base = tree(json!({ "b": { "x": 10, "y": 20 } }));
        let overlay = tree(json!({ "b": { "y": 25, "z": 30 }, "c": 3 }));

        assert_eq!(
            merge(&base, &overlay),
            tree(json!({ "b": { "x": 10, "y": 25, "z": 30 }, "c": 3 }))
        );
    }

    #[test]
    fn sequences_are_replaced_not_concatenated() {
        let base = tree(json!({ "list": [1, 2, 3] }));
        let overlay = tree(json!({ "list": [4] }));

        assert_eq!(merge(&base, &overlay), tree(json!({ "list": [4] })));
    }

    #[test]
    fn null_overrides_like_any_scalar() {
        let base = tree(json!({ "quality": { "minQualityScore": "B" } }));
        let overlay = tree(json!({ "quality": null }));

        assert_eq!(merge(&base, &overlay), tree(json!({ "quality": null })));
    }

    #[test]
    fn mapping_over_scalar_starts_from_empty() {
        let base = tree(json!({ "hooks": true }));
        let overlay = tree(json!({ "hooks": { "contextLoader": false } }));

        assert_eq!(
            merge(&base, &overlay),
            tree(json!({ "hooks": { "contextLoader": false } }))
        );
    }

    #[test]
    fn mapping_over_sequence_starts_from_empty() {
        let base = tree(json!({ "hooks": [1, 2] }));
        let overlay = tree(json!({ "hooks": { "a": 1 } }));

        assert_eq!(merge(&base, &overlay), tree(json!({ "hooks": { "a": 1 } })));
    }

    #[test]
    fn inputs_are_left_untouched() {
        let base = tree(json!({ "a": { "x": 1 } }));
        let overlay = tree(json!({ "a": { "y": 2 } }));
        let base_before = base.clone();
        let overlay_before = overlay.clone();

        let first = merge(&base, &overlay);
        let second = merge(&base, &overlay);

        assert_eq!(base, base_before);
        assert_eq!(overlay, overlay_before);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_overlay_returns_base() {
        let base = tree(json!({ "a": { "x": 1 } }));
        assert_eq!(merge(&base, &ConfigTree::new()), base);
    }
}
