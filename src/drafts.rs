use crate::format::FormatProfile;
use crate::inherit::{prefer_own_value, InheritableProps, MergeFn};
use crate::matcher::{PropertyBag, PropertyMatcher};
use once_cell::sync::Lazy;

const DTCG_COMMON_PROP_NAMES: [&str; 4] = ["$type", "$description", "$extensions", "$deprecated"];

fn is_design_token_data(data: &PropertyBag) -> bool {
    data.contains_key("$value")
}

/// Profile for the latest draft of the DTCG spec.
///
/// All format properties are `$`-prefixed and already canonical, so no
/// normalisation step is needed. `$type` and `$deprecated` are inherited
/// from parent groups, preferring a node's own value.
///
/// See <https://tr.designtokens.org/format/>
pub static DTCG_LATEST_DRAFT: Lazy<FormatProfile> = Lazy::new(|| FormatProfile {
    root_group_props: None,
    group_props: DTCG_COMMON_PROP_NAMES
        .iter()
        .copied()
        .map(PropertyMatcher::from)
        .collect(),
    extraneous_group_props: None,
    design_token_props: DTCG_COMMON_PROP_NAMES
        .iter()
        .copied()
        .chain(["$value"])
        .map(PropertyMatcher::from)
        .collect(),
    inheritable_props: InheritableProps::from([
        ("$type".to_string(), prefer_own_value as MergeFn),
        ("$deprecated".to_string(), prefer_own_value as MergeFn),
    ]),
    is_design_token_data,
    normalise_group_props: None,
    normalise_design_token_props: None,
});

fn is_first_draft_token_data(data: &PropertyBag) -> bool {
    data.contains_key("value")
}

fn prefix_props(original_props: &PropertyBag, names: &[&str]) -> PropertyBag {
    let mut normalised = PropertyBag::new();
    for name in names {
        if let Some(value) = original_props.get(*name) {
            normalised.insert(format!("${name}"), value.clone());
        }
    }
    normalised
}

fn normalise_first_draft_token_props(original_props: &PropertyBag) -> PropertyBag {
    prefix_props(original_props, &["value", "description", "type", "extensions"])
}

fn normalise_first_draft_group_props(original_props: &PropertyBag) -> PropertyBag {
    prefix_props(original_props, &["description"])
}

/// Profile for the 1st editor's draft of the DTCG spec (from 2021).
///
/// Format properties like `value` and `description` are **not** `$`-prefixed
/// in this draft; the normalisation functions add the prefix so handlers
/// always see canonical names. Nothing is inheritable in this draft.
///
/// See <https://first-editors-draft.tr.designtokens.org/format/>
pub static DTCG_FIRST_DRAFT: Lazy<FormatProfile> = Lazy::new(|| FormatProfile {
    root_group_props: None,
    group_props: vec![PropertyMatcher::from("description")],
    extraneous_group_props: None,
    design_token_props: ["description", "value", "extensions", "type"]
        .iter()
        .copied()
        .map(PropertyMatcher::from)
        .collect(),
    inheritable_props: InheritableProps::new(),
    is_design_token_data: is_first_draft_token_data,
    normalise_group_props: Some(normalise_first_draft_group_props),
    normalise_design_token_props: Some(normalise_first_draft_token_props),
});
