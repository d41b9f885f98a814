use crate::matcher::PropertyBag;
use serde_json::Value;
use std::collections::BTreeMap;

/// A function that produces a property value to be passed down from a group
/// to its child groups and/or design tokens.
///
/// Receives the node's own value for the property and the value inherited
/// from the parent group; either may be absent. Returning `None` omits the
/// property from the result entirely.
pub type MergeFn = fn(own_value: Option<&Value>, inherited_value: Option<&Value>) -> Option<Value>;

/// A mapping of inheritable property names to the functions that compute
/// their values for child groups and design tokens.
pub type InheritableProps = BTreeMap<String, MergeFn>;

/// Returns the node's own value, if present, or the inherited value
/// otherwise.
///
/// This is the merge policy used by the built-in profiles for DTCG props
/// like `$type` and `$deprecated`, where a group or design token without
/// its own value falls back to the nearest ancestor's.
#[must_use]
pub fn prefer_own_value(own_value: Option<&Value>, inherited_value: Option<&Value>) -> Option<Value> {
    own_value.or(inherited_value).cloned()
}

/// Combines a node's own inheritable properties with the values inherited
/// from its parent group.
///
/// Every property named in `inheritable_props` has its merge function
/// called, even when neither operand is present; properties not named there
/// are never inherited and never appear in the result. A merge function
/// returning `None` suppresses the key.
#[must_use]
pub fn combine_with_inherited_props(
    own_props: &PropertyBag,
    inherited_props: &PropertyBag,
    inheritable_props: &InheritableProps,
) -> PropertyBag {
    let mut combined = PropertyBag::new();
    for (name, merge) in inheritable_props {
        if let Some(value) = merge(own_props.get(name), inherited_props.get(name)) {
            combined.insert(name.clone(), value);
        }
    }
    combined
}
