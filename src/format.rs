use crate::inherit::InheritableProps;
use crate::matcher::{PropertyBag, PropertyMatcher};

/// Decides whether a raw property bag holds a design token rather than a
/// group.
pub type IsDesignTokenDataFn = fn(data: &PropertyBag) -> bool;

/// Maps an extracted property bag to its canonical, `$`-prefixed equivalent.
///
/// Useful for older DTCG draft versions whose property names differ from the
/// latest draft. Properties absent from the input must be left out of the
/// output, never inserted as nulls.
pub type NormalisePropsFn = fn(original_props: &PropertyBag) -> PropertyBag;

/// A declarative description of one DTCG draft version: which property names
/// belong to groups and design tokens, how to tell the two apart, which
/// properties are inherited and how, and how to normalise names to the
/// canonical `$`-prefixed shape.
///
/// Profiles are read-only; one profile can be shared across any number of
/// parse invocations, including concurrent ones. See
/// [`drafts`](crate::drafts) for the built-in instances.
#[derive(Debug, Clone)]
pub struct FormatProfile {
    /// Extra properties extracted only on the root group (empty path).
    pub root_group_props: Option<Vec<PropertyMatcher>>,
    /// Names of a group's own metadata properties.
    pub group_props: Vec<PropertyMatcher>,
    /// Group-level properties that are neither metadata nor child nodes.
    /// They are reported as extraneous, never normalised.
    pub extraneous_group_props: Option<Vec<PropertyMatcher>>,
    /// Names of a design token's own metadata and value properties.
    pub design_token_props: Vec<PropertyMatcher>,
    /// Which canonical properties flow down to children, and how own and
    /// inherited values are merged.
    pub inheritable_props: InheritableProps,
    /// Classifier separating design tokens from groups.
    pub is_design_token_data: IsDesignTokenDataFn,
    /// Normalisation of extracted group props; `None` means the extracted
    /// bag is already canonical.
    pub normalise_group_props: Option<NormalisePropsFn>,
    /// Normalisation of extracted design token props; `None` means the
    /// extracted bag is already canonical.
    pub normalise_design_token_props: Option<NormalisePropsFn>,
}

impl FormatProfile {
    /// The matcher list for a group's own properties at the given path.
    /// Root-only properties participate only when the path is empty.
    pub(crate) fn group_props_to_extract(&self, path: &[String]) -> Vec<PropertyMatcher> {
        let mut matchers = self.group_props.clone();
        if path.is_empty() {
            if let Some(root_props) = &self.root_group_props {
                matchers.extend(root_props.iter().cloned());
            }
        }
        matchers
    }

    /// The matcher list the traversal engine uses to tell a group's own
    /// properties apart from its child-node slots.
    pub(crate) fn child_slot_matchers(&self, path: &[String]) -> Vec<PropertyMatcher> {
        let mut matchers = self.group_props_to_extract(path);
        if let Some(extraneous) = &self.extraneous_group_props {
            matchers.extend(extraneous.iter().cloned());
        }
        matchers
    }
}
