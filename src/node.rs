use crate::format::FormatProfile;
use crate::inherit::combine_with_inherited_props;
use crate::matcher::{extract_properties, ExtractedProperties, PropertyBag};

/// The outcome of processing one group node.
#[derive(Debug)]
pub struct ParsedGroupData<ParsedGroup> {
    /// The group data handler's return value, if a handler was supplied.
    pub group: Option<ParsedGroup>,
    /// The inheritable property values every direct child of this group
    /// must receive as its inherited context.
    pub context_for_children: PropertyBag,
}

/// Processes the raw property bag of a single design token.
///
/// Extracts the properties named by the format's `design_token_props`,
/// normalises them, combines them with the context inherited from the
/// parent group and passes the results to `handle_design_token` as
/// `(path, combined_props, own_props, inherited_props, extraneous_props)`.
///
/// `data` must hold only the token's own properties; design tokens have no
/// child nodes.
pub fn parse_design_token_data<ParsedDesignToken>(
    data: &PropertyBag,
    path: &[String],
    inherited_props: Option<&PropertyBag>,
    format: &FormatProfile,
    handle_design_token: impl FnOnce(
        &[String],
        &PropertyBag,
        &PropertyBag,
        &PropertyBag,
        &PropertyBag,
    ) -> ParsedDesignToken,
) -> ParsedDesignToken {
    let ExtractedProperties {
        extracted: original_own_props,
        rest: extraneous_props,
    } = extract_properties(data, &format.design_token_props);

    let own_props = match format.normalise_design_token_props {
        Some(normalise) => normalise(&original_own_props),
        None => original_own_props,
    };

    let empty = PropertyBag::new();
    let inherited_props = inherited_props.unwrap_or(&empty);

    let mut combined_props = own_props.clone();
    combined_props.extend(combine_with_inherited_props(
        &own_props,
        inherited_props,
        &format.inheritable_props,
    ));

    handle_design_token(
        path,
        &combined_props,
        &own_props,
        inherited_props,
        &extraneous_props,
    )
}

/// Processes the raw property bag of a single group.
///
/// `data` must hold only the group's own and extraneous properties, not the
/// properties whose values are child groups or design tokens; separating
/// those out is the traversal engine's job. When `path` is empty the
/// format's `root_group_props` are extracted as well.
///
/// The group data handler is optional and receives
/// `(path, combined_props, own_props, context_for_children,
/// extraneous_props)`. The returned [`ParsedGroupData::context_for_children`]
/// must be handed to every direct child of this group.
pub fn parse_group_data<ParsedGroup>(
    data: &PropertyBag,
    path: &[String],
    inherited_props: Option<&PropertyBag>,
    format: &FormatProfile,
    handle_group: Option<
        impl FnOnce(&[String], &PropertyBag, &PropertyBag, &PropertyBag, &PropertyBag) -> ParsedGroup,
    >,
) -> ParsedGroupData<ParsedGroup> {
    let ExtractedProperties {
        extracted: original_own_props,
        rest: extraneous_props,
    } = extract_properties(data, &format.group_props_to_extract(path));

    let own_props = match format.normalise_group_props {
        Some(normalise) => normalise(&original_own_props),
        None => original_own_props,
    };

    let empty = PropertyBag::new();
    let context_for_children = combine_with_inherited_props(
        &own_props,
        inherited_props.unwrap_or(&empty),
        &format.inheritable_props,
    );

    // For inheritable keys the merge policy's decision overrides the raw
    // own value in the combined bag.
    let group = handle_group.map(|handle| {
        let mut combined_props = own_props.clone();
        combined_props.extend(context_for_children.clone());
        handle(
            path,
            &combined_props,
            &own_props,
            &context_for_children,
            &extraneous_props,
        )
    });

    ParsedGroupData {
        group,
        context_for_children,
    }
}
