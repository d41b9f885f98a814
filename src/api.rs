use crate::drafts::DTCG_LATEST_DRAFT;
use crate::error::{display_path, json_type_name, DtcgError};
use crate::format::FormatProfile;
use crate::matcher::{extract_properties, ExtractedProperties, PropertyBag};
use crate::node::{parse_design_token_data, parse_group_data, ParsedGroupData};
use serde_json::Value;

/// A design token data handler, called once per design token with
/// `(path, combined_props, own_props, inherited_props, extraneous_props)`.
pub type DesignTokenHandlerFn<'h, ParsedDesignToken> = Box<
    dyn FnMut(&[String], &PropertyBag, &PropertyBag, &PropertyBag, &PropertyBag) -> ParsedDesignToken
        + 'h,
>;

/// A group data handler, called once per group with
/// `(path, combined_props, own_props, context_for_children, extraneous_props)`.
pub type GroupHandlerFn<'h, ParsedGroup> = Box<
    dyn FnMut(&[String], &PropertyBag, &PropertyBag, &PropertyBag, &PropertyBag) -> ParsedGroup
        + 'h,
>;

/// Wires a completed child into its parent group's parsed result. The parent
/// is `None` when no group handler was configured.
pub type AddToGroupFn<'h, ParsedDesignToken, ParsedGroup> = Box<
    dyn FnMut(Option<&mut ParsedGroup>, &str, ParsedNode<ParsedDesignToken, ParsedGroup>) + 'h,
>;

/// The parsed result of one node, as produced by the configured handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedNode<ParsedDesignToken, ParsedGroup> {
    DesignToken(ParsedDesignToken),
    /// `None` when no group handler was configured.
    Group(Option<ParsedGroup>),
}

/// Configuration for one [`parse_dtcg`] invocation.
pub struct DtcgParserConfig<'h, ParsedDesignToken, ParsedGroup> {
    /// Called for every design token encountered. Mandatory; a design token
    /// with no observable result would be pointless to visit.
    pub handle_design_token: DesignTokenHandlerFn<'h, ParsedDesignToken>,
    /// Called for every group encountered, the root group included.
    pub handle_group: Option<GroupHandlerFn<'h, ParsedGroup>>,
    /// Called once per completed child, after that child's whole subtree
    /// has been parsed.
    pub add_to_group: Option<AddToGroupFn<'h, ParsedDesignToken, ParsedGroup>>,
    /// The format profile to parse with. Defaults to
    /// [`DTCG_LATEST_DRAFT`](crate::drafts::DTCG_LATEST_DRAFT).
    pub format: Option<&'h FormatProfile>,
}

/// Parses an in-memory DTCG document tree.
///
/// Nodes are visited depth-first, each group strictly before its children
/// so that inheritable properties can flow down. The return value is
/// whatever the configured handler produced for the root node.
///
/// # Errors
///
/// Returns [`DtcgError::ExpectedObject`] if the root, or any value in child
/// position that must be a node, is not a JSON object.
pub fn parse_dtcg<ParsedDesignToken, ParsedGroup>(
    data: &Value,
    config: DtcgParserConfig<'_, ParsedDesignToken, ParsedGroup>,
) -> Result<ParsedNode<ParsedDesignToken, ParsedGroup>, DtcgError> {
    let mut walker = Walker {
        format: config.format.unwrap_or(&DTCG_LATEST_DRAFT),
        handle_design_token: config.handle_design_token,
        handle_group: config.handle_group,
        add_to_group: config.add_to_group,
    };
    let mut path = Vec::new();
    walker.parse_node(data, &mut path, None)
}

/// The recursive traversal engine behind [`parse_dtcg`].
struct Walker<'h, ParsedDesignToken, ParsedGroup> {
    format: &'h FormatProfile,
    handle_design_token: DesignTokenHandlerFn<'h, ParsedDesignToken>,
    handle_group: Option<GroupHandlerFn<'h, ParsedGroup>>,
    add_to_group: Option<AddToGroupFn<'h, ParsedDesignToken, ParsedGroup>>,
}

impl<ParsedDesignToken, ParsedGroup> Walker<'_, ParsedDesignToken, ParsedGroup> {
    fn parse_node(
        &mut self,
        data: &Value,
        path: &mut Vec<String>,
        context: Option<&PropertyBag>,
    ) -> Result<ParsedNode<ParsedDesignToken, ParsedGroup>, DtcgError> {
        let Value::Object(raw_props) = data else {
            return Err(DtcgError::ExpectedObject {
                path: display_path(path),
                found: json_type_name(data),
            });
        };

        if (self.format.is_design_token_data)(raw_props) {
            log::trace!("design token at {}", display_path(path));
            let token = parse_design_token_data(
                raw_props,
                path,
                context,
                self.format,
                &mut self.handle_design_token,
            );
            return Ok(ParsedNode::DesignToken(token));
        }

        log::trace!("group at {}", display_path(path));

        // Split the group's own (and extraneous) props from its child-node
        // slots. Remaining keys whose values are not objects cannot be
        // nodes; they are surfaced as extraneous props instead.
        let ExtractedProperties {
            extracted: mut group_data,
            rest,
        } = extract_properties(raw_props, &self.format.child_slot_matchers(path));

        let mut children: Vec<(String, Value)> = Vec::new();
        for (name, value) in rest {
            if value.is_object() {
                children.push((name, value));
            } else {
                group_data.insert(name, value);
            }
        }

        let ParsedGroupData {
            mut group,
            context_for_children,
        } = parse_group_data(
            &group_data,
            path,
            context,
            self.format,
            self.handle_group.as_mut(),
        );

        for (name, value) in children {
            path.push(name.clone());
            let child = self.parse_node(&value, path, Some(&context_for_children))?;
            path.pop();

            if let Some(add_to_group) = self.add_to_group.as_mut() {
                add_to_group(group.as_mut(), &name, child);
            }
        }

        Ok(ParsedNode::Group(group))
    }
}
