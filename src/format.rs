//! Attribute display formatting
//!
//! Turns a single attribute, plus the link that references it, into display
//! strings: name with mandatory marker, description, and a type signature.
//! Composite types expand recursively into an indented, brace-delimited
//! block. All output is deterministic; the exact tokens below are part of
//! the report contract.

use std::collections::HashMap;

use crate::model::{Attribute, AttributeLink, AttributeType};

/// Column labels, emitted as row 0 of every report
pub const HEADERS: [&str; 5] = [
    "Category Name",
    "Attribute Name",
    "Description",
    "Type",
    "Group",
];

/// Suffix for attributes that are mandatory in their link context
pub const MANDATORY_MARKER: &str = "*";

/// Suffix for multi-value types
pub const MULTI_VALUE_MARKER: &str = "[]";

/// Separator between a member-field name and its type
pub const TYPE_SEPARATOR: &str = ":";

/// Opening delimiter of a composite type body
pub const OPENING_BRACE: &str = "{";

/// Closing delimiter of a composite type body
pub const CLOSING_BRACE: &str = "}";

/// Indentation unit, repeated once per nesting level
pub const INDENT_UNIT: &str = "  ";

/// Line break used inside composite signatures and between group names
pub const LINE_SEPARATOR: &str = "\n";

/// Conventional type id for composite attributes. Documents intent only;
/// compositeness is decided by the presence of child links, not this id.
pub const COMPOSITE_TYPE_ID: &str = "composite";

/// Format an attribute's display name in its link context.
///
/// Mandatory attributes are suffixed with [`MANDATORY_MARKER`]; an unset
/// optional flag counts as mandatory.
pub fn attribute_name(link: &AttributeLink, attribute: &Attribute) -> String {
    if link.is_optional() {
        attribute.name.clone()
    } else {
        format!("{}{}", attribute.name, MANDATORY_MARKER)
    }
}

/// Format an attribute's description; absent descriptions render empty
pub fn attribute_description(attribute: &Attribute) -> String {
    attribute.description.clone().unwrap_or_default()
}

/// Format an attribute's type signature.
///
/// Non-composite attributes render as their base type. Composite attributes
/// expand recursively, one member field per line:
///
/// ```text
/// composite{
///   Dimensions: composite{
///     Width*:number
///   }
///   Color:string[]
/// }
/// ```
///
/// Member links that do not resolve in `attributes` are skipped without a
/// placeholder; a composite whose links all dangle renders an empty body.
pub fn type_signature(attributes: &HashMap<&str, &Attribute>, attribute: &Attribute) -> String {
    if !attribute.is_composite() {
        return base_type(&attribute.attribute_type);
    }
    let mut signature = String::new();
    describe_composite(attributes, attribute, &mut signature, 0);
    signature
}

/// Recursively render a composite attribute into `out`.
///
/// The header line carries the type id alone at depth 0 and
/// `name: type_id` at deeper levels; the closing brace sits at the
/// parent's indentation and takes the multi-value marker when the
/// composite's own type is flagged.
fn describe_composite(
    attributes: &HashMap<&str, &Attribute>,
    attribute: &Attribute,
    out: &mut String,
    depth: usize,
) {
    let indent = INDENT_UNIT.repeat(depth);
    if depth == 0 {
        out.push_str(&attribute.attribute_type.id);
    } else {
        out.push_str(&indent);
        out.push_str(&attribute.name);
        out.push_str(": ");
        out.push_str(&attribute.attribute_type.id);
    }
    out.push_str(OPENING_BRACE);
    out.push_str(LINE_SEPARATOR);

    let member_depth = depth + 1;
    for link in &attribute.attribute_links {
        let Some(member) = attributes.get(link.id.as_str()).copied() else {
            continue;
        };
        if member.is_composite() {
            describe_composite(attributes, member, out, member_depth);
        } else {
            out.push_str(&INDENT_UNIT.repeat(member_depth));
            out.push_str(&attribute_name(link, member));
            out.push_str(TYPE_SEPARATOR);
            out.push_str(&base_type(&member.attribute_type));
        }
        out.push_str(LINE_SEPARATOR);
    }

    out.push_str(&indent);
    out.push_str(CLOSING_BRACE);
    if attribute.attribute_type.is_multi_value() {
        out.push_str(MULTI_VALUE_MARKER);
    }
}

/// Render a non-composite type: the type id plus the multi-value marker
fn base_type(attribute_type: &AttributeType) -> String {
    if attribute_type.is_multi_value() {
        format!("{}{}", attribute_type.id, MULTI_VALUE_MARKER)
    } else {
        attribute_type.id.clone()
    }
}
