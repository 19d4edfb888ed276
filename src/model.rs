//! Data-standard model types
//!
//! The flat, unordered collections a data-standard document parses into.
//! All of these are read-only inputs to report generation; nothing in this
//! crate mutates or creates them after loading.

use serde::{Deserialize, Serialize};

/// The root catalog: categories, attributes, and attribute groups
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastandard {
    /// Category hierarchy, stored flat and linked via `parent_id`
    #[serde(default)]
    pub categories: Vec<Category>,
    /// All attribute definitions, referenced by id from links
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Group labels, referenced by id from attributes
    #[serde(default)]
    pub attribute_groups: Vec<AttributeGroup>,
}

/// A node in the parent-linked category hierarchy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique id within the data standard
    pub id: String,
    /// Display name
    pub name: String,
    /// Parent category id; absent for the root. May reference a category
    /// that does not exist (traversal stops there, not an error).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Attributes this category declares, in report order
    #[serde(default)]
    pub attribute_links: Vec<AttributeLink>,
}

impl Category {
    /// Create a category with no parent and no links
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            attribute_links: Vec::new(),
        }
    }

    /// Set the parent category id
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Set the attribute links
    pub fn with_links(mut self, links: Vec<AttributeLink>) -> Self {
        self.attribute_links = links;
        self
    }
}

/// A named, typed, optionally-grouped field definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Unique id within the data standard
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text description; rendered as an empty string when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ids of the groups this attribute belongs to
    #[serde(default)]
    pub group_ids: Vec<String>,
    /// The attribute's type
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    /// Member fields, present only on composite attributes
    #[serde(default)]
    pub attribute_links: Vec<AttributeLink>,
}

impl Attribute {
    /// Create a simple attribute with the given type
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        attribute_type: AttributeType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            group_ids: Vec::new(),
            attribute_type,
            attribute_links: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the group ids
    pub fn with_groups(mut self, group_ids: Vec<String>) -> Self {
        self.group_ids = group_ids;
        self
    }

    /// Set the member-field links, making the attribute composite
    pub fn with_links(mut self, links: Vec<AttributeLink>) -> Self {
        self.attribute_links = links;
        self
    }

    /// An attribute is composite when it declares member fields of its own.
    /// The presence of child links is authoritative; a literal `"composite"`
    /// type id is not required and not sufficient.
    pub fn is_composite(&self) -> bool {
        !self.attribute_links.is_empty()
    }
}

/// A context-specific reference from a category (or a composite attribute)
/// to an attribute id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeLink {
    /// Target attribute id; may not resolve (such links are skipped)
    pub id: String,
    /// Link-local optionality. The same attribute can be mandatory in one
    /// context and optional in another. Absent means mandatory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

impl AttributeLink {
    /// Create a mandatory link
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            optional: None,
        }
    }

    /// Create an optional link
    pub fn optional(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            optional: Some(true),
        }
    }

    /// Whether this link is explicitly optional; unset defaults to mandatory
    pub fn is_optional(&self) -> bool {
        self.optional == Some(true)
    }
}

/// An attribute's type: an identifier plus a multi-value flag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeType {
    /// Type identifier: a primitive name, or the `"composite"` sentinel
    pub id: String,
    /// Whether the attribute holds multiple values; absent means single
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_value: Option<bool>,
}

impl AttributeType {
    /// Create a single-value type
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            multi_value: None,
        }
    }

    /// Create a multi-value type
    pub fn multi(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            multi_value: Some(true),
        }
    }

    /// Whether the type is flagged multi-value; unset defaults to false
    pub fn is_multi_value(&self) -> bool {
        self.multi_value == Some(true)
    }
}

/// A group label, referenced by id from attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeGroup {
    /// Unique id within the data standard
    pub id: String,
    /// Display name
    pub name: String,
}
