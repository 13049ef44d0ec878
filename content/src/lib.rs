//! Shared page-content model for the WorkflowGene Cloud site.
//!
//! This crate owns the descriptor types used by both `server` and `client`:
//! the typed [`ContentNode`] tree the block renderer maps to visual blocks,
//! the [`SeoData`] metadata mirrored by the SEO editor, and the [`PageRecord`]
//! unit the content API serves. Payload props stay flexible
//! (`serde_json::Map`) while the node type tag is a closed enum with an
//! explicit unknown fallback.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Error returned by [`PageRecord::from_json`] and [`PageRecord::to_json`].
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The raw text could not be parsed as a page record.
    #[error("failed to parse page record: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Block type tag carried by every [`ContentNode`].
///
/// The tag determines which subset of `props` keys is meaningful and which
/// rendering template a node maps to. Tags not in this set deserialize to
/// [`NodeType::Unknown`] and render as a placeholder block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeType {
    Hero,
    Heading,
    Paragraph,
    Button,
    Image,
    Grid,
    Form,
    PricingTable,
    Testimonial,
    #[default]
    Unknown,
}

impl NodeType {
    /// The wire tag for this type, as it appears in serialized content.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Button => "button",
            Self::Image => "image",
            Self::Grid => "grid",
            Self::Form => "form",
            Self::PricingTable => "pricing-table",
            Self::Testimonial => "testimonial",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a wire tag. Anything not in the known set maps to
    /// [`NodeType::Unknown`] rather than erroring.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "hero" => Self::Hero,
            "heading" => Self::Heading,
            "paragraph" => Self::Paragraph,
            "button" => Self::Button,
            "image" => Self::Image,
            "grid" => Self::Grid,
            "form" => Self::Form,
            "pricing-table" => Self::PricingTable,
            "testimonial" => Self::Testimonial,
            _ => Self::Unknown,
        }
    }

    /// Whether this type interprets `children`. Only `grid` does; all other
    /// types ignore the list.
    #[must_use]
    pub fn is_container(self) -> bool {
        self == Self::Grid
    }
}

impl Serialize for NodeType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for NodeType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Per-node visual style attributes, all optional.
///
/// Serialized camelCase to match the stored page content; rendered into an
/// inline CSS declaration list by [`NodeStyles::inline_css`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
}

impl NodeStyles {
    /// Render the set properties as an inline CSS declaration list.
    /// Returns an empty string when nothing is set.
    #[must_use]
    pub fn inline_css(&self) -> String {
        let pairs = [
            ("margin", &self.margin),
            ("padding", &self.padding),
            ("background-color", &self.background_color),
            ("color", &self.text_color),
            ("font-size", &self.font_size),
            ("font-weight", &self.font_weight),
            ("border-radius", &self.border_radius),
            ("border", &self.border),
        ];

        let mut out = String::new();
        for (name, value) in pairs {
            if let Some(value) = value {
                if value.is_empty() {
                    continue;
                }
                out.push_str(name);
                out.push_str(": ");
                out.push_str(value);
                out.push(';');
            }
        }
        out
    }

    /// Whether any style property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.margin.is_none()
            && self.padding.is_none()
            && self.background_color.is_none()
            && self.text_color.is_none()
            && self.font_size.is_none()
            && self.font_weight.is_none()
            && self.border_radius.is_none()
            && self.border.is_none()
    }
}

/// A typed content descriptor node.
///
/// Nodes form a containment tree: a parent holds its `children` directly and
/// nothing cross-references, so cycles are impossible by construction. Only
/// `grid` nodes interpret `children`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentNode {
    /// Stable identifier within a page, e.g. `"hero-1"`.
    pub id: String,
    /// Block type tag. Drives template dispatch in the renderer.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Optional human-readable label shown in editing UIs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Type-specific properties. Missing keys default at render time.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,
    /// Visual style overrides.
    #[serde(default, skip_serializing_if = "NodeStyles::is_empty")]
    pub styles: NodeStyles,
    /// Ordered child nodes. Interpreted only by container types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Create an empty node of the given type.
    #[must_use]
    pub fn new(id: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            node_type,
            name: None,
            props: Map::new(),
            styles: NodeStyles::default(),
            children: Vec::new(),
        }
    }

    /// Read a string prop. Missing or non-string values yield `None`.
    #[must_use]
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }

    /// Read a numeric prop. Missing or non-numeric values yield `None`.
    #[must_use]
    pub fn prop_f64(&self, key: &str) -> Option<f64> {
        self.props.get(key).and_then(Value::as_f64)
    }

    /// Read an unsigned integer prop. Missing or non-integer values yield
    /// `None`. JSON numbers written as floats (`2.0`) are accepted when they
    /// are whole.
    #[must_use]
    pub fn prop_u64(&self, key: &str) -> Option<u64> {
        match self.props.get(key) {
            Some(Value::Number(n)) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as u64)
            }),
            _ => None,
        }
    }

    /// Total number of nodes in this subtree, including self.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ContentNode::node_count).sum::<usize>()
    }

    /// Depth of this subtree. A leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ContentNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Depth-first search for a node by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ContentNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Search-engine metadata for a page, mirrored by the SEO editor panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoData {
    pub title: String,
    pub description: String,
    /// Comma-separated keyword list.
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card: String,
    pub canonical_url: String,
    pub robots: String,
    /// Raw extra `<meta>` tags pasted by the editor.
    pub custom_meta: String,
    /// Raw JSON-LD schema markup pasted by the editor.
    pub schema_markup: String,
}

impl Default for SeoData {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            keywords: String::new(),
            og_title: String::new(),
            og_description: String::new(),
            og_image: String::new(),
            twitter_card: "summary_large_image".to_owned(),
            canonical_url: String::new(),
            robots: "index, follow".to_owned(),
            custom_meta: String::new(),
            schema_markup: String::new(),
        }
    }
}

/// A page served by the content API: routing path, display title, optional
/// SEO metadata, and the root of its content tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: Uuid,
    /// Site-relative path, e.g. `"/pricing"`.
    pub path: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoData>,
    pub root: ContentNode,
}

impl PageRecord {
    /// Parse a page record from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] for malformed JSON or a shape that
    /// does not match the record.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serialize this record to JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] if serialization fails; with this
    /// shape that only happens on pathological float props.
    pub fn to_json(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
