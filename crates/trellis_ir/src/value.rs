//! Attribute values of a layout node.

use serde::{Deserialize, Serialize};

use crate::node::LayoutNode;

/// The value of a single layout attribute.
///
/// Matches the JSON document model: strings, numbers, booleans, nested
/// nodes, and ordered lists of nodes. Serialized untagged so documents
/// round-trip as plain JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A string attribute, possibly containing `@{...}` binding expressions.
    Str(String),
    /// A numeric attribute (dimensions, margins, sizes).
    Num(serde_json::Number),
    /// A boolean flag (alignment flags and the like).
    Bool(bool),
    /// An ordered list of child nodes.
    List(Vec<LayoutNode>),
    /// A nested node.
    Node(LayoutNode),
}

impl Value {
    /// Returns the string contents if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number as an `f64` if this is a [`Value::Num`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Num(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the node list if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[LayoutNode]> {
        match self {
            Value::List(nodes) => Some(nodes),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        // Non-finite numbers have no JSON representation; map them to 0.
        let num = serde_json::Number::from_f64(n)
            .unwrap_or_else(|| serde_json::Number::from(0));
        Value::Num(num)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Num(serde_json::Number::from(n))
    }
}
