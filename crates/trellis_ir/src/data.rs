//! Data variable declarations (`data` / `shared_data` arrays).

use crate::node::LayoutNode;
use crate::value::Value;

/// A single variable declaration from a node's `data` array.
///
/// Declarations carry a name, an optional class (target-framework type
/// name), and an optional default value.
#[derive(Clone, Debug, PartialEq)]
pub struct DataDecl {
    /// The variable name, namespaced during include expansion.
    pub name: String,
    /// The target-framework type of the variable.
    pub class: Option<String>,
    /// The default value, carried through verbatim.
    pub default_value: Option<Value>,
}

impl DataDecl {
    /// Parses a declaration from an entry node. Entries without a string
    /// `name` are not declarations and yield `None`.
    pub fn from_node(node: &LayoutNode) -> Option<Self> {
        let name = node.get_str("name")?.to_string();
        Some(Self {
            name,
            class: node.get_str("class").map(str::to_string),
            default_value: node.get("defaultValue").cloned(),
        })
    }

    /// Converts the declaration back into an entry node.
    pub fn into_node(self) -> LayoutNode {
        let mut node = LayoutNode::new();
        node.set("name", self.name);
        if let Some(class) = self.class {
            node.set("class", class);
        }
        if let Some(default) = self.default_value {
            node.attrs.insert("defaultValue".to_string(), default);
        }
        node
    }

    /// Parses every well-formed declaration from a `data` attribute value.
    ///
    /// Non-list values and malformed entries are skipped, matching the
    /// best-effort posture of the rest of the pipeline.
    pub fn vec_from_value(value: &Value) -> Vec<DataDecl> {
        value
            .as_list()
            .unwrap_or(&[])
            .iter()
            .filter_map(DataDecl::from_node)
            .collect()
    }

    /// Rebuilds a `data` attribute value from declarations.
    pub fn vec_into_value(decls: Vec<DataDecl>) -> Value {
        Value::List(decls.into_iter().map(DataDecl::into_node).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_value(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parse_full_declaration() {
        let value = data_value(
            r#"[{"name": "title", "class": "String", "defaultValue": "Untitled"}]"#,
        );
        let decls = DataDecl::vec_from_value(&value);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "title");
        assert_eq!(decls[0].class.as_deref(), Some("String"));
        assert_eq!(
            decls[0].default_value,
            Some(Value::from("Untitled"))
        );
    }

    #[test]
    fn parse_skips_malformed_entries() {
        let value = data_value(r#"[{"class": "Int"}, {"name": "count"}]"#);
        let decls = DataDecl::vec_from_value(&value);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "count");
        assert!(decls[0].class.is_none());
    }

    #[test]
    fn roundtrip_through_value() {
        let value = data_value(
            r#"[{"name": "count", "class": "Int", "defaultValue": 0}]"#,
        );
        let decls = DataDecl::vec_from_value(&value);
        let back = DataDecl::vec_into_value(decls.clone());
        assert_eq!(DataDecl::vec_from_value(&back), decls);
    }

    #[test]
    fn non_list_value_yields_empty() {
        assert!(DataDecl::vec_from_value(&Value::from("nope")).is_empty());
    }
}
