//! Documentation nodes the renderer understands
//!
//! A node is either a structured API entry from `all.json` or an introspected
//! value. The variant is chosen once, when the node is built, and rendering
//! never looks at fields of the other variant.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when interpreting a node for display
#[derive(Debug, Error)]
pub enum RenderError {
    /// The value does not have the shape of a documentation entry
    #[error("Malformed documentation node: {0}")]
    Malformed(String),
}

/// One parameter of a signature
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Param {
    /// Raw parameter text, e.g. "`path` {string|Buffer|URL}"
    #[serde(rename = "textRaw", default)]
    pub raw_text: Option<String>,
}

/// One call signature of a method or constructor
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub params: Vec<Param>,
}

/// An entry of the structured API tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StructuredNode {
    pub name: String,
    /// Raw heading text, e.g. "`fs.readFile(path[, options], callback)`"
    #[serde(rename = "textRaw", default)]
    pub raw_type_label: String,
    /// Entry kind (`module`, `method`, `property`, ...) or a property's value type
    #[serde(rename = "type")]
    pub kind: String,
    /// HTML description
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(default)]
    pub signatures: Vec<Signature>,
}

impl StructuredNode {
    /// Interprets a tree entry; `name` and `type` are required
    pub fn from_value(value: &Value) -> Result<Self, RenderError> {
        if !value.is_object() {
            return Err(RenderError::Malformed(format!(
                "expected an object, found {}",
                json_kind(value)
            )));
        }
        Self::deserialize(value).map_err(|e| RenderError::Malformed(e.to_string()))
    }
}

/// A named member of an introspected value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub callable: bool,
    /// Present on the value itself rather than inherited
    pub own: bool,
}

/// An introspected value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeObject {
    pub string_form: String,
    pub primitive_value: String,
    pub constructor: String,
    pub attributes: Vec<Attribute>,
}

impl RuntimeObject {
    /// Introspects a JSON value the way a JavaScript runtime would present it
    ///
    /// Objects list their keys as properties and the names under `methods` as
    /// callable members; arrays and strings list their indices and `length`.
    pub fn inspect(value: &Value) -> Self {
        let string_form = js_string(value);
        let mut attributes = Vec::new();

        match value {
            Value::Object(map) => {
                attributes.extend(map.keys().map(|key| Attribute {
                    name: key.clone(),
                    callable: false,
                    own: true,
                }));
                if let Some(Value::Array(methods)) = map.get("methods") {
                    attributes.extend(
                        methods
                            .iter()
                            .filter_map(|m| m.get("name").and_then(Value::as_str))
                            .map(|name| Attribute {
                                name: name.to_string(),
                                callable: true,
                                own: true,
                            }),
                    );
                }
            }
            Value::Array(items) => attributes.extend(indexed_attributes(items.len())),
            Value::String(s) => attributes.extend(indexed_attributes(s.chars().count())),
            _ => {}
        }

        Self {
            primitive_value: string_form.clone(),
            string_form,
            constructor: json_kind(value).to_string(),
            attributes,
        }
    }

    /// Own, non-callable attribute names in order
    pub fn own_properties(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|a| a.own && !a.callable)
            .map(|a| a.name.as_str())
            .collect()
    }

    /// Own, callable attribute names in order
    pub fn methods(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|a| a.own && a.callable)
            .map(|a| a.name.as_str())
            .collect()
    }
}

fn indexed_attributes(len: usize) -> impl Iterator<Item = Attribute> {
    (0..len)
        .map(|i| i.to_string())
        .chain(std::iter::once("length".to_string()))
        .map(|name| Attribute {
            name,
            callable: false,
            own: true,
        })
}

/// `String(value)` semantics
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Object",
    }
}

/// The unit the renderer consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocNode {
    Structured(StructuredNode),
    Runtime(RuntimeObject),
}

impl DocNode {
    /// Builds a structured node, failing on values that are not API entries
    pub fn structured(value: &Value) -> Result<Self, RenderError> {
        StructuredNode::from_value(value).map(DocNode::Structured)
    }

    /// Builds an introspected node; any value is accepted
    pub fn runtime(value: &Value) -> Self {
        DocNode::Runtime(RuntimeObject::inspect(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_node_from_tree_entry() {
        let value = json!({
            "textRaw": "`fs.readFile(path[, options], callback)`",
            "type": "method",
            "name": "readFile",
            "desc": "<p>Reads a file.</p>",
            "signatures": [{ "params": [{ "textRaw": "`path` {string}", "name": "path" }] }]
        });

        let node = StructuredNode::from_value(&value).expect("valid node");

        assert_eq!(node.name, "readFile");
        assert_eq!(node.kind, "method");
        assert_eq!(node.raw_type_label, "`fs.readFile(path[, options], callback)`");
        assert_eq!(node.signatures.len(), 1);
        assert_eq!(node.signatures[0].params[0].raw_text.as_deref(), Some("`path` {string}"));
    }

    #[test]
    fn test_structured_node_defaults_optional_fields() {
        let node = StructuredNode::from_value(&json!({ "name": "fs", "type": "module" }))
            .expect("valid node");
        assert!(node.description.is_empty());
        assert!(node.signatures.is_empty());
        assert!(node.raw_type_label.is_empty());
    }

    #[test]
    fn test_structured_node_rejects_wrong_shapes() {
        assert!(StructuredNode::from_value(&json!(["fs"])).is_err());
        assert!(StructuredNode::from_value(&json!({ "type": "module" })).is_err());
        assert!(StructuredNode::from_value(&json!({ "name": "fs", "type": 3 })).is_err());

        let err = StructuredNode::from_value(&json!("fs")).unwrap_err();
        assert!(err.to_string().contains("String"));
    }

    #[test]
    fn test_inspect_object_lists_keys_and_methods() {
        let value = json!({
            "name": "fs",
            "type": "module",
            "methods": [{ "name": "readFile" }, { "name": "writeFile" }, { "textRaw": "nameless" }]
        });

        let object = RuntimeObject::inspect(&value);

        assert_eq!(object.string_form, "[object Object]");
        assert_eq!(object.primitive_value, "[object Object]");
        assert_eq!(object.constructor, "Object");
        assert_eq!(object.own_properties(), vec!["name", "type", "methods"]);
        assert_eq!(object.methods(), vec!["readFile", "writeFile"]);
    }

    #[test]
    fn test_inspect_keeps_key_insertion_order() {
        let value: Value =
            serde_json::from_str(r#"{"textRaw":"t","name":"fs","type":"module"}"#).unwrap();

        let object = RuntimeObject::inspect(&value);

        assert_eq!(object.own_properties(), vec!["textRaw", "name", "type"]);
    }

    #[test]
    fn test_inspect_array_and_string() {
        let array = RuntimeObject::inspect(&json!([1, null, "x"]));
        assert_eq!(array.string_form, "1,,x");
        assert_eq!(array.constructor, "Array");
        assert_eq!(array.own_properties(), vec!["0", "1", "2", "length"]);
        assert!(array.methods().is_empty());

        let string = RuntimeObject::inspect(&json!("ab"));
        assert_eq!(string.string_form, "ab");
        assert_eq!(string.own_properties(), vec!["0", "1", "length"]);
    }

    #[test]
    fn test_inspect_scalars() {
        let number = RuntimeObject::inspect(&json!(42));
        assert_eq!(number.string_form, "42");
        assert_eq!(number.constructor, "Number");
        assert!(number.attributes.is_empty());

        assert_eq!(RuntimeObject::inspect(&json!(true)).constructor, "Boolean");
        assert_eq!(RuntimeObject::inspect(&Value::Null).string_form, "null");
    }

    #[test]
    fn test_inherited_attributes_are_not_listed() {
        let object = RuntimeObject {
            string_form: "x".to_string(),
            primitive_value: "x".to_string(),
            constructor: "Thing".to_string(),
            attributes: vec![
                Attribute { name: "own".into(), callable: false, own: true },
                Attribute { name: "inherited".into(), callable: false, own: false },
                Attribute { name: "run".into(), callable: true, own: true },
                Attribute { name: "toString".into(), callable: true, own: false },
            ],
        };

        assert_eq!(object.own_properties(), vec!["own"]);
        assert_eq!(object.methods(), vec!["run"]);
    }
}
