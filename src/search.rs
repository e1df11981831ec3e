//! Selecting entries from the mirrored corpora

use serde_json::Value;

/// Every API entry matching `query`, in document order
///
/// An entry is any object carrying both `name` and `textRaw`. It matches when
/// its name equals the query (ASCII case-insensitive) or when the head of its
/// heading (backticks removed, text before `(`) equals the query exactly, so
/// both `readFile` and `fs.readFile` find the same method.
pub fn find_nodes<'a>(tree: &'a Value, query: &str) -> Vec<&'a Value> {
    let mut matches = Vec::new();
    let query = query.trim();
    if !query.is_empty() {
        walk(tree, query, &mut matches);
    }
    matches
}

fn walk<'a>(value: &'a Value, query: &str, matches: &mut Vec<&'a Value>) {
    match value {
        Value::Object(map) => {
            if is_match(value, query) {
                matches.push(value);
            }
            for child in map.values() {
                walk(child, query, matches);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, query, matches);
            }
        }
        _ => {}
    }
}

fn is_match(entry: &Value, query: &str) -> bool {
    let (Some(name), Some(text_raw)) = (
        entry.get("name").and_then(Value::as_str),
        entry.get("textRaw").and_then(Value::as_str),
    ) else {
        return false;
    };

    name.eq_ignore_ascii_case(query) || heading_head(text_raw) == query
}

/// "`fs.readFile(path[, options], callback)`" -> "fs.readFile"
fn heading_head(text_raw: &str) -> &str {
    let text = text_raw.trim().trim_start_matches('`');
    let end = text.find(['(', '`']).unwrap_or(text.len());
    text[..end].trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> Value {
        json!({
            "modules": [{
                "textRaw": "File system",
                "name": "fs",
                "type": "module",
                "methods": [
                    { "textRaw": "`fs.readFile(path[, options], callback)`", "name": "readFile", "type": "method" },
                    { "textRaw": "`fs.writeFile(file, data[, options], callback)`", "name": "writeFile", "type": "method" }
                ]
            }, {
                "textRaw": "File system promises API",
                "name": "fs_promises_api",
                "type": "module",
                "methods": [
                    { "textRaw": "`fsPromises.readFile(path[, options])`", "name": "readFile", "type": "method" }
                ]
            }],
            "globals": [{ "textRaw": "`process`", "name": "process", "type": "global" }]
        })
    }

    fn names(matches: &[&Value]) -> Vec<String> {
        matches.iter().map(|m| m["textRaw"].as_str().unwrap().to_string()).collect()
    }

    #[test]
    fn test_find_by_name_returns_all_matches_in_order() {
        let tree = tree();
        assert_eq!(
            names(&find_nodes(&tree, "readFile")),
            vec![
                "`fs.readFile(path[, options], callback)`",
                "`fsPromises.readFile(path[, options])`"
            ]
        );
    }

    #[test]
    fn test_find_by_qualified_heading() {
        let tree = tree();
        assert_eq!(
            names(&find_nodes(&tree, "fs.readFile")),
            vec!["`fs.readFile(path[, options], callback)`"]
        );
        assert_eq!(names(&find_nodes(&tree, "process")), vec!["`process`"]);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let tree = tree();
        assert_eq!(find_nodes(&tree, "FS").len(), 1);
    }

    #[test]
    fn test_no_match_and_blank_query() {
        let tree = tree();
        assert!(find_nodes(&tree, "nope").is_empty());
        assert!(find_nodes(&tree, "   ").is_empty());
    }

    #[test]
    fn test_sibling_sections_keep_document_order() {
        let tree: Value = serde_json::from_str(
            r#"{"modules":[{"name":"x","textRaw":"first"}],"globals":[{"name":"x","textRaw":"second"}]}"#,
        )
        .unwrap();

        assert_eq!(names(&find_nodes(&tree, "x")), vec!["first", "second"]);
    }

    #[test]
    fn test_heading_head() {
        assert_eq!(heading_head("`fs.readFile(path)`"), "fs.readFile");
        assert_eq!(heading_head("`process`"), "process");
        assert_eq!(heading_head("File system"), "File system");
    }
}
