/// Python-signature renderer — function docs as `def` signatures with
/// docstrings.
use super::FunctionDoc;

/// Map a JSON-schema type name to its closest Python type name.
/// Unrecognized names pass through unchanged.
fn python_type(json_type: &str) -> &str {
    match json_type {
        "string" => "str",
        "integer" => "int",
        "number" => "float",
        "boolean" => "bool",
        "array" => "list",
        "object" => "dict",
        other => other,
    }
}

pub(super) fn render_python(functions: &[FunctionDoc]) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(functions.len());

    for func in functions {
        let schema = &func.parameters;

        // Signature: required parameters carry no default, everything else
        // gets the `= None` marker.
        let param_strs: Vec<String> = schema
            .properties
            .iter()
            .map(|(p_name, p)| {
                let py_type = python_type(p.type_tag());
                if schema.is_required(p_name) {
                    format!("{p_name}: {py_type}")
                } else {
                    format!("{p_name}: {py_type} = None")
                }
            })
            .collect();
        let signature = format!("def {}({}):", func.name, param_strs.join(", "));

        // Docstring: description, then one Args line per parameter with its
        // declared (JSON) type.
        let mut doc_lines: Vec<String> = Vec::new();
        doc_lines.push(format!("    \"\"\"{}", func.description));
        doc_lines.push("\n    Args:".to_string());
        for (p_name, p) in &schema.properties {
            doc_lines.push(format!(
                "        {p_name} ({}): {}",
                p.type_tag(),
                p.description_text()
            ));
        }
        doc_lines.push("    \"\"\"".to_string());

        blocks.push(format!("{signature}\n{}", doc_lines.join("\n")));
    }

    blocks.join("\n\n")
}
