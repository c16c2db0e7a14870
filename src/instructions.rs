//! Fixed per-format instruction text, embedded into the model's system
//! prompt by an external prompt-assembly step.
//!
//! These blocks are immutable static configuration: read-only after process
//! startup and shared freely across evaluation workers.

/// Instruction for the Python-call output format.
pub const PYTHON_FORMAT_INSTRUCTION: &str = "\
If you decide to invoke any of the function(s), you MUST put it in the format of \
[func_name1(params_name1=params_value1, params_name2=params_value2...), func_name2(params)]
You SHOULD NOT include any other text in the response.
";

/// Instruction for the JSON output format.
pub const JSON_FORMAT_INSTRUCTION: &str = r#"
If you decide to invoke any of the function(s), you MUST return them in JSON format. Use one of the following structures:

For a single function call:
{"function_name": "func_name", "parameters": {"param1": "value1", "param2": "value2"}}

For multiple function calls:
[
  {"function_name": "func_name1", "parameters": {"param1": "value1"}},
  {"function_name": "func_name2", "parameters": {"param2": "value2"}}
]

You SHOULD NOT include any other text in the response. Return ONLY the JSON.
"#;

/// Instruction for the XML output format.
pub const XML_FORMAT_INSTRUCTION: &str = r#"
If you decide to invoke any of the function(s), you MUST return them in XML format. Use the following structure:

For a single function call:
<function_call>
    <name>func_name</name>
    <arguments>
        <arg name="param1">value1</arg>
        <arg name="param2">value2</arg>
    </arguments>
</function_call>

For multiple function calls:
<function_calls>
    <function_call>
        <name>func_name1</name>
        <arguments>
            <arg name="param1">value1</arg>
        </arguments>
    </function_call>
    <function_call>
        <name>func_name2</name>
        <arguments>
            <arg name="param2">value2</arg>
        </arguments>
    </function_call>
</function_calls>

You SHOULD NOT include any other text in the response. Return ONLY the XML.
"#;
