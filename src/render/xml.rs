/// XML renderer — function docs as a `<functions>` document.
///
/// Values are emitted verbatim: markup-significant characters in names or
/// descriptions are the caller's responsibility to pre-sanitize.
use super::FunctionDoc;

pub(super) fn render_xml(functions: &[FunctionDoc]) -> String {
    let mut lines: Vec<String> = vec!["<functions>".to_string()];

    for func in functions {
        lines.push("  <function>".to_string());
        lines.push(format!("    <name>{}</name>", func.name));
        lines.push(format!(
            "    <description>{}</description>",
            func.description
        ));
        lines.push("    <parameters>".to_string());

        for (p_name, p) in &func.parameters.properties {
            let required = func.parameters.is_required(p_name);
            lines.push(format!(
                "      <parameter name=\"{p_name}\" type=\"{}\" required=\"{required}\">",
                p.type_tag()
            ));
            lines.push(format!(
                "        <description>{}</description>",
                p.description_text()
            ));
            lines.push("      </parameter>".to_string());
        }

        lines.push("    </parameters>".to_string());
        lines.push("  </function>".to_string());
    }

    lines.push("</functions>".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::super::{render_function_docs, sample_weather_doc, DocFormat};

    #[test]
    fn renders_function_and_parameter_elements() {
        let rendered = render_function_docs(&[sample_weather_doc()], DocFormat::Xml);
        assert!(rendered.starts_with("<functions>"));
        assert!(rendered.ends_with("</functions>"));
        assert!(rendered.contains("    <name>get_weather</name>"));
        assert!(rendered
            .contains("    <description>Get the current weather for a location</description>"));
        assert!(rendered
            .contains("      <parameter name=\"location\" type=\"string\" required=\"true\">"));
        assert!(
            rendered.contains("      <parameter name=\"unit\" type=\"string\" required=\"false\">")
        );
        assert!(rendered.contains("        <description>City name</description>"));
    }

    #[test]
    fn required_attribute_is_lower_case() {
        let rendered = render_function_docs(&[sample_weather_doc()], DocFormat::Xml);
        assert!(rendered.contains("required=\"true\""));
        assert!(rendered.contains("required=\"false\""));
        assert!(!rendered.contains("required=\"True\""));
    }

    #[test]
    fn empty_catalog_renders_empty_root() {
        assert_eq!(
            render_function_docs(&[], DocFormat::Xml),
            "<functions>\n</functions>"
        );
    }

    #[test]
    fn descriptions_are_not_escaped() {
        let mut doc = sample_weather_doc();
        doc.description = "uses <b>markup</b> & entities".to_string();
        let rendered = render_function_docs(&[doc], DocFormat::Xml);
        // Documented limitation: the caller pre-sanitizes.
        assert!(rendered.contains("<description>uses <b>markup</b> & entities</description>"));
    }
}
