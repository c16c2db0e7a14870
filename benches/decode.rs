use criterion::{black_box, criterion_group, criterion_main, Criterion};
use toolcall_codec::{decode, decode_json, decode_xml, strip_tool_call_marker, OutputFormat};

const JSON_MULTI: &str = r#"[
  {"function_name": "get_weather", "parameters": {"location": "San Francisco", "unit": "celsius"}},
  {"name": "send_email", "arguments": {"to": "user@example.com", "subject": "Weather report"}},
  {"search": {"keywords": ["forecast", "rain"], "limit": 5}}
]"#;

const XML_MULTI: &str = r#"<function_calls>
    <function_call>
        <name>get_weather</name>
        <arguments>
            <arg name="location">San Francisco</arg>
            <arg name="unit">celsius</arg>
        </arguments>
    </function_call>
    <function_call>
        <name>search</name>
        <arguments>
            <arg name="keywords" type="array">["forecast", "rain"]</arg>
            <arg name="limit" type="integer">5</arg>
        </arguments>
    </function_call>
</function_calls>"#;

fn bench_decode_json(c: &mut Criterion) {
    c.bench_function("decode_json_multi", |b| {
        b.iter(|| decode_json(black_box(JSON_MULTI)).unwrap());
    });
}

fn bench_decode_xml(c: &mut Criterion) {
    c.bench_function("decode_xml_multi", |b| {
        b.iter(|| decode_xml(black_box(XML_MULTI)).unwrap());
    });
}

fn bench_tagged_dispatch(c: &mut Criterion) {
    let tagged = format!("<tool_call>{JSON_MULTI}</tool_call>");
    c.bench_function("decode_tagged_json", |b| {
        b.iter(|| decode(black_box(&tagged), OutputFormat::JsonTagged).unwrap());
    });
}

fn bench_strip_marker(c: &mut Criterion) {
    let tagged = format!("  <tool_call>{XML_MULTI}</tool_call>  ");
    c.bench_function("strip_tool_call_marker", |b| {
        b.iter(|| strip_tool_call_marker(black_box(&tagged)));
    });
}

criterion_group!(
    benches,
    bench_decode_json,
    bench_decode_xml,
    bench_tagged_dispatch,
    bench_strip_marker
);
criterion_main!(benches);
