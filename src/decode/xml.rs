/// XML decoder — canonical call list from a model's XML output.
///
/// Accepted document shapes:
///
/// ```xml
/// <function_call>
///     <name>function_name</name>
///     <arguments>
///         <arg name="param1">value1</arg>
///         <arg name="param2" type="integer">2</arg>
///     </arguments>
/// </function_call>
/// ```
///
/// or a `<function_calls>` wrapper holding any number of `<function_call>`
/// children, decoded in document order. Argument values run through value
/// coercion with the `type` attribute as hint; an `<arg>` without a
/// (non-empty) `name` attribute feeds the positional slot.
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::call::{Arguments, ToolCall};
use crate::coerce::{coerce, TypeHint};
use crate::error::CodecError;

const CALL_TAG: &[u8] = b"function_call";
const CALLS_TAG: &[u8] = b"function_calls";

/// Decode XML-formatted function calls.
///
/// # Errors
///
/// [`CodecError::Syntax`] for malformed XML, [`CodecError::Shape`] for an
/// unexpected root element, [`CodecError::Semantic`] for a call without a
/// function name or with a duplicate named argument.
pub fn decode_xml(text: &str) -> Result<Vec<ToolCall>, CodecError> {
    let mut reader = Reader::from_str(text);
    let mut calls = Vec::new();
    let mut root_seen = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                single_root_check(&mut root_seen)?;
                match e.name().as_ref() {
                    CALL_TAG => calls.push(decode_call(&mut reader)?),
                    CALLS_TAG => decode_call_list(&mut reader, &mut calls)?,
                    other => return Err(unexpected_root(other)),
                }
            }
            Ok(Event::Empty(ref e)) => {
                single_root_check(&mut root_seen)?;
                match e.name().as_ref() {
                    // An empty call element can never yield a function name.
                    CALL_TAG => return Err(missing_name()),
                    CALLS_TAG => {}
                    other => return Err(unexpected_root(other)),
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = String::from_utf8_lossy(e.as_ref());
                if !text.trim().is_empty() {
                    return Err(CodecError::Syntax(format!(
                        "unexpected text outside call elements: '{}'",
                        text.trim()
                    )));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_syntax(&e)),
            Ok(_) => {}
        }
    }

    if !root_seen {
        return Err(CodecError::Syntax("no XML element found".to_string()));
    }
    Ok(calls)
}

/// Scan the direct children of `<function_calls>`. Only `<function_call>`
/// children are decoded; anything else is skipped wholesale.
fn decode_call_list(
    reader: &mut Reader<&[u8]>,
    calls: &mut Vec<ToolCall>,
) -> Result<(), CodecError> {
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if e.name().as_ref() == CALL_TAG {
                    calls.push(decode_call(reader)?);
                } else {
                    skip_element(reader)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == CALL_TAG {
                    return Err(missing_name());
                }
            }
            Ok(Event::End(_)) => return Ok(()),
            Ok(Event::Eof) => {
                return Err(CodecError::Syntax(
                    "unexpected end of document inside <function_calls>".to_string(),
                ))
            }
            Err(e) => return Err(xml_syntax(&e)),
            Ok(_) => {}
        }
    }
}

/// Decode one `<function_call>` element, consuming events up to and
/// including its closing tag.
fn decode_call(reader: &mut Reader<&[u8]>) -> Result<ToolCall, CodecError> {
    let mut name: Option<String> = None;
    let mut arguments = Arguments::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"name" => name = Some(read_element_text(reader)?.trim().to_string()),
                b"arguments" => decode_arguments(reader, &mut arguments)?,
                _ => skip_element(reader)?,
            },
            Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == b"name" {
                    name = Some(String::new());
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(CodecError::Syntax(
                    "unexpected end of document inside <function_call>".to_string(),
                ))
            }
            Err(e) => return Err(xml_syntax(&e)),
            Ok(_) => {}
        }
    }

    let name = name.filter(|n| !n.is_empty()).ok_or_else(missing_name)?;
    Ok(ToolCall::new(name, arguments))
}

/// Scan the direct children of `<arguments>` for `<arg>` elements.
fn decode_arguments(
    reader: &mut Reader<&[u8]>,
    arguments: &mut Arguments,
) -> Result<(), CodecError> {
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if e.name().as_ref() == b"arg" {
                    let (arg_name, hint) = arg_attributes(e);
                    let text = read_element_text(reader)?;
                    store_argument(arguments, arg_name, hint, text.trim())?;
                } else {
                    skip_element(reader)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                if e.name().as_ref() == b"arg" {
                    let (arg_name, hint) = arg_attributes(e);
                    store_argument(arguments, arg_name, hint, "")?;
                }
            }
            Ok(Event::End(_)) => return Ok(()),
            Ok(Event::Eof) => {
                return Err(CodecError::Syntax(
                    "unexpected end of document inside <arguments>".to_string(),
                ))
            }
            Err(e) => return Err(xml_syntax(&e)),
            Ok(_) => {}
        }
    }
}

/// Extract the optional `name` and `type` attributes from an `<arg>` start
/// tag. An unrecognized `type` token means no hint (automatic detection).
fn arg_attributes(e: &BytesStart<'_>) -> (Option<String>, Option<TypeHint>) {
    let mut name = None;
    let mut hint = None;
    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"name" => name = Some(String::from_utf8_lossy(&attr.value).to_string()),
            b"type" => hint = TypeHint::parse(&String::from_utf8_lossy(&attr.value)),
            _ => {}
        }
    }
    (name, hint)
}

fn store_argument(
    arguments: &mut Arguments,
    name: Option<String>,
    hint: Option<TypeHint>,
    raw: &str,
) -> Result<(), CodecError> {
    let value = coerce(raw, hint);
    // An empty name attribute counts as unnamed.
    match name.filter(|n| !n.is_empty()) {
        Some(name) => arguments.insert_named(name, value),
        None => {
            arguments.push_positional(value);
            Ok(())
        }
    }
}

/// Accumulate the leading text (including CDATA) of the current element,
/// consuming events up to and including its closing tag. Anything from the
/// first nested child onward contributes nothing: text after a child belongs
/// to that child's tail, not to this element.
fn read_element_text(reader: &mut Reader<&[u8]>) -> Result<String, CodecError> {
    let mut out = String::new();
    let mut leading = true;
    let mut depth = 1usize;
    loop {
        match reader.read_event() {
            Ok(Event::Text(ref e)) => {
                if depth == 1 && leading {
                    match e.unescape() {
                        Ok(cow) => out.push_str(&cow),
                        Err(_) => out.push_str(&String::from_utf8_lossy(e.as_ref())),
                    }
                }
            }
            Ok(Event::CData(ref e)) => {
                if depth == 1 && leading {
                    out.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::Start(_)) => {
                leading = false;
                depth += 1;
            }
            Ok(Event::Empty(_)) => leading = false,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(out);
                }
            }
            Ok(Event::Eof) => {
                return Err(CodecError::Syntax(
                    "unexpected end of document inside element".to_string(),
                ))
            }
            Err(e) => return Err(xml_syntax(&e)),
            Ok(_) => {}
        }
    }
}

/// Consume events until the current element's closing tag.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), CodecError> {
    let mut depth = 1usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Ok(Event::Eof) => {
                return Err(CodecError::Syntax(
                    "unexpected end of document inside skipped element".to_string(),
                ))
            }
            Err(e) => return Err(xml_syntax(&e)),
            Ok(_) => {}
        }
    }
}

/// A document may hold exactly one root element; anything after it is
/// trailing garbage.
fn single_root_check(root_seen: &mut bool) -> Result<(), CodecError> {
    if *root_seen {
        return Err(CodecError::Syntax(
            "unexpected content after the root element".to_string(),
        ));
    }
    *root_seen = true;
    Ok(())
}

fn xml_syntax(e: &quick_xml::Error) -> CodecError {
    CodecError::Syntax(format!("invalid XML: {e}"))
}

fn unexpected_root(tag: &[u8]) -> CodecError {
    CodecError::Shape(format!(
        "unexpected root element '{}': expected 'function_call' or 'function_calls'",
        String::from_utf8_lossy(tag)
    ))
}

fn missing_name() -> CodecError {
    CodecError::Semantic("function name not found in call element".to_string())
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
