//! Search response parsing.
//!
//! The tracker answers with an XML document containing one `item` element
//! per matched issue. Extraction is regex-driven: `item` blocks first, then
//! the first occurrence of each child element inside a block, plus the `id`
//! attribute off the `status` and `resolution` opening tags. A missing
//! child yields an empty string; only a document that is not XML at all
//! fails the parse.

mod error;
mod record;

pub use error::ParseError;
pub use record::IssueRecord;

use regex::Regex;

/// Compiles a pattern built from hard-coded tag names.
fn compiled(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hard-coded pattern compiles")
}

/// Matches `<tag ...>` without also matching longer tag names.
fn open_pattern(tag: &str) -> String {
    format!(r"<{tag}(\s[^>]*)?>")
}

/// Matches a full `<tag ...>content</tag>` block, attributes in group 1,
/// content in group 2.
fn block_pattern(tag: &str) -> String {
    format!(r"<{tag}(\s[^>]*)?>([\s\S]*?)</{tag}>")
}

/// Parses a search response body into issue records.
///
/// # Errors
///
/// Returns [`ParseError::MalformedDocument`] if the body is not an XML
/// document or contains an unterminated `item` element. Missing fields
/// inside a well-formed `item` never fail the record.
pub fn parse_search_response(body: &str) -> Result<Vec<IssueRecord>, ParseError> {
    let document = body.trim_start_matches('\u{feff}').trim();
    if !document.starts_with('<') {
        return Err(ParseError::MalformedDocument {
            reason: "response body is not an XML document".to_string(),
        });
    }

    let opens = compiled(&open_pattern("item")).find_iter(document).count();
    let block_re = compiled(&block_pattern("item"));
    let items: Vec<&str> = block_re
        .captures_iter(document)
        .filter_map(|caps| caps.get(2).map(|m| m.as_str()))
        .collect();

    if opens != items.len() {
        return Err(ParseError::MalformedDocument {
            reason: "unterminated <item> element".to_string(),
        });
    }

    Ok(items.into_iter().map(parse_item).collect())
}

/// Decodes a resolution id attribute.
///
/// The tracker omits the attribute entirely for unresolved issues; that
/// and any unparsable value decode to 0. Radix-prefixed forms (`0x1f`,
/// `#1f`, leading-zero octal) are accepted, with an optional sign.
#[must_use]
pub fn parse_resolution_id(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let (sign, magnitude) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let parsed = if let Some(hex) = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
        .or_else(|| magnitude.strip_prefix('#'))
    {
        i64::from_str_radix(hex, 16)
    } else if magnitude.len() > 1 && magnitude.starts_with('0') {
        i64::from_str_radix(&magnitude[1..], 8)
    } else {
        magnitude.parse()
    };

    parsed.map_or(0, |value| sign * value)
}

fn parse_item(item: &str) -> IssueRecord {
    let resolution_id = child_id_attribute(item, "resolution");

    IssueRecord {
        link: child_text(item, "link"),
        key: child_text(item, "key"),
        description: child_text(item, "summary"),
        status: child_text(item, "status"),
        status_id: child_id_attribute(item, "status"),
        resolution: child_text(item, "resolution"),
        resolution_id: parse_resolution_id(&resolution_id),
        fix_version: child_text(item, "fixVersion"),
    }
}

/// Text content of the first `tag` child, entity-decoded; empty when the
/// child is absent.
fn child_text(item: &str, tag: &str) -> String {
    compiled(&block_pattern(tag))
        .captures(item)
        .and_then(|caps| caps.get(2).map(|m| m.as_str()))
        .map(|text| decode_entities(text.trim()))
        .unwrap_or_default()
}

/// `id` attribute of the first `tag` child; empty when the child or the
/// attribute is absent.
fn child_id_attribute(item: &str, tag: &str) -> String {
    compiled(&block_pattern(tag))
        .captures(item)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .and_then(|attrs| attribute_value(&attrs, "id"))
        .unwrap_or_default()
}

/// Looks up one attribute in the attribute portion of an opening tag.
///
/// Both quoting styles are accepted: `key="value"` and `key='value'`.
fn attribute_value(attrs: &str, name: &str) -> Option<String> {
    let re = compiled(r#"(\w+)=["']([^"']*)["']"#);
    for caps in re.captures_iter(attrs) {
        if let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) {
            if key.as_str() == name {
                return Some(value.as_str().to_string());
            }
        }
    }
    None
}

/// Decodes the five predefined XML entities.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
