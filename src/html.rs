//! Small helpers for turning protocol results (base64 screenshots/PDFs) into bytes,
//! and for pulling visible text out of a fragment of markup.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{CdpError, Result};

pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    STANDARD.decode(data).map_err(CdpError::from)
}

const SKIPPED_TAGS: [&str; 3] = ["script", "style", "template"];

/// Extracts visible text from an HTML fragment: walks the markup ignoring the
/// content of `<script>`/`<style>`/`<template>` tags, HTML-entity-decodes the
/// remaining text nodes, and joins them with `separator` (trimming each node first
/// when `strip` is set).
pub fn extract_text(html: &str, separator: &str, strip: bool) -> String {
    let chars: Vec<char> = html.chars().collect();
    let mut parts = Vec::new();
    let mut skip_stack: Vec<String> = Vec::new();
    let mut text_buf = String::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '<' {
            if !text_buf.is_empty() {
                if skip_stack.is_empty() {
                    parts.push(decode_entities(&text_buf));
                }
                text_buf.clear();
            }
            let start = i + 1;
            let mut end = start;
            while end < chars.len() && chars[end] != '>' {
                end += 1;
            }
            let tag_content: String = chars[start..end].iter().collect();
            i = (end + 1).min(chars.len());

            let is_closing = tag_content.starts_with('/');
            let name_source = tag_content.strip_prefix('/').unwrap_or(&tag_content);
            let tag_name: String = name_source
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase();

            if SKIPPED_TAGS.contains(&tag_name.as_str()) {
                if is_closing {
                    if skip_stack.last() == Some(&tag_name) {
                        skip_stack.pop();
                    }
                } else if !tag_content.trim_end().ends_with('/') {
                    skip_stack.push(tag_name);
                }
            }
        } else {
            text_buf.push(chars[i]);
            i += 1;
        }
    }
    if !text_buf.is_empty() && skip_stack.is_empty() {
        parts.push(decode_entities(&text_buf));
    }

    let fragments: Vec<String> = parts
        .into_iter()
        .map(|part| if strip { part.trim().to_string() } else { part })
        .collect();
    fragments.join(separator)
}

fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '&' {
            out.push(c);
            continue;
        }
        let mut entity = String::new();
        while let Some(&next) = chars.peek() {
            if next == ';' || entity.len() > 10 {
                break;
            }
            entity.push(next);
            chars.next();
        }
        if chars.peek() == Some(&';') {
            chars.next();
            match decode_entity_name(&entity) {
                Some(decoded) => out.push_str(&decoded),
                None => {
                    out.push('&');
                    out.push_str(&entity);
                    out.push(';');
                }
            }
        } else {
            out.push('&');
            out.push_str(&entity);
        }
    }
    out
}

fn decode_entity_name(entity: &str) -> Option<String> {
    if let Some(hex) = entity.strip_prefix('x').or_else(|| entity.strip_prefix('X')) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32).map(String::from);
    }
    if let Some(rest) = entity.strip_prefix('#') {
        if let Some(hex) = rest.strip_prefix('x').or_else(|| rest.strip_prefix('X')) {
            return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32).map(String::from);
        }
        return rest.parse::<u32>().ok().and_then(char::from_u32).map(String::from);
    }
    Some(
        match entity {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            "apos" => "'",
            "nbsp" => "\u{00A0}",
            "copy" => "\u{00A9}",
            "reg" => "\u{00AE}",
            "mdash" => "\u{2014}",
            "ndash" => "\u{2013}",
            "hellip" => "\u{2026}",
            _ => return None,
        }
        .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_script_and_style_content() {
        let html = "<div>hi <script>alert(1)</script><style>.x{}</style> there</div>";
        assert_eq!(extract_text(html, "", false), "hi  there");
    }

    #[test]
    fn decodes_entities_and_joins_with_separator() {
        let html = "<p>Tom &amp; Jerry</p><p>caf&#233;</p>";
        assert_eq!(extract_text(html, " | ", true), "Tom & Jerry | café");
    }

    #[test]
    fn ignores_nested_template_content() {
        let html = "<template><div>hidden</div></template>visible";
        assert_eq!(extract_text(html, "", false), "visible");
    }
}
