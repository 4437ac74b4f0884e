//! Region extraction for icon fragment markup.
//!
//! Fragments are a narrow, self-controlled subset of SVG, so this works on
//! tag boundaries rather than a full XML parse: the first `<svg ...>`
//! element is located, then the first `<style ...>` block and the first
//! `<defs>` block inside it are cut out. Nested `<svg>` elements and
//! attributes on `<defs>` are not supported.

use std::ops::Range;

use symbol_common::ParsedFragment;

/// A matched `open ... close` region.
struct Block {
    /// Whole element, including both tags.
    outer: Range<usize>,
    /// Text between the tags.
    inner: Range<usize>,
}

/// Find the first `open_prefix[^>]*>` ... `close` region, lazily.
///
/// With `exact_open` the opening tag must be exactly `open_prefix`.
fn find_block(content: &str, open_prefix: &str, exact_open: bool, close: &str) -> Option<Block> {
    let mut search_from = 0;
    while let Some(rel) = content[search_from..].find(open_prefix) {
        let start = search_from + rel;
        let after_prefix = start + open_prefix.len();

        let inner_start = if exact_open {
            Some(after_prefix)
        } else {
            content[after_prefix..]
                .find('>')
                .map(|gt| after_prefix + gt + 1)
        };

        if let Some(inner_start) = inner_start {
            if let Some(close_rel) = content[inner_start..].find(close) {
                let inner_end = inner_start + close_rel;
                return Some(Block {
                    outer: start..inner_end + close.len(),
                    inner: inner_start..inner_end,
                });
            }
        }

        search_from = after_prefix;
    }
    None
}

/// Remove the first matching block, returning its inner text and the rest.
fn take_block(
    content: &str,
    open_prefix: &str,
    exact_open: bool,
    close: &str,
) -> (String, String) {
    match find_block(content, open_prefix, exact_open, close) {
        Some(block) => {
            let inner = content[block.inner].to_string();
            let mut rest = String::with_capacity(content.len());
            rest.push_str(&content[..block.outer.start]);
            rest.push_str(&content[block.outer.end..]);
            (inner, rest)
        }
        None => (String::new(), content.to_string()),
    }
}

/// Split fragment markup into style, defs and main content.
///
/// Returns `None` when the markup has no `<svg>...</svg>` element.
pub fn extract_svg_parts(markup: &str) -> Option<ParsedFragment> {
    let svg = find_block(markup, "<svg", false, "</svg>")?;
    let inner = &markup[svg.inner];

    let (style, rest) = take_block(inner, "<style", false, "</style>");
    let (defs, rest) = take_block(&rest, "<defs>", true, "</defs>");

    Some(ParsedFragment {
        style,
        defs,
        main_content: rest.trim().to_string(),
    })
}

/// Read an attribute from the root `<svg>` opening tag.
pub fn svg_root_attribute<'a>(markup: &'a str, name: &str) -> Option<&'a str> {
    let svg = find_block(markup, "<svg", false, "</svg>")?;
    let open_tag = &markup[svg.outer.start..svg.inner.start];

    for quote in ['"', '\''] {
        let needle = format!(" {}={}", name, quote);
        // Attributes may also be separated by newlines or tabs.
        let found = open_tag.find(&needle).or_else(|| {
            ["\n", "\t", "\r"]
                .iter()
                .find_map(|ws| open_tag.find(&format!("{}{}={}", ws, name, quote)))
        });
        if let Some(pos) = found {
            let value_start = pos + needle.len();
            let value_end = open_tag[value_start..].find(quote)? + value_start;
            return Some(&open_tag[value_start..value_end]);
        }
    }
    None
}
