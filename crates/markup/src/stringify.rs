//! HTML serialization of the markup tree
//!
//! Conventional element/attribute/child rules: tag, then attributes in
//! insertion order, then children recursively. Raw children are written
//! byte-for-byte; text and attribute values are escaped.

use std::fmt::{self, Write};

use crate::node::{Element, Node};

/// Tags serialized without an end tag, per the HTML void-element list.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serialize a node tree to an HTML string.
///
/// Output is byte-identical across calls for the same tree.
pub fn stringify(node: &Node) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_node(&mut out, node);
    out
}

/// Serialize a node tree into any [`fmt::Write`] sink.
pub fn write_node<W: Write>(out: &mut W, node: &Node) -> fmt::Result {
    match node {
        Node::Element(element) => write_element(out, element),
        Node::Text(text) => escape_text(out, text),
        Node::Raw(fragment) => out.write_str(fragment),
    }
}

fn write_element<W: Write>(out: &mut W, element: &Element) -> fmt::Result {
    out.write_char('<')?;
    out.write_str(&element.tag)?;
    for (name, value) in &element.attrs {
        write!(out, " {name}=\"")?;
        escape_attr(out, value)?;
        out.write_char('"')?;
    }
    out.write_char('>')?;

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return Ok(());
    }

    for child in &element.children {
        write_node(out, child)?;
    }
    write!(out, "</{}>", element.tag)
}

fn escape_text<W: Write>(out: &mut W, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            _ => out.write_char(ch)?,
        }
    }
    Ok(())
}

fn escape_attr<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    for ch in value.chars() {
        match ch {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '"' => out.write_str("&quot;")?,
            _ => out.write_char(ch)?,
        }
    }
    Ok(())
}
