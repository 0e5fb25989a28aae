//! Markup node model
//!
//! An element is a tag name, attributes in insertion order, and an ordered
//! list of children. Nothing here is mutated after construction; trees are
//! built, serialized, and dropped.

/// One node of a markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with tag, attributes, and children.
    Element(Element),
    /// Text content, escaped on serialization.
    Text(String),
    /// A raw markup fragment, emitted verbatim and never re-escaped.
    Raw(String),
}

/// An element description prior to serialization.
///
/// Attributes serialize in the order they were added, so output is stable
/// for a fixed construction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child (escaped on serialization).
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    /// Append a raw markup child (emitted verbatim).
    pub fn raw(self, fragment: impl Into<String>) -> Self {
        self.child(Node::Raw(fragment.into()))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_attribute_order() {
        let el = Element::new("button")
            .attr("id", "zoom-in")
            .attr("class", "icon-button");

        assert_eq!(el.tag, "button");
        assert_eq!(
            el.attrs,
            vec![
                ("id".to_string(), "zoom-in".to_string()),
                ("class".to_string(), "icon-button".to_string()),
            ]
        );
    }

    #[test]
    fn builder_preserves_child_order() {
        let el = Element::new("div")
            .text("first")
            .raw("<i></i>")
            .child(Element::new("span"));

        assert_eq!(el.children.len(), 3);
        assert_eq!(el.children[0], Node::Text("first".to_string()));
        assert_eq!(el.children[1], Node::Raw("<i></i>".to_string()));
        assert!(matches!(el.children[2], Node::Element(ref e) if e.tag == "span"));
    }
}
