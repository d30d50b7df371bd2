//! Helpers over roxmltree nodes

use crate::error::LoadError;
use roxmltree::{Document, Node};

/// Parse an in-memory XML document
///
/// The returned document borrows `xml`, so the text must outlive every
/// node taken from it.
pub fn load_str(xml: &str) -> Result<Document<'_>, LoadError> {
    let doc = Document::parse(xml)?;
    log::debug!(
        "Loaded XML document with root <{}> ({} elements)",
        doc.root_element().tag_name().name(),
        doc.descendants().filter(|node| node.is_element()).count()
    );
    Ok(doc)
}

/// Find the first child element with the given tag name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
}

/// Find all child elements with the given tag name, in document order.
pub fn find_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

/// Find every element with the given tag name in pre-order, `node` included.
pub fn find_descendants<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .filter(move |desc| desc.is_element() && desc.tag_name().name() == tag)
}

/// Direct text of an element, untrimmed
///
/// Text split by comments or CDATA sections is joined. An element with no
/// text at all gives an empty string.
pub fn element_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}
