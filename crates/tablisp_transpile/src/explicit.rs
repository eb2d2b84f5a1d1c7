use itertools::Itertools as _;
use tablisp_ast::{Node, LIST_TAG};

/// Renders a parsed root with every call written explicitly, `name(a, b)`.
///
/// List literals and anonymous lists lose their tag and become `(a, b)`. A call without
/// arguments keeps its parentheses so it stays distinct from a reference.
pub fn print_explicit(root: Option<&Node>) -> String {
    root.map(explicit).unwrap_or_default()
}

fn explicit(node: &Node) -> String {
    match node {
        Node::Item(name) => name.clone(),
        Node::List(tag, children) => {
            let args = children.iter().map(explicit).join(", ");
            if tag.is_empty() || tag == LIST_TAG {
                format!("({args})")
            } else {
                format!("{tag}({args})")
            }
        }
    }
}
