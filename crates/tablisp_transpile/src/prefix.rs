use itertools::Itertools as _;
use tablisp_ast::Node;

/// Renders a parsed root as prefix notation, `None` rendering as nothing
pub fn transpile(root: Option<&Node>) -> String {
    root.map(render).unwrap_or_default()
}

/// Renders a node as prefix notation.
///
/// An anonymous list is spliced, its children separated by one space. Every other list is
/// parenthesized with its tag first.
pub fn render(node: &Node) -> String {
    match node {
        Node::Item(name) => name.clone(),
        Node::List(tag, children) if tag.is_empty() => children.iter().map(render).join(" "),
        Node::List(tag, children) => {
            let parts = std::iter::once(tag.clone()).chain(children.iter().map(render));
            format!("({})", parts.format(" "))
        }
    }
}
