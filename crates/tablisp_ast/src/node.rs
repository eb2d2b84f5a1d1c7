//! The syntax tree node

use std::fmt::{Debug, Formatter};

/// The tag given to list literals, both `(a, b)` and an explicit `list(a, b)`
pub const LIST_TAG: &str = "list";

/// A node in the syntax tree.
///
/// An [Item](Node::Item) is a bare word. Whether it names a function, a variable or an integer is
/// left to whoever consumes the tree. A [List](Node::List) is an ordered sequence of children with
/// a tag:
/// - a function name, making it a call
/// - [LIST_TAG], making it a list literal
/// - the empty string, making it an anonymous grouping, such as the statements of a script
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Item(String),
    List(String, Vec<Node>),
}

impl Node {
    /// Creates an item
    pub fn item(name: impl Into<String>) -> Self {
        Self::Item(name.into())
    }

    /// Creates a call of `tag` with the given arguments
    pub fn call(tag: impl Into<String>, args: impl IntoIterator<Item = Node>) -> Self {
        Self::List(tag.into(), args.into_iter().collect())
    }

    /// Creates a list literal
    pub fn list_literal(elements: impl IntoIterator<Item = Node>) -> Self {
        Self::call(LIST_TAG, elements)
    }

    /// Creates an anonymous grouping
    pub fn sequence(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self::call("", nodes)
    }

    /// The text of an item, or the tag of a list
    pub fn name(&self) -> &str {
        match self {
            Node::Item(name) => name,
            Node::List(tag, _) => tag,
        }
    }

    /// The children of a list. Items have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Item(_) => &[],
            Node::List(_, children) => children,
        }
    }

    pub fn is_item(&self) -> bool {
        matches!(self, Node::Item(_))
    }

    /// Whether this is a list with an empty tag
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Node::List(tag, _) if tag.is_empty())
    }

    pub fn is_list_literal(&self) -> bool {
        matches!(self, Node::List(tag, _) if tag == LIST_TAG)
    }

    /// The number of nested lists below and including this node
    pub fn depth(&self) -> usize {
        match self {
            Node::Item(_) => 0,
            Node::List(_, children) => 1 + children.iter().map(Node::depth).max().unwrap_or(0),
        }
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Item(name) => write!(f, "Item({name:?})"),
            Node::List(tag, children) => {
                write!(f, "List({tag:?}) ")?;
                f.debug_list().entries(children).finish()
            }
        }
    }
}
