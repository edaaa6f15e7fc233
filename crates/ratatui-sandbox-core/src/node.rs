//! Descriptions: plain values saying what should be on screen.
//!
//! A [`Node`] is never the rendered output itself. Units produce nodes, the root paints them.

/// The key a list item is identified by across renders.
///
/// Keys are expected to be unique among the siblings of one list. Nothing checks this.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    pub key: Key,
    pub content: String,
}

impl ListItem {
    pub fn new(key: impl Into<Key>, content: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content: content.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Fragment(Vec<Node>),
    Heading(String),
    Text(String),
    List(Vec<ListItem>),
    Button {
        label: String,
        /// Passed back to the owning unit's `on_action` when the button is pressed.
        action: String,
    },
}

impl Node {
    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Self::Fragment(children.into_iter().collect())
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn button(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Button {
            label: label.into(),
            action: action.into(),
        }
    }

    /// Depth-first iterator over this node and all of its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Text of the first heading in the tree, if any.
    pub fn first_heading(&self) -> Option<&str> {
        self.walk().find_map(|n| match n {
            Node::Heading(t) => Some(t.as_str()),
            _ => None,
        })
    }

    /// Items of the first list in the tree, if any.
    pub fn first_list(&self) -> Option<&[ListItem]> {
        self.walk().find_map(|n| match n {
            Node::List(items) => Some(items.as_slice()),
            _ => None,
        })
    }

    /// Labels of every button, in paint order.
    pub fn button_labels(&self) -> Vec<&str> {
        self.walk()
            .filter_map(|n| match n {
                Node::Button { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }
}

pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Fragment(children) = node {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}
