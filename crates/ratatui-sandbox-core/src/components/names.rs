use crate::component::Component;
use crate::node::ListItem;
use crate::node::Node;

/// Presentational unit mapping names to list items keyed by the name itself.
///
/// Names are expected to be unique. Duplicates produce duplicate keys and are not detected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Component for NameList {
    fn describe(&self) -> Node {
        Node::List(
            self.names
                .iter()
                .map(|name| ListItem::new(name.as_str(), name.as_str()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Key;

    #[test]
    fn items_keep_order_and_are_keyed_by_value() {
        let names = [
            "Ada Lovelace",
            "Grace Hopper",
            "Margaret Hamilton",
            "Radia Perlman",
        ];
        let node = NameList::new(names).describe();
        let items = node.first_list().unwrap_or_default();
        assert_eq!(items.len(), names.len());
        for (item, name) in items.iter().zip(names) {
            assert_eq!(item.key, Key::from(name));
            assert_eq!(item.content, name);
        }
    }

    #[test]
    fn empty_list_describes_no_items() {
        assert_eq!(NameList::default().describe(), Node::List(Vec::new()));
    }
}
