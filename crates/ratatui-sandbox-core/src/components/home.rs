use crate::component::Component;
use crate::components::header::Header;
use crate::components::header::HeaderProps;
use crate::components::names::NameList;
use crate::node::Node;
use crate::state::State;
use crate::state::Update;

pub const HOME_TITLE: &str = "Develop. Preview. Ship.";

/// Action id carried by the like button.
pub const LIKE_ACTION: &str = "like";

/// Stateful unit: a header, the list of names and a like button.
///
/// The like counter starts at zero for every new page and lives only as long as the page.
#[derive(Clone, Debug)]
pub struct HomePage {
    header: Header,
    names: NameList,
    likes: State<u64>,
}

impl HomePage {
    pub fn new(names: NameList) -> Self {
        Self {
            header: Header::new(HeaderProps::titled(HOME_TITLE)),
            names,
            likes: State::new(0),
        }
    }

    pub fn likes(&self) -> u64 {
        *self.likes.get()
    }

    pub fn handle_click(&mut self) -> Update {
        self.likes.update(|likes| likes.saturating_add(1))
    }
}

pub fn like_label(likes: u64) -> String {
    format!("Likes ({likes})")
}

impl Component for HomePage {
    fn describe(&self) -> Node {
        Node::fragment([
            self.header.describe(),
            self.names.describe(),
            Node::button(like_label(self.likes()), LIKE_ACTION),
        ])
    }

    fn on_action(&mut self, action: &str) -> Update {
        match action {
            LIKE_ACTION => self.handle_click(),
            _ => Update::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> HomePage {
        HomePage::new(NameList::new([
            "Ada Lovelace",
            "Grace Hopper",
            "Margaret Hamilton",
        ]))
    }

    #[test]
    fn starts_at_zero_likes() {
        let p = page();
        assert_eq!(p.likes(), 0);
        assert_eq!(p.describe().button_labels(), ["Likes (0)"]);
    }

    #[test]
    fn k_clicks_read_k_likes() {
        let mut p = page();
        for k in 1..=25u64 {
            assert_eq!(p.handle_click(), Update::Rerender);
            assert_eq!(p.describe().button_labels(), [like_label(k).as_str()]);
        }
    }

    #[test]
    fn click_leaves_heading_and_list_alone() {
        let mut p = page();
        let before = p.describe();
        let _ = p.on_action(LIKE_ACTION);
        let after = p.describe();
        assert_eq!(before.first_heading(), Some(HOME_TITLE));
        assert_eq!(after.first_heading(), before.first_heading());
        assert_eq!(after.first_list(), before.first_list());
        assert_ne!(after, before);
    }

    #[test]
    fn describe_is_idempotent() {
        let mut p = page();
        assert_eq!(p.describe(), p.describe());
        let _ = p.handle_click();
        assert_eq!(p.describe(), p.describe());
    }

    #[test]
    fn unknown_action_is_ignored() {
        let mut p = page();
        assert_eq!(p.on_action("dislike"), Update::None);
        assert_eq!(p.likes(), 0);
    }
}
