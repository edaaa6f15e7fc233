use crate::node::Node;
use crate::state::Update;

/// A unit: something that can describe itself.
///
/// Presentational units only implement [`Component::describe`]. Stateful units also react to
/// button actions coming from the root.
pub trait Component {
    fn describe(&self) -> Node;

    /// Called by the root when a button carrying `action` is pressed.
    fn on_action(&mut self, action: &str) -> Update {
        let _ = action;
        Update::None
    }
}
