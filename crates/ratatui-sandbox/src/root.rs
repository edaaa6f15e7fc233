//! The render root: bootstrap against a mount target, paint the app, feed it input.

use crate::document::Document;
use crate::document::TargetArea;
use crate::error::Error;
use crate::error::Result;
use ratatui::backend::Backend;
use ratatui_sandbox_core::component::Component;
use ratatui_sandbox_core::input::InputEvent;
use ratatui_sandbox_core::input::MouseButton;
use ratatui_sandbox_core::input::MouseEventKind;
use ratatui_sandbox_core::keymap::ActivationBindings;
use ratatui_sandbox_core::keymap::FocusAction;
use ratatui_sandbox_core::node::Node;
use ratatui_sandbox_core::paint::PaintOptions;
use ratatui_sandbox_core::paint::Painted;
use ratatui_sandbox_core::paint::paint_with_options;
use ratatui_sandbox_core::theme::Theme;

pub const DEFAULT_MOUNT_ID: &str = "app";

#[derive(Clone, Debug)]
pub struct RootOptions {
    /// Id of the document target the root attaches to.
    pub mount_id: String,
    pub theme: Theme,
    pub activation: ActivationBindings,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            theme: Theme::default(),
            activation: ActivationBindings::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootStatus {
    Unmounted,
    Mounted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event meant nothing to the mounted app.
    Ignored,
    /// A button was pressed but the app asked for no re-render.
    Handled,
    /// The screen was redrawn.
    Rerendered,
}

pub struct Root<B: Backend> {
    document: Document<B>,
    mount_id: String,
    target: TargetArea,
    theme: Theme,
    activation: ActivationBindings,

    app: Option<Box<dyn Component>>,
    last: Option<Node>,
    painted: Painted,
    focus: Option<usize>,
}

impl<B: Backend> Root<B> {
    /// Binds a root to the target named by `options.mount_id`.
    ///
    /// Fails with [`Error::MountTargetNotFound`] when the document has no such target.
    pub fn create(document: Document<B>, options: &RootOptions) -> Result<Self> {
        let Some(target) = document.target(&options.mount_id) else {
            tracing::warn!(mount_id = %options.mount_id, "mount target not found");
            return Err(Error::MountTargetNotFound(options.mount_id.clone()));
        };
        let target = target.area;
        tracing::debug!(mount_id = %options.mount_id, ?target, "root created");

        Ok(Self {
            document,
            mount_id: options.mount_id.clone(),
            target,
            theme: options.theme.clone(),
            activation: options.activation.clone(),
            app: None,
            last: None,
            painted: Painted::default(),
            focus: None,
        })
    }

    /// Mounts `app` and paints it. Any previously mounted app is dropped along with its state.
    pub fn render(&mut self, app: impl Component + 'static) -> Result<()> {
        if self.app.is_some() {
            tracing::debug!(mount_id = %self.mount_id, "replacing mounted app");
        }
        self.app = Some(Box::new(app));
        self.last = None;
        self.focus = None;
        self.commit(true)?;
        tracing::debug!(mount_id = %self.mount_id, "mounted");
        Ok(())
    }

    /// Describes the app again and repaints it, even if nothing changed.
    pub fn redraw(&mut self) -> Result<()> {
        self.commit(true)?;
        Ok(())
    }

    pub fn dispatch(&mut self, event: &InputEvent) -> Result<DispatchOutcome> {
        if self.app.is_none() {
            return Err(Error::NotMounted);
        }

        match event {
            InputEvent::Key(key) => match self.activation.action_for(key) {
                Some(FocusAction::Press) => match self.focus {
                    Some(index) => self.press(index),
                    None => Ok(DispatchOutcome::Ignored),
                },
                Some(FocusAction::Next) => self.move_focus(1),
                Some(FocusAction::Prev) => self.move_focus(-1),
                None => {
                    tracing::trace!(?key, "unbound key");
                    Ok(DispatchOutcome::Ignored)
                }
            },
            InputEvent::Mouse(m) => {
                if m.kind != MouseEventKind::Down(MouseButton::Left) {
                    return Ok(DispatchOutcome::Ignored);
                }
                match self.painted.button_at(m.x, m.y) {
                    Some(index) => self.press(index),
                    None => {
                        tracing::trace!(x = m.x, y = m.y, "click outside any button");
                        Ok(DispatchOutcome::Ignored)
                    }
                }
            }
            InputEvent::Resize { width, height } => {
                tracing::debug!(width, height, "resize");
                self.commit(true)?;
                Ok(DispatchOutcome::Rerendered)
            }
        }
    }

    /// Drops the mounted app and clears the screen.
    pub fn unmount(&mut self) -> Result<()> {
        if self.app.take().is_none() {
            return Ok(());
        }
        self.last = None;
        self.painted = Painted::default();
        self.focus = None;
        self.document.terminal_mut().draw(|_| {})?;
        tracing::debug!(mount_id = %self.mount_id, "unmounted");
        Ok(())
    }

    pub fn status(&self) -> RootStatus {
        if self.app.is_some() {
            RootStatus::Mounted
        } else {
            RootStatus::Unmounted
        }
    }

    /// The description currently on screen.
    pub fn description(&self) -> Option<&Node> {
        self.last.as_ref()
    }

    /// Button hit regions from the last paint.
    pub fn painted(&self) -> &Painted {
        &self.painted
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    pub fn document(&self) -> &Document<B> {
        &self.document
    }

    pub fn into_document(self) -> Document<B> {
        self.document
    }

    fn press(&mut self, index: usize) -> Result<DispatchOutcome> {
        let Some(action) = self.painted.buttons.get(index).map(|b| b.action.clone()) else {
            return Ok(DispatchOutcome::Ignored);
        };
        let Some(app) = self.app.as_mut() else {
            return Err(Error::NotMounted);
        };

        let update = app.on_action(&action);
        tracing::debug!(%action, ?update, "button pressed");

        let focus_moved = self.focus != Some(index);
        self.focus = Some(index);
        if (update.needs_rerender() || focus_moved) && self.commit(focus_moved)? {
            return Ok(DispatchOutcome::Rerendered);
        }
        Ok(DispatchOutcome::Handled)
    }

    fn move_focus(&mut self, delta: isize) -> Result<DispatchOutcome> {
        let count = self.painted.buttons.len();
        if count == 0 {
            return Ok(DispatchOutcome::Ignored);
        }
        let current = self.focus.unwrap_or(0) as isize;
        self.focus = Some((current + delta).rem_euclid(count as isize) as usize);
        self.commit(true)?;
        Ok(DispatchOutcome::Rerendered)
    }

    /// Describes the app and draws the result. With `force == false`, an unchanged description is
    /// not drawn again. Returns whether a draw happened.
    fn commit(&mut self, force: bool) -> Result<bool> {
        let Some(app) = self.app.as_ref() else {
            return Err(Error::NotMounted);
        };
        let node = app.describe();
        if !force && self.last.as_ref() == Some(&node) {
            tracing::trace!("description unchanged, skipping draw");
            return Ok(false);
        }

        let buttons = node.button_labels().len();
        self.focus = match self.focus {
            Some(i) if i < buttons => Some(i),
            _ if buttons > 0 => Some(0),
            _ => None,
        };

        let options = PaintOptions {
            focused: self.focus,
        };
        let target = self.target;
        let theme = &self.theme;
        let mut painted = Painted::default();
        self.document.terminal_mut().draw(|frame| {
            let area = target.resolve(frame.area());
            painted = paint_with_options(&node, area, frame.buffer_mut(), theme, &options);
        })?;

        tracing::trace!(rows = painted.rows, buttons = painted.buttons.len(), "drew");
        self.painted = painted;
        self.last = Some(node);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui_sandbox_core::input::KeyCode;
    use ratatui_sandbox_core::input::KeyEvent;
    use ratatui_sandbox_core::state::Update;

    struct Counter {
        a: u32,
        b: u32,
    }

    impl Component for Counter {
        fn describe(&self) -> Node {
            Node::fragment([
                Node::button(format!("a={}", self.a), "a"),
                Node::button(format!("b={}", self.b), "b"),
                Node::button("noop", "noop"),
            ])
        }

        fn on_action(&mut self, action: &str) -> Update {
            match action {
                "a" => self.a += 1,
                "b" => self.b += 1,
                _ => return Update::None,
            }
            Update::Rerender
        }
    }

    /// Asks for a re-render on every press without changing what it describes.
    struct Unchanging;

    impl Component for Unchanging {
        fn describe(&self) -> Node {
            Node::button("same", "same")
        }

        fn on_action(&mut self, _action: &str) -> Update {
            Update::Rerender
        }
    }

    fn frames_drawn(r: &mut Root<TestBackend>) -> usize {
        r.document.terminal_mut().get_frame().count()
    }

    fn root() -> Root<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        let doc = Document::new(terminal).with_target("app", TargetArea::Full);
        Root::create(doc, &RootOptions::default()).unwrap()
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code))
    }

    #[test]
    fn focus_starts_on_first_button_and_wraps() {
        let mut r = root();
        r.render(Counter { a: 0, b: 0 }).unwrap();
        assert_eq!(r.focus(), Some(0));

        assert_eq!(
            r.dispatch(&key(KeyCode::BackTab)).unwrap(),
            DispatchOutcome::Rerendered
        );
        assert_eq!(r.focus(), Some(2));
        r.dispatch(&key(KeyCode::Tab)).unwrap();
        r.dispatch(&key(KeyCode::Tab)).unwrap();
        assert_eq!(r.focus(), Some(1));
    }

    #[test]
    fn enter_presses_the_focused_button() {
        let mut r = root();
        r.render(Counter { a: 0, b: 0 }).unwrap();
        r.dispatch(&key(KeyCode::Tab)).unwrap();
        assert_eq!(
            r.dispatch(&key(KeyCode::Enter)).unwrap(),
            DispatchOutcome::Rerendered
        );
        assert_eq!(
            r.description().map(Node::button_labels),
            Some(vec!["a=0", "b=1", "noop"])
        );
    }

    #[test]
    fn button_without_rerender_is_handled() {
        let mut r = root();
        r.render(Counter { a: 0, b: 0 }).unwrap();
        r.dispatch(&key(KeyCode::BackTab)).unwrap();
        assert_eq!(
            r.dispatch(&key(KeyCode::Enter)).unwrap(),
            DispatchOutcome::Handled
        );
    }

    #[test]
    fn unchanged_description_skips_the_draw() {
        let mut r = root();
        r.render(Unchanging).unwrap();
        let drawn = frames_drawn(&mut r);

        assert_eq!(
            r.dispatch(&key(KeyCode::Enter)).unwrap(),
            DispatchOutcome::Handled
        );
        assert_eq!(frames_drawn(&mut r), drawn);

        r.redraw().unwrap();
        assert_eq!(frames_drawn(&mut r), drawn + 1);
    }

    #[test]
    fn dispatch_before_render_fails() {
        let mut r = root();
        assert_eq!(r.status(), RootStatus::Unmounted);
        assert!(matches!(
            r.dispatch(&key(KeyCode::Enter)),
            Err(Error::NotMounted)
        ));
        assert!(matches!(r.redraw(), Err(Error::NotMounted)));
    }

    #[test]
    fn unknown_mount_id_is_fatal() {
        let terminal = Terminal::new(TestBackend::new(10, 2)).unwrap();
        let doc = Document::new(terminal).with_target("app", TargetArea::Full);
        let options = RootOptions {
            mount_id: "root".to_string(),
            ..Default::default()
        };
        match Root::create(doc, &options) {
            Err(Error::MountTargetNotFound(id)) => assert_eq!(id, "root"),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("bootstrap should fail"),
        }
    }
}
