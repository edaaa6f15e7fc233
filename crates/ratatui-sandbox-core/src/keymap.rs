use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

/// A set of key events that all trigger the same thing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyEvent>,
}

impl Binding {
    pub fn new(keys: Vec<KeyEvent>) -> Self {
        Self { keys }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.keys.iter().any(|k| key_event_matches(k, event))
    }
}

pub fn key_event_matches(pattern: &KeyEvent, event: &KeyEvent) -> bool {
    pattern.code == event.code && modifiers_match(pattern.modifiers, event.modifiers)
}

fn modifiers_match(pattern: KeyModifiers, event: KeyModifiers) -> bool {
    pattern.shift == event.shift && pattern.ctrl == event.ctrl && pattern.alt == event.alt
}

pub fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c))
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code)
}

/// What a key press means to a mounted root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusAction {
    Press,
    Next,
    Prev,
}

/// Keys that move focus between buttons and press the focused one.
///
/// Defaults: `Enter` or `Space` presses, `Tab` moves forward, `Shift-Tab` moves back.
#[derive(Clone, Debug)]
pub struct ActivationBindings {
    pub press: Binding,
    pub focus_next: Binding,
    pub focus_prev: Binding,
}

impl Default for ActivationBindings {
    fn default() -> Self {
        Self {
            press: Binding::new(vec![key(KeyCode::Enter), key_char(' ')]),
            focus_next: Binding::new(vec![key(KeyCode::Tab)]),
            focus_prev: Binding::new(vec![
                key(KeyCode::BackTab),
                key(KeyCode::BackTab).with_modifiers(KeyModifiers {
                    shift: true,
                    ctrl: false,
                    alt: false,
                }),
            ]),
        }
    }
}

impl ActivationBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<FocusAction> {
        if self.press.matches(key) {
            return Some(FocusAction::Press);
        }
        if self.focus_next.matches(key) {
            return Some(FocusAction::Next);
        }
        if self.focus_prev.matches(key) {
            return Some(FocusAction::Prev);
        }
        None
    }
}
