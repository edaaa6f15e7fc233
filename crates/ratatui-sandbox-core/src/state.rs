/// Whether a unit wants the root to describe it again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub enum Update {
    #[default]
    None,
    Rerender,
}

impl Update {
    pub fn needs_rerender(self) -> bool {
        self == Update::Rerender
    }
}

/// A single piece of state owned by a stateful unit.
///
/// The only way to change the value is [`State::update`], which hands the current value to the
/// update function and reports whether a re-render is needed.
#[derive(Clone, Debug, Default)]
pub struct State<T> {
    value: T,
}

impl<T: PartialEq> State<T> {
    pub fn new(initial: T) -> Self {
        Self { value: initial }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value with `f(current)`.
    ///
    /// Returns [`Update::None`] when the new value equals the old one.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> Update {
        let next = f(&self.value);
        if next == self.value {
            return Update::None;
        }
        self.value = next;
        Update::Rerender
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_receives_current_value() {
        let mut s = State::new(41u64);
        let mut seen = None;
        let u = s.update(|v| {
            seen = Some(*v);
            v + 1
        });
        assert_eq!(seen, Some(41));
        assert_eq!(*s.get(), 42);
        assert_eq!(u, Update::Rerender);
    }

    #[test]
    fn unchanged_value_skips_rerender() {
        let mut s = State::new(String::from("x"));
        assert_eq!(s.update(|v| v.clone()), Update::None);
        assert!(!s.update(|v| v.clone()).needs_rerender());
    }
}
