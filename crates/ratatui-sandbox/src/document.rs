use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;

/// Where a mount target sits on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetArea {
    /// The whole frame, following terminal resizes.
    #[default]
    Full,
    /// A fixed rectangle, clipped to the frame.
    Fixed(Rect),
}

impl TargetArea {
    pub fn resolve(self, frame: Rect) -> Rect {
        match self {
            TargetArea::Full => frame,
            TargetArea::Fixed(area) => area.intersection(frame),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountTarget {
    pub id: String,
    pub area: TargetArea,
}

/// A terminal plus the named containers a root may attach to.
pub struct Document<B: Backend> {
    terminal: Terminal<B>,
    targets: Vec<MountTarget>,
}

impl<B: Backend> Document<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            targets: Vec::new(),
        }
    }

    pub fn with_target(mut self, id: impl Into<String>, area: TargetArea) -> Self {
        self.add_target(id, area);
        self
    }

    /// Registers a target. A later target with the same id replaces the earlier one.
    pub fn add_target(&mut self, id: impl Into<String>, area: TargetArea) {
        let id = id.into();
        self.targets.retain(|t| t.id != id);
        self.targets.push(MountTarget { id, area });
    }

    pub fn target(&self, id: &str) -> Option<&MountTarget> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn targets(&self) -> &[MountTarget] {
        &self.targets
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }
}
