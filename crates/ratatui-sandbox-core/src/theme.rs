use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub heading: Style,
    pub text: Style,
    pub bullet: String,
    pub button: Style,
    pub button_focused: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            heading: Style::default().bold().cyan(),
            text: Style::default(),
            bullet: "• ".to_string(),
            button: Style::default().bold(),
            button_focused: Style::default().reversed(),
        }
    }
}
