use crate::component::Component;
use crate::node::Node;

/// Shown when a header gets no title, or an empty one.
pub const DEFAULT_TITLE: &str = "Default title";

/// Maps an optional title to the text a header displays.
pub fn resolve_title(title: Option<&str>) -> &str {
    match title {
        Some(t) if !t.is_empty() => t,
        _ => DEFAULT_TITLE,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderProps {
    pub title: Option<String>,
}

impl HeaderProps {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

/// Presentational unit rendering a single heading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    props: HeaderProps,
}

impl Header {
    pub fn new(props: HeaderProps) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &HeaderProps {
        &self.props
    }
}

impl Component for Header {
    fn describe(&self) -> Node {
        let title = self.props.title.as_deref();
        tracing::debug!(?title, "header received title");
        Node::heading(resolve_title(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_title_is_shown_verbatim() {
        for t in ["React", "Develop. Preview. Ship.", " ", "日本語"] {
            let h = Header::new(HeaderProps::titled(t));
            assert_eq!(h.describe(), Node::Heading(t.to_string()));
        }
    }

    #[test]
    fn missing_or_empty_title_falls_back() {
        assert_eq!(Header::default().describe(), Node::heading("Default title"));
        assert_eq!(
            Header::new(HeaderProps::titled("")).describe(),
            Node::heading("Default title")
        );
    }

    #[test]
    fn resolve_title_is_total() {
        assert_eq!(resolve_title(None), DEFAULT_TITLE);
        assert_eq!(resolve_title(Some("")), DEFAULT_TITLE);
        assert_eq!(resolve_title(Some("x")), "x");
    }
}
