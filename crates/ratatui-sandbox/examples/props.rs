//! The header takes its title as a prop; the page maps a list of names to list items.
//! A second header gets no title and shows the fallback.
//!
//! Run with `SANDBOX_LOG=props.log RUST_LOG=debug` to see the title each header receives.

use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui_sandbox::component::Component;
use ratatui_sandbox::components::Header;
use ratatui_sandbox::components::HeaderProps;
use ratatui_sandbox::components::NameList;
use ratatui_sandbox::crossterm_input::input_event_from_crossterm;
use ratatui_sandbox::document::Document;
use ratatui_sandbox::document::TargetArea;
use ratatui_sandbox::input::InputEvent;
use ratatui_sandbox::input::KeyCode;
use ratatui_sandbox::keymap;
use ratatui_sandbox::keymap::Binding;
use ratatui_sandbox::node::Node;
use ratatui_sandbox::root::Root;
use ratatui_sandbox::root::RootOptions;
use std::fs::File;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

struct HomePage {
    header: Header,
    untitled: Header,
    names: NameList,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            header: Header::new(HeaderProps::titled("Develop. Preview. Ship.")),
            untitled: Header::default(),
            names: NameList::new(["Ada Lovelace", "Grace Hopper", "Margaret Hamilton"]),
        }
    }
}

impl Component for HomePage {
    fn describe(&self) -> Node {
        Node::fragment([
            self.header.describe(),
            self.names.describe(),
            self.untitled.describe(),
        ])
    }
}

fn main() -> ratatui_sandbox::Result<()> {
    init_tracing()?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let document = Document::new(terminal).with_target("app", TargetArea::Full);
    let res = mount_and_run(document);

    disable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    res
}

fn mount_and_run<B: Backend>(document: Document<B>) -> ratatui_sandbox::Result<()> {
    let mut root = Root::create(document, &RootOptions::default())?;
    root.render(HomePage::default())?;

    let quit = Binding::new(vec![keymap::key_char('q'), keymap::key(KeyCode::Esc)]);
    loop {
        let Some(ev) = input_event_from_crossterm(crossterm::event::read()?) else {
            continue;
        };
        if let InputEvent::Key(key) = &ev {
            if quit.matches(key) {
                return Ok(());
            }
        }
        root.dispatch(&ev)?;
    }
}

/// Logs go to the file named by `SANDBOX_LOG`; stdout belongs to the UI.
fn init_tracing() -> io::Result<()> {
    let Some(path) = std::env::var_os("SANDBOX_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
