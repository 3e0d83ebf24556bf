//! Main TUI application state and logic

use crate::engine::VisualisationEngine;
use crate::structures::{Outcome, Structure, StructureKind};
use crate::ui::command::{self, Choice, Command};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which screen the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Picking which structure to work on.
    Choose,
    /// Operating on the active structure.
    Operate,
}

/// Which pane is currently focused (for scrolling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Structure,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane.
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Structure => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Structure,
        }
    }
}

/// One line in the output log.
pub struct LogLine {
    pub text: String,
    pub kind: LogKind,
}

/// How a log line is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// Echo of a typed command.
    Command,
    /// Ordinary informational output.
    Info,
    /// Empty-structure, not-found and invalid-input notices.
    Notice,
}

/// The main application state
pub struct App {
    /// The visualisation engine holding the active structure
    engine: VisualisationEngine,

    /// Which screen is shown
    screen: Screen,

    /// Currently focused pane
    focused_pane: FocusedPane,

    /// The command line being typed
    input: String,

    /// Command echoes and operation outcomes, oldest first
    output: Vec<LogLine>,

    /// Per-pane scroll offsets
    structure_scroll: usize,
    output_scroll: usize,

    /// Whether the app should quit
    should_quit: bool,

    /// Status message to display
    status_message: String,
}

impl App {
    /// Create a new app around the given engine.
    pub fn new(engine: VisualisationEngine) -> Self {
        let mut app = App {
            engine,
            screen: Screen::Choose,
            focused_pane: FocusedPane::Structure,
            input: String::new(),
            output: Vec::new(),
            structure_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Choose a data structure"),
        };
        app.log_info("Welcome to the Data Structure Visualiser!");
        app.log_info("Here you can view data structures and perform operations on them.");
        app.log_info("Type 'help' for a list of available commands.");
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so resizes repaint promptly
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, then the input line, then the status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let pane_area = main_chunks[0];
        let input_area = main_chunks[1];
        let status_area = main_chunks[2];

        // Left column: structure over output; right column: menu
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(pane_area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        let rendering = self.engine.render();
        super::panes::render_structure_pane(
            frame,
            left_rows[0],
            self.engine.kind().label(),
            &rendering,
            self.focused_pane == FocusedPane::Structure,
            &mut self.structure_scroll,
        );

        super::panes::render_output_pane(
            frame,
            left_rows[1],
            &self.output,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_menu_pane(frame, columns[1], self.screen, self.engine.kind());

        super::panes::render_input_pane(frame, input_area, &self.input);

        super::panes::render_status_bar(
            frame,
            status_area,
            self.engine.kind().label(),
            &self.status_message,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.quit();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Structure => {
                    self.structure_scroll = self.structure_scroll.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Structure => {
                    self.structure_scroll = self.structure_scroll.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
            },
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    /// Take the typed line, echo it, and dispatch it to the current screen.
    fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input);
        let line = line.trim().to_string();
        if line.is_empty() {
            return;
        }

        self.output.push(LogLine {
            text: format!("> {}", line),
            kind: LogKind::Command,
        });

        match self.screen {
            Screen::Choose => self.handle_choice(&line),
            Screen::Operate => self.handle_operation(&line),
        }

        // New output: snap the log to the bottom.
        self.output_scroll = usize::MAX;
    }

    fn handle_choice(&mut self, line: &str) {
        match command::parse_choice(line) {
            Choice::Structure(kind) => {
                // A fresh, empty structure every time; the previous one is
                // dropped along with all of its nodes.
                self.engine.set_structure(Structure::new(kind));
                self.screen = Screen::Operate;
                self.structure_scroll = 0;
                self.log_info(format!(
                    "{} chosen. You can now perform operations.",
                    kind.label()
                ));
                self.status_message = format!("{} selected", kind.label());
            }
            Choice::Help => self.log_help(),
            Choice::Exit => self.quit(),
            Choice::Invalid => {
                self.log_notice("Invalid choice. Please try again.");
            }
        }
    }

    fn handle_operation(&mut self, line: &str) {
        let command = match command::parse(line, self.engine.kind()) {
            Ok(command) => command,
            Err(error) => {
                self.log_notice(error.to_string());
                return;
            }
        };

        match command {
            Command::Insert(value) => {
                let outcome = self.engine.structure_mut().insert(value);
                self.log_outcome(outcome);
            }
            Command::Remove(value) => {
                let outcome = self.engine.structure_mut().remove(value);
                self.log_outcome(outcome);
            }
            Command::Peek => {
                let peeked = match self.engine.structure() {
                    Structure::Stack(stack) => Some(stack.peek()),
                    _ => None,
                };
                match peeked {
                    Some(Some(value)) => self.log_info(format!("Top of the stack: {}", value)),
                    Some(None) => self.log_notice("Stack is empty. Nothing to peek at."),
                    None => self.log_notice("Only a stack can be peeked."),
                }
            }
            Command::Traverse => {
                self.log_info("Traversing the data structure:");
                let line = self.engine.traverse_line();
                self.log_info(line);
            }
            Command::Display => {
                let rendering = self.engine.render();
                if rendering.is_empty() {
                    self.log_info("(empty)");
                } else {
                    for line in rendering.lines() {
                        self.log_info(line.to_string());
                    }
                }
            }
            Command::Help => self.log_help(),
            Command::Back => {
                self.screen = Screen::Choose;
                self.status_message = String::from("Choose a data structure");
            }
            Command::Exit => self.quit(),
        }
    }

    fn log_help(&mut self) {
        match self.screen {
            Screen::Choose => {
                self.log_info("Available commands:");
                self.log_info(" - 1, 2 or 3: choose a data structure");
                self.log_info(" - help: display this help message");
                self.log_info(" - exit: exit the program");
            }
            Screen::Operate => {
                self.log_info("Available operations:");
                match self.engine.kind() {
                    StructureKind::Stack => {
                        self.log_info(" - push <value>: push an element onto the stack");
                        self.log_info(" - pop: pop the top element");
                        self.log_info(" - peek: show the top element");
                    }
                    _ => {
                        self.log_info(" - add <value>: add a node");
                        self.log_info(" - remove <value>: remove a node");
                    }
                }
                self.log_info(" - traverse: visit every value in structure order");
                self.log_info(" - display: print the rendering to the output");
                self.log_info(" - back: choose another data structure");
                self.log_info(" - exit: exit the program");
            }
        }
    }

    fn log_info(&mut self, text: impl Into<String>) {
        self.output.push(LogLine {
            text: text.into(),
            kind: LogKind::Info,
        });
    }

    fn log_notice(&mut self, text: impl Into<String>) {
        self.output.push(LogLine {
            text: text.into(),
            kind: LogKind::Notice,
        });
    }

    fn log_outcome(&mut self, outcome: Outcome) {
        let kind = match outcome {
            Outcome::NotFound(_) | Outcome::EmptyList | Outcome::EmptyStack => LogKind::Notice,
            _ => LogKind::Info,
        };
        self.output.push(LogLine {
            text: outcome.to_string(),
            kind,
        });
    }

    fn quit(&mut self) {
        self.log_info("Thanks for using the Data Structure Visualiser!");
        self.should_quit = true;
    }
}
