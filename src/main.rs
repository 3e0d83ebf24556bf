// dsviz: interactive terminal visualiser for classic data structures

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use dsviz::engine::VisualisationEngine;
use dsviz::structures::{Structure, StructureKind};
use dsviz::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The engine always holds one active structure; start with an empty
    // linked list until the user picks something else.
    let engine = VisualisationEngine::new(Structure::new(StructureKind::LinkedList));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(engine);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
