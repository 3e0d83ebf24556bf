//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus,
//!   command dispatch onto the engine
//! - **[`command`]** — parsing of typed input lines into validated commands
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (structure, output, menu, input, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`VisualisationEngine`] and call [`App::run`] to start the event loop.
//!
//! [`VisualisationEngine`]: crate::engine::VisualisationEngine
//! [`App::run`]: app::App::run

pub mod app;
pub mod command;
pub mod panes;
pub mod theme;

pub use app::App;
