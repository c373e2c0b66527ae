//! Minimal event-driven shell for ratatui applications.
//!
//! The shell runs a stack of [`Screen`]s: the top screen draws the frame and
//! receives every terminal event, and its [`Transition`] return value drives
//! navigation (stay, push an overlay, pop back, exit).
//!
//! There is no tick loop: the shell blocks on the next terminal event and
//! redraws after handling it. That suits purely input-driven applications
//! with no background animation.
//!
//! ```no_run
//! use crossterm::event::Event;
//! use ratatui::Frame;
//! use ratatui_shell::{Screen, ScreenStack, Transition};
//!
//! #[derive(Debug)]
//! struct Hello;
//!
//! impl Screen for Hello {
//!     fn handle_event(&mut self, _event: &Event) -> Transition {
//!         Transition::Exit
//!     }
//!
//!     fn draw(&self, frame: &mut Frame) {
//!         frame.render_widget("hello", frame.area());
//!     }
//! }
//!
//! let mut stack = ScreenStack::new(Box::new(Hello));
//! ratatui_shell::run(&mut stack).unwrap();
//! ```

pub use self::{
    screen::{Screen, ScreenStack, Transition},
    shell::run,
};

mod screen;
mod shell;
