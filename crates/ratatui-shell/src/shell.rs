use std::io;

use crossterm::event;

use crate::ScreenStack;

/// Runs a screen stack until it exits.
///
/// Draws the top screen, then blocks for the next terminal event and routes
/// it to the stack. Every handled event triggers a redraw, so resize events
/// are reflected without any extra plumbing.
pub fn run(stack: &mut ScreenStack) -> io::Result<()> {
    ratatui::run(|terminal| {
        while !stack.should_exit() {
            terminal.draw(|frame| stack.draw(frame))?;
            let event = event::read()?;
            stack.handle_event(&event);
        }
        Ok(())
    })
}
