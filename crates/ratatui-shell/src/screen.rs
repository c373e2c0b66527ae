use std::fmt;

use crossterm::event::Event;
use ratatui::Frame;

/// An individual screen in the application.
///
/// The top screen of a [`ScreenStack`] receives every terminal event and
/// decides the next [`Transition`]. Screens below the top are retained but
/// neither drawn nor handed events until they surface again.
pub trait Screen: fmt::Debug {
    /// Handles a terminal event and returns the resulting transition.
    fn handle_event(&mut self, event: &Event) -> Transition;

    /// Renders the screen.
    fn draw(&self, frame: &mut Frame);
}

/// Result of handling an event.
#[derive(Debug)]
pub enum Transition {
    /// Stay on the current screen.
    Stay,
    /// Push a screen on top; the current screen resumes when it pops.
    Push(Box<dyn Screen>),
    /// Close the current screen and return to the one below. Popping the
    /// last screen exits.
    Pop,
    /// Exit the application.
    Exit,
}

/// Stack of screens; the top screen is active.
#[derive(Debug)]
pub struct ScreenStack {
    screens: Vec<Box<dyn Screen>>,
    should_exit: bool,
}

impl ScreenStack {
    /// Creates a stack with an initial screen.
    #[must_use]
    pub fn new(initial: Box<dyn Screen>) -> Self {
        Self {
            screens: vec![initial],
            should_exit: false,
        }
    }

    /// Whether the application should stop running.
    #[must_use]
    pub fn should_exit(&self) -> bool {
        self.should_exit || self.screens.is_empty()
    }

    /// Routes an event to the top screen and applies its transition.
    pub fn handle_event(&mut self, event: &Event) {
        let Some(current) = self.screens.last_mut() else {
            return;
        };
        match current.handle_event(event) {
            Transition::Stay => {}
            Transition::Push(screen) => self.screens.push(screen),
            Transition::Pop => {
                self.screens.pop();
            }
            Transition::Exit => self.should_exit = true,
        }
    }

    /// Draws the top screen.
    pub fn draw(&self, frame: &mut Frame) {
        if let Some(current) = self.screens.last() {
            current.draw(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    /// Records which screens received events.
    #[derive(Debug, Clone, Default)]
    struct EventLog {
        entries: Rc<RefCell<Vec<String>>>,
    }

    impl EventLog {
        fn record(&self, name: &str) {
            self.entries.borrow_mut().push(name.to_string());
        }

        fn entries(&self) -> Vec<String> {
            self.entries.borrow().clone()
        }
    }

    /// Screen that replies with a scripted transition once, then stays.
    #[derive(Debug)]
    struct TestScreen {
        name: &'static str,
        log: EventLog,
        transition: Option<Transition>,
    }

    impl TestScreen {
        fn new(name: &'static str, log: EventLog) -> Self {
            Self {
                name,
                log,
                transition: None,
            }
        }

        fn with_transition(mut self, transition: Transition) -> Self {
            self.transition = Some(transition);
            self
        }
    }

    impl Screen for TestScreen {
        fn handle_event(&mut self, _event: &Event) -> Transition {
            self.log.record(self.name);
            self.transition.take().unwrap_or(Transition::Stay)
        }

        fn draw(&self, _frame: &mut Frame) {}
    }

    fn test_event() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE))
    }

    #[test]
    fn test_stay_keeps_routing_to_the_same_screen() {
        let log = EventLog::default();
        let mut stack = ScreenStack::new(Box::new(TestScreen::new("first", log.clone())));

        stack.handle_event(&test_event());
        stack.handle_event(&test_event());

        assert!(!stack.should_exit());
        assert_eq!(log.entries(), vec!["first", "first"]);
    }

    #[test]
    fn test_push_routes_events_to_the_new_top() {
        let log = EventLog::default();
        let overlay = TestScreen::new("second", log.clone());
        let base = TestScreen::new("first", log.clone())
            .with_transition(Transition::Push(Box::new(overlay)));
        let mut stack = ScreenStack::new(Box::new(base));

        stack.handle_event(&test_event()); // handled by first, pushes second
        stack.handle_event(&test_event()); // handled by second

        assert!(!stack.should_exit());
        assert_eq!(log.entries(), vec!["first", "second"]);
    }

    #[test]
    fn test_pop_returns_to_the_previous_screen() {
        let log = EventLog::default();
        let overlay = TestScreen::new("second", log.clone()).with_transition(Transition::Pop);
        let base = TestScreen::new("first", log.clone())
            .with_transition(Transition::Push(Box::new(overlay)));
        let mut stack = ScreenStack::new(Box::new(base));

        stack.handle_event(&test_event()); // push second
        stack.handle_event(&test_event()); // second pops itself
        stack.handle_event(&test_event()); // back to first

        assert!(!stack.should_exit());
        assert_eq!(log.entries(), vec!["first", "second", "first"]);
    }

    #[test]
    fn test_exit_sets_the_flag() {
        let log = EventLog::default();
        let screen = TestScreen::new("first", log.clone()).with_transition(Transition::Exit);
        let mut stack = ScreenStack::new(Box::new(screen));

        stack.handle_event(&test_event());

        assert!(stack.should_exit());
    }

    #[test]
    fn test_popping_the_last_screen_exits() {
        let log = EventLog::default();
        let screen = TestScreen::new("first", log.clone()).with_transition(Transition::Pop);
        let mut stack = ScreenStack::new(Box::new(screen));

        assert!(!stack.should_exit());
        stack.handle_event(&test_event());
        assert!(stack.should_exit());

        // Events after the stack empties are ignored.
        stack.handle_event(&test_event());
        assert_eq!(log.entries(), vec!["first"]);
    }
}
