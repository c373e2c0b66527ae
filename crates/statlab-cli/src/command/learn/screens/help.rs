use crossterm::event::Event;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};
use ratatui_shell::{Screen, Transition};

/// Full-screen key-binding reference; any key returns to the lesson.
#[derive(Debug, Default)]
pub(super) struct HelpScreen;

const BINDINGS: &[(&str, &str)] = &[
    ("Left / Right", "previous / next section"),
    ("1-6", "jump to a section"),
    ("Up / Down", "scroll the section text"),
    ("m", "mark the current section complete"),
    ("Tab", "switch between table and charts (Data Presentation)"),
    ("e", "edit the dataset (Statistical Software)"),
    ("Enter", "calculate statistics (Statistical Software)"),
    ("p", "load the next preset dataset (Statistical Software)"),
    ("r", "generate a random practice dataset (Statistical Software)"),
    ("?", "show this help"),
    ("q / Esc", "quit"),
];

impl Screen for HelpScreen {
    fn handle_event(&mut self, event: &Event) -> Transition {
        if event.as_key_event().is_some() {
            Transition::Pop
        } else {
            Transition::Stay
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let mut lines = vec![Line::raw("")];
        for (key, action) in BINDINGS {
            lines.push(Line::from(format!("  {key:<14} {action}")));
        }
        lines.push(Line::raw(""));
        lines.push(
            Line::styled(
                "  Press any key to return to the lesson",
                Style::default().fg(Color::DarkGray),
            ),
        );

        let paragraph = Paragraph::new(lines).block(
            Block::bordered().title(Line::styled(
                "Help",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        );
        frame.render_widget(paragraph, frame.area());
    }
}
