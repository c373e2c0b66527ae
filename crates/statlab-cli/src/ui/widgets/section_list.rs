use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};
use statlab_lesson::{progress::Progress, section::Section};

/// Sidebar listing the lesson sections with completion marks.
pub(crate) struct SectionList<'a> {
    current: Section,
    progress: &'a Progress,
}

impl<'a> SectionList<'a> {
    pub(crate) fn new(current: Section, progress: &'a Progress) -> Self {
        Self { current, progress }
    }
}

impl Widget for SectionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items = Section::ALL
            .iter()
            .map(|section| {
                let check = if self.progress.is_complete(*section) {
                    " \u{2713}"
                } else {
                    ""
                };
                ListItem::new(format!(
                    "{}. {}{check}",
                    section.index() + 1,
                    section.title()
                ))
            })
            .collect::<Vec<_>>();

        let list = List::new(items)
            .block(Block::bordered().title("Lessons"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let mut state = ListState::default();
        state.select(Some(self.current.index()));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
