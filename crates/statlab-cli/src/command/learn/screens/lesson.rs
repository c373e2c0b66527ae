use std::{cell::RefCell, rc::Rc};

use crossterm::event::{Event, KeyCode, KeyEvent};
use rand_pcg::Pcg64Mcg;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Wrap},
};
use ratatui_shell::{Screen, Transition};
use statlab_lesson::{content, dataset, progress::Progress, section::Section};
use statlab_stats::{descriptive::DescriptiveSummary, frequency::FrequencyTable};

use crate::ui::widgets::{
    CENTRAL_TENDENCY_ROWS, DISPERSION_ROWS, FIVE_NUMBER_ROWS, FrequencyChart,
    FrequencyTableDisplay, SectionList, SummaryPanel,
};

use super::help::HelpScreen;

/// Width of the score classes in the Data Presentation examples.
const CLASS_WIDTH: f64 = 10.0;

/// Shape of generated practice datasets: IQ-style scores.
const RANDOM_LEN: usize = 12;
const RANDOM_MEAN: f64 = 100.0;
const RANDOM_STD_DEV: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PresentationTab {
    FrequencyTable,
    Charts,
}

impl PresentationTab {
    fn toggled(self) -> Self {
        match self {
            Self::FrequencyTable => Self::Charts,
            Self::Charts => Self::FrequencyTable,
        }
    }
}

/// The lesson proper: section navigation, narrative content, and the
/// embedded calculator.
///
/// All lesson state (current section, completion, the dataset text, the last
/// computed summary, the active presentation tab) lives here; the statistics
/// engine sees only the input string it is handed on each calculation.
#[derive(Debug)]
pub(crate) struct LessonScreen {
    section: Section,
    progress: Rc<RefCell<Progress>>,
    scroll: u16,
    tab: PresentationTab,
    input: String,
    editing: bool,
    summary: Option<DescriptiveSummary>,
    next_preset: usize,
    rng: Pcg64Mcg,
}

impl LessonScreen {
    pub(crate) fn new(progress: Rc<RefCell<Progress>>, rng: Pcg64Mcg) -> Self {
        Self {
            section: Section::Introduction,
            progress,
            scroll: 0,
            tab: PresentationTab::FrequencyTable,
            input: dataset::DEFAULT_INPUT.to_string(),
            editing: false,
            summary: None,
            next_preset: 0,
            rng,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Transition::Exit,
            KeyCode::Char('?') => return Transition::Push(Box::new(HelpScreen)),
            KeyCode::Left => self.go_to(self.section.prev()),
            KeyCode::Right => self.go_to(self.section.next()),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c.to_digit(10).unwrap_or(1) as usize - 1;
                if let Some(section) = Section::from_index(index) {
                    self.go_to(section);
                }
            }
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Char('m') => {
                self.progress.borrow_mut().mark_complete(self.section);
            }
            KeyCode::Tab if self.section == Section::DataPresentation => {
                self.tab = self.tab.toggled();
            }
            KeyCode::Char('e') if self.section == Section::StatisticalSoftware => {
                self.editing = true;
            }
            KeyCode::Enter if self.section == Section::StatisticalSoftware => self.calculate(),
            KeyCode::Char('p') if self.section == Section::StatisticalSoftware => {
                self.load_next_preset();
            }
            KeyCode::Char('r') if self.section == Section::StatisticalSoftware => {
                self.input =
                    dataset::random_dataset(&mut self.rng, RANDOM_LEN, RANDOM_MEAN, RANDOM_STD_DEV);
            }
            _ => {}
        }
        Transition::Stay
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.editing = false,
            KeyCode::Enter => {
                self.editing = false;
                self.calculate();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn go_to(&mut self, section: Section) {
        if self.section != section {
            self.section = section;
            self.scroll = 0;
        }
    }

    /// Recomputes the summary from the current input. An empty effective
    /// sample clears the result so stale statistics are never shown.
    fn calculate(&mut self) {
        self.summary = DescriptiveSummary::parse(&self.input);
    }

    fn load_next_preset(&mut self) {
        let preset = dataset::PRESETS[self.next_preset % dataset::PRESETS.len()];
        self.next_preset += 1;
        self.input = preset.values.to_string();
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let progress = self.progress.borrow();
        let status = if progress.is_finished() {
            "Course complete!".to_string()
        } else {
            format!(
                "Complete: {} / {}",
                progress.completed_count(),
                Section::ALL.len()
            )
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    "Descriptive Statistics",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - An Interactive Learning Experience"),
            ]),
            Line::styled(status, Style::default().fg(Color::Green)),
        ];
        frame.render_widget(Paragraph::new(lines).block(Block::bordered()), area);
    }

    fn draw_narrative(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.narrative_lines())
            .block(Block::bordered().title(self.section.title()))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn narrative_lines(&self) -> Vec<Line<'static>> {
        let body = content::body(self.section);
        let mut lines = vec![Line::raw(body.lead), Line::raw("")];
        for topic in body.topics {
            lines.push(Line::styled(
                topic.heading,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            for text in topic.lines {
                lines.push(Line::from(vec![Span::raw("  - "), Span::raw(*text)]));
            }
            lines.push(Line::raw(""));
        }
        lines
    }

    fn draw_presentation(&self, frame: &mut Frame, area: Rect) {
        let [narrative_area, detail_area] =
            Layout::vertical([Constraint::Length(10), Constraint::Fill(1)]).areas::<2>(area);
        self.draw_narrative(frame, narrative_area);

        let Some(table) = FrequencyTable::new(&dataset::STUDENT_SCORES, CLASS_WIDTH) else {
            return;
        };
        match self.tab {
            PresentationTab::FrequencyTable => {
                frame.render_widget(FrequencyTableDisplay::new(&table), detail_area);
            }
            PresentationTab::Charts => {
                frame.render_widget(FrequencyChart::new(&table), detail_area);
            }
        }
    }

    fn draw_calculator(&self, frame: &mut Frame, area: Rect) {
        let [input_area, results_area] =
            Layout::vertical([Constraint::Length(5), Constraint::Fill(1)]).areas::<2>(area);

        let input_line = if self.editing {
            Line::styled(
                format!("{}_", self.input),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Line::raw(self.input.clone())
        };
        let input_text = Text::from(vec![
            Line::raw("Enter comma-separated numbers:"),
            input_line,
            Line::styled(
                "Unrecognized entries are skipped when calculating.",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(input_text).block(Block::bordered().title("Data Input")),
            input_area,
        );

        match &self.summary {
            Some(summary) => Self::draw_summary_panels(frame, results_area, summary),
            None => frame.render_widget(
                Paragraph::new("No statistics to display. Enter a dataset and press Enter.")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(Block::bordered().title("Results")),
                results_area,
            ),
        }
    }

    fn draw_summary_panels(frame: &mut Frame, area: Rect, summary: &DescriptiveSummary) {
        let [top_area, bottom_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).areas::<2>(area);
        let [tendency_area, dispersion_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas::<2>(top_area);
        let [five_number_area, sample_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas::<2>(bottom_area);

        frame.render_widget(
            SummaryPanel::new("Central Tendency", CENTRAL_TENDENCY_ROWS, summary),
            tendency_area,
        );
        frame.render_widget(
            SummaryPanel::new("Dispersion", DISPERSION_ROWS, summary),
            dispersion_area,
        );
        frame.render_widget(
            SummaryPanel::new("Five-Number Summary", FIVE_NUMBER_ROWS, summary),
            five_number_area,
        );

        let values = summary
            .sorted_values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let sample_text = Text::from(vec![
            Line::raw(format!("Sample size: {} values", summary.count)),
            Line::raw(format!("Sorted: {values}")),
        ]);
        frame.render_widget(
            Paragraph::new(sample_text)
                .wrap(Wrap { trim: false })
                .block(Block::bordered().title("Sample")),
            sample_area,
        );
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = if self.editing {
            "Type numbers and commas | Enter (Calculate) | Esc (Done)"
        } else {
            match self.section {
                Section::DataPresentation => {
                    "\u{2190} \u{2192} (Sections) | Tab (Table/Charts) | m (Mark Complete) | ? (Help) | q (Quit)"
                }
                Section::StatisticalSoftware => {
                    "e (Edit) | Enter (Calculate) | p (Preset) | r (Random) | m (Mark Complete) | q (Quit)"
                }
                _ => {
                    "\u{2190} \u{2192} (Sections) | 1-6 (Jump) | \u{2191} \u{2193} (Scroll) | m (Mark Complete) | ? (Help) | q (Quit)"
                }
            }
        };
        let help_text = Text::from(hints)
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help_text, area);
    }
}

impl Screen for LessonScreen {
    fn handle_event(&mut self, event: &Event) -> Transition {
        let Some(key) = event.as_key_event() else {
            return Transition::Stay;
        };
        if self.editing {
            self.handle_edit_key(key);
            return Transition::Stay;
        }
        self.handle_key(key)
    }

    fn draw(&self, frame: &mut Frame) {
        let [header_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas::<3>(frame.area());

        let [sidebar_area, content_area] =
            Layout::horizontal([Constraint::Length(28), Constraint::Fill(1)])
                .areas::<2>(main_area);

        self.draw_header(frame, header_area);
        frame.render_widget(
            SectionList::new(self.section, &self.progress.borrow()),
            sidebar_area,
        );
        match self.section {
            Section::DataPresentation => self.draw_presentation(frame, content_area),
            Section::StatisticalSoftware => self.draw_calculator(frame, content_area),
            _ => self.draw_narrative(frame, content_area),
        }
        self.draw_footer(frame, footer_area);
    }
}
