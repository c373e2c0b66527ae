use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, Block, Row, Table, Widget},
};
use statlab_stats::frequency::{FrequencyClass, FrequencyTable};

/// Tabular view of a grouped frequency distribution, with a total row.
pub(crate) struct FrequencyTableDisplay<'a> {
    table: &'a FrequencyTable,
}

impl<'a> FrequencyTableDisplay<'a> {
    pub(crate) fn new(table: &'a FrequencyTable) -> Self {
        Self { table }
    }
}

impl Widget for FrequencyTableDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total = self.table.total();
        let header = Row::new(["Score Range", "Frequency", "Relative", "Percent"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let mut rows = self
            .table
            .classes()
            .iter()
            .map(|class| {
                Row::new([
                    class_label(class),
                    class.count.to_string(),
                    format!("{:.3}", class.relative_frequency(total)),
                    format!("{:.1}%", class.percentage(total)),
                ])
            })
            .collect::<Vec<_>>();
        rows.push(
            Row::new([
                "Total".to_string(),
                total.to_string(),
                "1.000".to_string(),
                "100%".to_string(),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD)),
        );

        let widths = [
            Constraint::Length(13),
            Constraint::Length(11),
            Constraint::Length(10),
            Constraint::Length(9),
        ];
        Table::new(rows, widths)
            .header(header)
            .block(Block::bordered().title("Frequency Distribution"))
            .render(area, buf);
    }
}

/// Bar chart of the same distribution, one bar per class.
pub(crate) struct FrequencyChart<'a> {
    table: &'a FrequencyTable,
}

impl<'a> FrequencyChart<'a> {
    pub(crate) fn new(table: &'a FrequencyTable) -> Self {
        Self { table }
    }
}

impl Widget for FrequencyChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bars = self
            .table
            .classes()
            .iter()
            .map(|class| {
                Bar::with_label(class_label(class), class.count as u64)
                    .text_value(class.count.to_string())
            })
            .collect::<Vec<_>>();

        BarChart::new(bars)
            .block(Block::bordered().title("Scores per Range"))
            .bar_width(9)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Blue))
            .render(area, buf);
    }
}

/// Renders a class range the way a frequency table labels it, e.g. `60-69`
/// for the half-open class `[60, 70)`.
fn class_label(class: &FrequencyClass) -> String {
    format!("{:.0}-{:.0}", class.range.start, class.range.end - 1.0)
}
