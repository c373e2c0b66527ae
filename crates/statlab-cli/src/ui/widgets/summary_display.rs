use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Widget},
};
use statlab_stats::descriptive::DescriptiveSummary;

/// One labeled measure in a summary panel.
pub(crate) struct SummaryRow {
    label: &'static str,
    value: fn(&DescriptiveSummary) -> String,
}

/// Measures of central tendency, as displayed by the calculator.
pub(crate) const CENTRAL_TENDENCY_ROWS: &[SummaryRow] = &[
    SummaryRow {
        label: "Mean (average):",
        value: |summary| format!("{:.2}", summary.mean),
    },
    SummaryRow {
        label: "Median (middle):",
        value: |summary| format!("{:.2}", summary.median),
    },
    SummaryRow {
        label: "Mode (most frequent):",
        value: |summary| summary.mode.to_string(),
    },
];

/// Measures of dispersion, as displayed by the calculator.
pub(crate) const DISPERSION_ROWS: &[SummaryRow] = &[
    SummaryRow {
        label: "Range:",
        value: |summary| format!("{:.2}", summary.range),
    },
    SummaryRow {
        label: "Variance:",
        value: |summary| format!("{:.2}", summary.variance),
    },
    SummaryRow {
        label: "Std deviation:",
        value: |summary| format!("{:.2}", summary.std_dev),
    },
    SummaryRow {
        label: "IQR (Q3 - Q1):",
        value: |summary| format!("{:.2}", summary.iqr),
    },
];

/// The five-number summary. Minimum and maximum are shown unrounded.
pub(crate) const FIVE_NUMBER_ROWS: &[SummaryRow] = &[
    SummaryRow {
        label: "Minimum:",
        value: |summary| format!("{}", summary.min),
    },
    SummaryRow {
        label: "Q1 (25th percentile):",
        value: |summary| format!("{:.2}", summary.q1),
    },
    SummaryRow {
        label: "Median (Q2):",
        value: |summary| format!("{:.2}", summary.median),
    },
    SummaryRow {
        label: "Q3 (75th percentile):",
        value: |summary| format!("{:.2}", summary.q3),
    },
    SummaryRow {
        label: "Maximum:",
        value: |summary| format!("{}", summary.max),
    },
];

/// Bordered panel rendering labeled measures from a summary.
pub(crate) struct SummaryPanel<'a> {
    title: &'static str,
    rows: &'static [SummaryRow],
    summary: &'a DescriptiveSummary,
}

impl<'a> SummaryPanel<'a> {
    pub(crate) fn new(
        title: &'static str,
        rows: &'static [SummaryRow],
        summary: &'a DescriptiveSummary,
    ) -> Self {
        Self {
            title,
            rows,
            summary,
        }
    }
}

impl Widget for SummaryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);

        let row_areas =
            Layout::vertical(self.rows.iter().map(|_| Constraint::Length(1))).split(inner);

        for (row, row_area) in iter::zip(self.rows, row_areas.iter().copied()) {
            let [label_area, value_area] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                    .areas::<2>(row_area);
            Line::raw(row.label).left_aligned().render(label_area, buf);
            Line::raw((row.value)(self.summary))
                .right_aligned()
                .render(value_area, buf);
        }
    }
}
