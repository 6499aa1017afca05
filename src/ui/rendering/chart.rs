//! Horizontal bar charts drawn with block characters.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{aggregate::AggregateResult, format::format_percentage};

/// Bar width for `value` out of `max`, scaled to `width` columns.
pub(super) fn bar_width(value: usize, max: usize, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    ((value as f64 / max as f64) * width as f64).round() as usize
}

/// One labelled bar; `label_width` pads the label column.
pub(super) fn bar_line<'a>(
    label: &str,
    label_width: usize,
    value: usize,
    max: usize,
    width: usize,
    suffix: String,
    color: Color,
) -> Line<'a> {
    let bar = "█".repeat(bar_width(value, max, width));

    Line::from(vec![
        Span::raw(format!("  {:<label_width$} ", label)),
        Span::styled(bar, Style::default().fg(color)),
        Span::raw(format!(" {}", suffix)),
    ])
}

/// Space left for bars once the label and count columns are drawn.
pub(super) fn bar_space(area: Rect, label_width: usize) -> usize {
    (area.width as usize).saturating_sub(label_width + 20).max(1)
}

pub(super) fn draw_breakdown(f: &mut Frame, area: Rect, title: &str, result: &AggregateResult) {
    let label_width = result
        .rows
        .iter()
        .map(|row| row.key.chars().count())
        .max()
        .unwrap_or(0)
        .min(28);
    let max = result.rows.first().map_or(0, |row| row.count);
    let width = bar_space(area, label_width);

    let mut lines = vec![Line::from("")];

    if result.rows.is_empty() {
        lines.push(Line::from("  No games of two minutes or longer match the filters"));
    }

    for row in &result.rows {
        lines.push(bar_line(
            &row.key,
            label_width,
            row.count,
            max,
            width,
            format!("{} ({})", row.count, format_percentage(row.percent)),
            Color::Green,
        ));
    }

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({} counted)", title, result.total)),
        ),
        area,
    );
}
