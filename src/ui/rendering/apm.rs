use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::aggregate::ApmReport;

use super::chart::{bar_line, bar_space};

pub(super) fn draw_apm(f: &mut Frame, area: Rect, report: &ApmReport) {
    let label_width = report
        .rows
        .iter()
        .map(|row| row.commander.len())
        .max()
        .unwrap_or(0);
    let max = report.rows.first().map_or(0, |row| row.average as usize);
    let width = bar_space(area, label_width);

    let mut lines = vec![Line::from("")];

    if report.rows.is_empty() {
        lines.push(Line::from("  No games of two minutes or longer match the filters"));
    }

    for row in &report.rows {
        lines.push(bar_line(
            &row.commander,
            label_width,
            row.average as usize,
            max,
            width,
            format!("{} APM ({} games)", row.average, row.games),
            Color::Magenta,
        ));
    }

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("APM (mean {:.0})", report.mean)),
        ),
        area,
    );
}
