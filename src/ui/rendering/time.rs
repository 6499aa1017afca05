//! When games were played and how long they took.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    aggregate::{MONTHS, TimeReport, WEEKDAYS},
    format::format_time,
};

use super::chart::{bar_line, bar_space};

fn bars<'a>(labels: &[String], counts: &[usize], area: Rect, color: Color) -> Vec<Line<'a>> {
    let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let max = counts.iter().copied().max().unwrap_or(0);
    let width = bar_space(area, label_width);

    labels
        .iter()
        .zip(counts)
        .map(|(label, count)| bar_line(label, label_width, *count, max, width, count.to_string(), color))
        .collect()
}

fn optional_time(secs: Option<u64>) -> String {
    secs.map_or_else(|| "-".to_string(), format_time)
}

pub(super) fn draw_time(f: &mut Frame, area: Rect, report: &TimeReport) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(5)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(5)])
        .split(columns[1]);

    let summary = vec![
        Line::from(format!("  Games: {}", report.games)),
        Line::from(format!("  Time played: {}", format_time(report.time_played))),
        Line::from(format!("  Average length: {}", format_time(report.average))),
        Line::from(format!(
            "  Fastest / longest win: {} / {}",
            optional_time(report.fastest_win),
            optional_time(report.longest_win)
        )),
        Line::from(format!(
            "  Fastest / longest loss: {} / {}",
            optional_time(report.fastest_loss),
            optional_time(report.longest_loss)
        )),
    ];
    f.render_widget(
        Paragraph::new(summary).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Time | y: Year, n: Month"),
        ),
        left[0],
    );

    let weekdays: Vec<String> = WEEKDAYS.iter().map(|d| d.to_string()).collect();
    f.render_widget(
        Paragraph::new(bars(&weekdays, &report.weekdays, right[0], Color::Cyan))
            .block(Block::default().borders(Borders::ALL).title("Weekday")),
        right[0],
    );

    let months: Vec<String> = MONTHS.iter().map(|m| m.to_string()).collect();
    f.render_widget(
        Paragraph::new(bars(&months, &report.months, left[1], Color::Green))
            .block(Block::default().borders(Borders::ALL).title("Month")),
        left[1],
    );

    let hours: Vec<String> = (0..24).map(|h| format!("{:02}", h)).collect();
    f.render_widget(
        Paragraph::new(bars(&hours, &report.hours, right[1], Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Hour of day")),
        right[1],
    );
}
