//! Win rates per difficulty, regular and mutation games side by side.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::{
    aggregate::{WinLoss, WinRateReport},
    format::format_percentage,
    replay::Difficulty,
};

fn rate(wl: &WinLoss) -> String {
    wl.win_rate().map_or_else(|| "-".to_string(), format_percentage)
}

fn rate_color(wl: &WinLoss) -> Color {
    match wl.win_rate() {
        None => Color::DarkGray,
        Some(r) if r >= 50.0 => Color::Green,
        Some(_) => Color::Red,
    }
}

fn total_spans(label: &str, wl: &WinLoss) -> Vec<Span<'static>> {
    vec![
        Span::raw(format!("  {}: ", label)),
        Span::styled(
            format!("{}W", wl.wins),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" / "),
        Span::styled(
            format!("{}L", wl.losses()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(rate(wl), Style::default().fg(rate_color(wl))),
    ]
}

pub(super) fn draw_win_rate(f: &mut Frame, area: Rect, report: &WinRateReport) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    let mut totals = total_spans("Regular", &report.regular_total);
    totals.push(Span::raw("  |"));
    totals.extend(total_spans("Mutation", &report.mutation_total));

    f.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(totals)]).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Win Rate | d: Difficulty, r: Enemy race"),
        ),
        chunks[0],
    );

    let rows: Vec<Row> = Difficulty::all()
        .into_iter()
        .map(|difficulty| {
            let regular = &report.regular[difficulty.index()];
            let mutation = &report.mutation[difficulty.index()];

            Row::new(vec![
                difficulty.to_string(),
                format!("{}-{}", regular.wins, regular.losses()),
                rate(regular),
                format!("{}-{}", mutation.wins, mutation.losses()),
                rate(mutation),
            ])
            .style(if regular.games + mutation.games == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            })
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10), // Difficulty
            Constraint::Length(10), // Regular W-L
            Constraint::Length(8),  // Regular %
            Constraint::Length(10), // Mutation W-L
            Constraint::Length(8),  // Mutation %
        ],
    )
    .header(
        Row::new(vec!["Difficulty", "Regular", "Rate", "Mutation", "Rate"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1),
    )
    .block(Block::default().borders(Borders::ALL).title("By Difficulty"));

    f.render_widget(table, chunks[1]);
}
