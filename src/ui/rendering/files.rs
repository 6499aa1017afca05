//! Replay list.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use crate::{
    format::{format_player, format_time},
    replay::{Outcome, ReplayRecord},
    ui::app::App,
};

/// "Name (Commander)" for every player.
fn players_label(record: &ReplayRecord) -> String {
    record
        .players
        .iter()
        .map(|p| format_player(&p.name, &p.commander))
        .collect::<Vec<_>>()
        .join(", ")
}

impl App {
    pub(in crate::ui) fn draw_files(&self, f: &mut Frame, area: Rect, records: &[&ReplayRecord]) {
        if records.is_empty() {
            let hint = if self.session.directory().is_none() {
                "Press Ctrl+O to choose a replay directory"
            } else if self.session.records().is_empty() {
                "No replays found in this directory"
            } else {
                "No replays match the filters (x clears them)"
            };

            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    hint,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
            ];

            f.render_widget(
                Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Files")),
                area,
            );
            return;
        }

        let rows: Vec<Row> = records
            .iter()
            .map(|record| {
                let players = players_label(record);

                let style = match (record.is_eligible(), record.outcome) {
                    (false, _) => Style::default().fg(Color::DarkGray),
                    (true, Outcome::Victory) => Style::default().fg(Color::Green),
                    (true, Outcome::Defeat) => Style::default().fg(Color::Red),
                };

                let kind = if record.mutation { "Mutation" } else { "" };

                Row::new(vec![
                    record.started_at.format("%Y-%m-%d %H:%M").to_string(),
                    record.map.clone(),
                    record.outcome.to_string(),
                    record.difficulty.to_string(),
                    kind.to_string(),
                    format_time(record.duration_secs),
                    players,
                ])
                .style(style)
            })
            .collect();

        let title = format!(
            "Files ({} of {}) | Enter: Detail | t: Chat | Del: Delete | e: Errors ({}) | Ctrl+R: Reload | Ctrl+E: Export",
            records.len(),
            self.session.records().len(),
            self.session.errors().len()
        );

        let table = Table::new(
            rows,
            [
                Constraint::Length(16), // Date
                Constraint::Length(22), // Map
                Constraint::Length(8),  // Result
                Constraint::Length(9),  // Difficulty
                Constraint::Length(8),  // Mutation
                Constraint::Length(8),  // Length
                Constraint::Min(20),    // Players
            ],
        )
        .header(
            Row::new(vec!["Date", "Map", "Result", "Difficulty", "Type", "Length", "Players"])
                .style(Style::default().add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(Block::default().borders(Borders::ALL).title(title));

        let mut state = TableState::default().with_selected(Some(self.selected));
        f.render_stateful_widget(table, area, &mut state);
    }
}
