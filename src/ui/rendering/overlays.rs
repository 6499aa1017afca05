//! Modal panels: replay detail, chat log, error list, delete confirmation
//! and path input.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    format::{format_date, format_level, format_prestige, format_time, mastery_labels},
    replay::{PlayerEntry, ReplayRecord},
    ui::{
        app::App,
        types::{InputPurpose, Overlay},
    },
};

/// Rectangle of the given percentage size centred in `area`.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn bold(text: impl Into<String>, color: Color) -> Span<'static> {
    Span::styled(
        text.into(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn player_lines(player: &PlayerEntry) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("  "),
            bold(player.display_name(), Color::Cyan),
            Span::raw(format!(
                "  {} ({})  Level {}  Prestige: {}  APM {}",
                player.commander,
                player.race,
                format_level(player.level, player.mastery_level),
                format_prestige(&player.commander, player.prestige),
                player.apm
            )),
        ]),
    ];

    for (i, (a, b)) in mastery_labels(&player.commander).iter().enumerate() {
        lines.push(Line::from(format!(
            "    {:>2} {:<28} {:>2} {}",
            player.masteries[i * 2],
            a,
            player.masteries[i * 2 + 1],
            b
        )));
    }

    lines
}

fn detail_lines(record: &ReplayRecord) -> Vec<Line<'static>> {
    let outcome_color = if record.outcome.is_victory() {
        Color::Green
    } else {
        Color::Red
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Map: "),
            bold(record.map.clone(), Color::Yellow),
            Span::raw("  |  Result: "),
            bold(record.outcome.to_string(), outcome_color),
        ]),
        Line::from(format!(
            "  {}  |  Length {}  |  {}{}  |  Enemy: {}",
            format_date(&record.started_at),
            format_time(record.duration_secs),
            record.difficulty,
            if record.mutation { " (Mutation)" } else { "" },
            record.enemy_race
        )),
        Line::from(format!(
            "  Version {}  |  Region {}  |  Speed {}  |  {}",
            record.version,
            record.region,
            record.speed,
            record.file_name()
        )),
        Line::from(""),
    ];

    if !record.is_eligible() {
        lines.push(Line::from(Span::styled(
            "  Shorter than two minutes: left out of statistics",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    for player in &record.players {
        lines.extend(player_lines(player));
        lines.push(Line::from(""));
    }

    lines
}

impl App {
    pub(in crate::ui) fn draw_overlay(&self, f: &mut Frame, overlay: &Overlay) {
        match overlay {
            Overlay::Detail(path) => {
                let area = centered(f.area(), 80, 70);
                let lines = self
                    .session
                    .get(path)
                    .map(detail_lines)
                    .unwrap_or_else(|| vec![Line::from("  Replay no longer indexed")]);
                self.draw_panel(f, area, lines, "Replay | t: Chat | Esc: Close");
            }

            Overlay::Messages(path) => {
                let area = centered(f.area(), 70, 70);
                let lines: Vec<Line> = match self.session.get(path) {
                    Some(record) if !record.messages.is_empty() => record
                        .messages
                        .iter()
                        .map(|m| {
                            Line::from(vec![
                                Span::styled(
                                    format!("{} ", format_time(m.seconds)),
                                    Style::default().fg(Color::DarkGray),
                                ),
                                bold(format!("{}: ", m.sender), Color::Cyan),
                                Span::raw(m.text.clone()),
                            ])
                        })
                        .collect(),
                    Some(_) => vec![Line::from("No messages")],
                    None => vec![Line::from("Replay no longer indexed")],
                };
                self.draw_panel(f, area, lines, "Chat | Esc: Back");
            }

            Overlay::Errors => {
                let area = centered(f.area(), 80, 70);
                let errors = self.session.errors();
                let lines: Vec<Line> = if errors.is_empty() {
                    vec![Line::from("No errors")]
                } else {
                    errors
                        .iter()
                        .map(|e| {
                            Line::from(vec![
                                Span::styled(
                                    format!("{} ", e.at.format("%H:%M:%S")),
                                    Style::default().fg(Color::DarkGray),
                                ),
                                Span::styled(e.message.clone(), Style::default().fg(Color::Red)),
                            ])
                        })
                        .collect()
                };
                let title = format!("Errors ({}) | c: Clear | Esc: Close", errors.len());
                self.draw_panel(f, area, lines, &title);
            }

            Overlay::ConfirmDelete(path) => {
                let area = centered(f.area(), 60, 20);
                let name = self
                    .session
                    .get(path)
                    .map(|r| r.file_name())
                    .unwrap_or_else(|| path.display().to_string());
                let lines = vec![
                    Line::from(""),
                    Line::from(vec![Span::raw("  Delete "), bold(name, Color::Yellow), Span::raw(" from disk?")]),
                    Line::from(""),
                    Line::from("  y: Delete   n: Cancel"),
                ];
                self.draw_panel(f, area, lines, "Confirm Delete");
            }

            Overlay::Input(purpose) => {
                let area = centered(f.area(), 70, 15);
                let help = match purpose {
                    InputPurpose::Directory => "Enter: Scan | Esc: Cancel",
                    InputPurpose::Export => "Enter: Export | Esc: Cancel",
                };
                let lines = vec![Line::from(format!("{}▌", self.input))];
                self.draw_panel(f, area, lines, &format!("{} | {}", purpose.title(), help));
            }
        }
    }

    fn draw_panel(&self, f: &mut Frame, area: Rect, lines: Vec<Line>, title: &str) {
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(title.to_string())),
            area,
        );
    }
}
