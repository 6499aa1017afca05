//! Tab bar and active filter summary.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};
use strum::IntoEnumIterator;

use crate::{
    aggregate::MONTHS,
    ui::{app::App, types::ViewKind},
};

impl App {
    pub(in crate::ui) fn draw_tabs(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<String> = ViewKind::iter()
            .enumerate()
            .map(|(i, view)| format!("{} {}", i + 1, view))
            .collect();

        let directory = match self.session.directory() {
            Some(dir) => dir.display().to_string(),
            None => "no directory (Ctrl+O)".to_string(),
        };

        let tabs = Tabs::new(titles)
            .select(self.view.position())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Co-op Replays | {} | Ctrl+Q: Quit", directory)),
            );

        f.render_widget(tabs, area);
    }

    pub(in crate::ui) fn draw_filter_bar(&self, f: &mut Frame, area: Rect) {
        let selection = &self.session.selection;

        let mut spans = Vec::new();
        let mut push = |key: &str, label: &str, value: Option<String>| {
            let (text, style) = match value {
                Some(v) => (v, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                None => ("any".to_string(), Style::default().fg(Color::DarkGray)),
            };
            spans.push(Span::raw(format!(" {}:{} ", key, label)));
            spans.push(Span::styled(text, style));
        };

        push("p", "Player", selection.player.clone());
        push("c", "Cmdr", selection.commander.clone());
        push("m", "Map", selection.map.clone());
        push("d", "Diff", selection.difficulty.map(|d| d.to_string()));
        push("r", "Enemy", selection.race.map(|r| r.to_string()));
        push("y", "Year", selection.year.map(|y| y.to_string()));
        push(
            "n",
            "Month",
            selection
                .month
                .and_then(|m| (m as usize).checked_sub(1))
                .and_then(|i| MONTHS.get(i))
                .map(|m| m.to_string()),
        );
        push(
            "u",
            "Type",
            selection
                .mutation
                .map(|m| if m { "Mutation" } else { "Regular" }.to_string()),
        );
        push("o", "Result", selection.outcome.map(|o| o.to_string()));

        f.render_widget(
            Paragraph::new(Line::from(spans)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Filters | key cycles, Shift+key back, x: clear"),
            ),
            area,
        );
    }
}
