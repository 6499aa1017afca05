mod apm;
mod chart;
mod files;
mod logs;
mod overlays;
mod status;
mod time;
mod win_rate;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::{app::App, types::ViewData};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Length(3), // Filters
                Constraint::Min(10),   // Active view
                Constraint::Length(6), // Log panel
            ])
            .split(f.area());

        self.draw_tabs(f, layout[0]);
        self.draw_filter_bar(f, layout[1]);

        match self.view_data() {
            ViewData::Files(records) => self.draw_files(f, layout[2], &records),
            ViewData::Breakdown { title, result } => chart::draw_breakdown(f, layout[2], title, &result),
            ViewData::WinRate(report) => win_rate::draw_win_rate(f, layout[2], &report),
            ViewData::Time(report) => time::draw_time(f, layout[2], &report),
            ViewData::Apm(report) => apm::draw_apm(f, layout[2], &report),
        }

        self.draw_logs(f, layout[3]);

        if let Some(overlay) = &self.overlay {
            self.draw_overlay(f, overlay);
        }
    }
}
