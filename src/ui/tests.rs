//! UI module tests.

use std::fs;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::{TempDir, tempdir};

use super::{
    app::App,
    handlers::{FileHandler, FilterHandler, InputHandler},
    types::{FilterField, InputPurpose, LogBuffer, Overlay, ViewData, ViewKind},
};
use crate::{
    config::Preferences,
    parser::{JsonReplayParser, samples::coop_summary},
    session::Session,
};

const ALICE: &str = "<CLAN> Alice";

/// Helper function to create a test app with no directory selected.
fn create_test_app() -> App {
    let session = Session::with_parser(Preferences::default(), None, Box::new(JsonReplayParser));
    App::new(session, LogBuffer::new())
}

fn write_replay(dir: &Path, name: &str, map: &str, secs: u64) -> PathBuf {
    let path = dir.join(format!("{}.SC2Replay.json", name));
    fs::write(&path, coop_summary(map, secs * 16).to_string()).unwrap();
    path
}

/// App with two full games and one short game loaded.
fn loaded_app() -> (App, TempDir) {
    let dir = tempdir().unwrap();
    write_replay(dir.path(), "a", "Void Launch", 600);
    write_replay(dir.path(), "b", "Dead of Night", 900);
    write_replay(dir.path(), "c", "Void Launch", 60);

    let mut app = create_test_app();
    FileHandler::new(&mut app).select_directory(dir.path().to_path_buf());
    (app, dir)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    InputHandler::new(app).handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press_ctrl(app: &mut App, c: char) -> bool {
    InputHandler::new(app).handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[test]
    fn test_app_initialization() {
        let app = create_test_app();

        assert_eq!(app.view, ViewKind::Files);
        assert_eq!(app.selected, 0);
        assert!(app.overlay.is_none());
        assert!(app.input.is_empty());
        assert!(app.visible_records().is_empty());
    }

    #[test]
    fn test_log_buffer() {
        let logs = LogBuffer::new();

        logs.push("Test message 1".to_string());
        logs.push("Test message 2".to_string());

        let lines = logs.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Test message 1");
        assert_eq!(lines[1], "Test message 2");
    }

    #[test]
    fn test_log_buffer_max_capacity() {
        let logs = LogBuffer::new();

        for i in 0..350 {
            logs.push(format!("Message {}", i));
        }

        let lines = logs.lines();
        assert_eq!(lines.len(), super::super::types::MAX_LOG_LINES);
        assert_eq!(lines.last().map(String::as_str), Some("Message 349"));
    }

    #[test]
    fn test_loading_defaults_player() {
        let (app, _dir) = loaded_app();

        assert_eq!(app.session.records().len(), 3);
        assert_eq!(app.session.selection.player.as_deref(), Some(ALICE));
        assert_eq!(app.visible_records().len(), 3);
    }

    #[test]
    fn test_breakdown_skips_short_games() {
        let (mut app, _dir) = loaded_app();
        app.view = ViewKind::Maps;

        let ViewData::Breakdown { result, .. } = app.view_data() else {
            panic!("expected a breakdown");
        };

        assert_eq!(result.total, 2);
        assert_eq!(result.get("Void Launch").map(|r| r.count), Some(1));
        assert_eq!(result.get("Dead of Night").map(|r| r.count), Some(1));
    }

    #[test]
    fn test_commander_view_counts_selected_player() {
        let (mut app, _dir) = loaded_app();
        app.view = ViewKind::Commanders;

        let ViewData::Breakdown { result, .. } = app.view_data() else {
            panic!("expected a breakdown");
        };

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].key, "Raynor");
        assert_eq!(result.rows[0].percent, 100.0);
    }

    #[test]
    fn test_win_rate_view_ignores_difficulty_filter_in_buckets() {
        let (mut app, _dir) = loaded_app();
        app.view = ViewKind::WinRate;
        app.session.selection.difficulty = Some(crate::replay::Difficulty::Casual);

        let ViewData::WinRate(report) = app.view_data() else {
            panic!("expected win rates");
        };

        let brutal = crate::replay::Difficulty::Brutal.index();
        assert_eq!(report.regular[brutal].games, 2);
        assert_eq!(report.regular_total.games, 0);
    }
}

#[cfg(test)]
mod input_handler_tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert!(press_ctrl(&mut app, 'q'));
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_tab_navigation() {
        let mut app = create_test_app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, ViewKind::Commanders);

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view, ViewKind::Apm);

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.view, ViewKind::WinRate);
    }

    #[test]
    fn test_directory_input_scans() {
        let dir = tempdir().unwrap();
        write_replay(dir.path(), "a", "Void Launch", 600);
        let mut app = create_test_app();

        press_ctrl(&mut app, 'o');
        assert_eq!(app.overlay, Some(Overlay::Input(InputPurpose::Directory)));

        for c in dir.path().display().to_string().chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.overlay.is_none());
        assert_eq!(app.session.records().len(), 1);
        assert_eq!(app.session.directory(), Some(dir.path()));
    }

    #[test]
    fn test_missing_directory_logs_error() {
        let dir = tempdir().unwrap();
        let mut app = create_test_app();

        FileHandler::new(&mut app).select_directory(dir.path().join("gone"));

        assert_eq!(app.session.errors().len(), 1);
        assert!(app.session.records().is_empty());
    }

    #[test]
    fn test_escape_cancels_input() {
        let mut app = create_test_app();
        press_ctrl(&mut app, 'e');
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);

        assert!(app.overlay.is_none());
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_detail_and_messages() {
        let (mut app, _dir) = loaded_app();

        press(&mut app, KeyCode::Enter);
        let Some(Overlay::Detail(path)) = app.overlay.clone() else {
            panic!("expected detail overlay");
        };

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.overlay, Some(Overlay::Messages(path.clone())));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Some(Overlay::Detail(path)));

        press(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let (mut app, _dir) = loaded_app();

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.selected, 2);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 1);

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_error_overlay_clears() {
        let mut app = create_test_app();
        app.session.push_error("/x", "boom");

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.overlay, Some(Overlay::Errors));

        press(&mut app, KeyCode::Char('c'));
        assert!(app.session.errors().is_empty());
    }
}

#[cfg(test)]
mod file_handler_tests {
    use super::*;

    #[test]
    fn test_delete_requires_confirmation() {
        let (mut app, _dir) = loaded_app();
        let path = app.visible_records()[0].path.clone();

        press(&mut app, KeyCode::Delete);
        assert_eq!(app.overlay, Some(Overlay::ConfirmDelete(path.clone())));

        press(&mut app, KeyCode::Char('n'));
        assert!(app.overlay.is_none());
        assert!(path.exists());

        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Char('y'));

        assert!(!path.exists());
        assert_eq!(app.session.records().len(), 2);
        assert!(app.session.get(&path).is_none());
    }

    #[test]
    fn test_delete_last_row_clamps_selection() {
        let (mut app, _dir) = loaded_app();
        FileHandler::new(&mut app).select_last();
        let path = app.visible_records()[2].path.clone();

        FileHandler::new(&mut app).confirm_delete(path);

        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_export_writes_filtered_games() {
        let (mut app, dir) = loaded_app();
        let out = dir.path().join("out.csv");

        FileHandler::new(&mut app).export(out.clone());

        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_reload_picks_up_new_files() {
        let (mut app, dir) = loaded_app();
        write_replay(dir.path(), "d", "Oblivion Express", 700);

        press_ctrl(&mut app, 'r');

        assert_eq!(app.session.records().len(), 4);
    }
}

#[cfg(test)]
mod filter_handler_tests {
    use super::*;

    #[test]
    fn test_cycle_player() {
        let (mut app, _dir) = loaded_app();

        FilterHandler::new(&mut app).cycle(FilterField::Player, true);
        assert_eq!(app.session.selection.player.as_deref(), Some("Bob"));

        FilterHandler::new(&mut app).cycle(FilterField::Player, true);
        assert_eq!(app.session.selection.player, None);
    }

    #[test]
    fn test_map_key_filters_list() {
        let (mut app, _dir) = loaded_app();

        // Maps sort alphabetically: Dead of Night first.
        press(&mut app, KeyCode::Char('m'));

        assert_eq!(app.session.selection.map.as_deref(), Some("Dead of Night"));
        assert_eq!(app.visible_records().len(), 1);
    }

    #[test]
    fn test_shift_cycles_backward() {
        let (mut app, _dir) = loaded_app();

        InputHandler::new(&mut app)
            .handle_key(KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT));

        assert_eq!(app.session.selection.map.as_deref(), Some("Void Launch"));
    }

    #[test]
    fn test_player_change_drops_foreign_commander() {
        let (mut app, _dir) = loaded_app();
        app.session.selection.commander = Some("Raynor".to_string());

        FilterHandler::new(&mut app).cycle(FilterField::Player, true);

        assert_eq!(app.session.selection.player.as_deref(), Some("Bob"));
        assert_eq!(app.session.selection.commander, None);
    }

    #[test]
    fn test_clear_filters() {
        let (mut app, _dir) = loaded_app();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('x'));

        assert!(app.session.selection.is_empty());
        assert_eq!(app.visible_records().len(), 3);
    }
}
