//! Keyboard dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::{
    app::App,
    types::{FilterField, InputPurpose, Overlay, ViewKind},
};
use super::{FileHandler, FilterHandler};

const PAGE: isize = 10;

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.app.log("Exit requested");
            return true;
        }

        if let Some(overlay) = self.app.overlay.clone() {
            self.handle_overlay_key(overlay, key);
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('o' | 'O'), KeyModifiers::CONTROL) => {
                FileHandler::new(self.app).open_input(InputPurpose::Directory);
            }

            (KeyCode::Char('r' | 'R'), KeyModifiers::CONTROL) => {
                self.app.log("Reload requested");
                FileHandler::new(self.app).reload();
            }

            (KeyCode::Char('e' | 'E'), KeyModifiers::CONTROL) => {
                FileHandler::new(self.app).open_input(InputPurpose::Export);
            }

            (KeyCode::Tab, _) => self.app.view = self.app.view.next(),
            (KeyCode::BackTab, _) => self.app.view = self.app.view.prev(),

            (KeyCode::Char(c @ '1'..='6'), _) => {
                let position = c as usize - '1' as usize;
                if let Some(view) = ViewKind::from_position(position) {
                    self.app.view = view;
                }
            }

            (KeyCode::Char('x'), _) => FilterHandler::new(self.app).clear(),
            (KeyCode::Char('e'), _) => self.app.overlay = Some(Overlay::Errors),

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT)
                if FilterField::from_key(c).is_some() =>
            {
                if let Some(field) = FilterField::from_key(c) {
                    FilterHandler::new(self.app).cycle(field, !c.is_ascii_uppercase());
                }
            }

            _ if self.app.view == ViewKind::Files => self.handle_files_key(key),
            _ => {}
        }

        false
    }

    fn handle_files_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => FileHandler::new(self.app).move_selection(-1),
            KeyCode::Down => FileHandler::new(self.app).move_selection(1),
            KeyCode::PageUp => FileHandler::new(self.app).move_selection(-PAGE),
            KeyCode::PageDown => FileHandler::new(self.app).move_selection(PAGE),
            KeyCode::Home => self.app.selected = 0,
            KeyCode::End => FileHandler::new(self.app).select_last(),
            KeyCode::Delete => FileHandler::new(self.app).request_delete(),

            KeyCode::Enter => {
                if let Some(record) = self.app.selected_record() {
                    let path = record.path.clone();
                    self.app.overlay = Some(Overlay::Detail(path));
                }
            }

            KeyCode::Char('t') => {
                if let Some(record) = self.app.selected_record() {
                    let path = record.path.clone();
                    self.app.overlay = Some(Overlay::Messages(path));
                }
            }

            _ => {}
        }
    }

    fn handle_overlay_key(&mut self, overlay: Overlay, key: KeyEvent) {
        match overlay {
            Overlay::Input(purpose) => match key.code {
                KeyCode::Esc => {
                    self.app.overlay = None;
                    self.app.input.clear();
                }
                KeyCode::Enter => FileHandler::new(self.app).submit_input(purpose),
                KeyCode::Backspace => {
                    self.app.input.pop();
                }
                KeyCode::Char(c) => self.app.input.push(c),
                _ => {}
            },

            Overlay::ConfirmDelete(path) => match key.code {
                KeyCode::Char('y' | 'Y') => FileHandler::new(self.app).confirm_delete(path),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                    self.app.overlay = None;
                    self.app.log("Delete cancelled");
                }
                _ => {}
            },

            Overlay::Detail(path) => match key.code {
                KeyCode::Char('t') => self.app.overlay = Some(Overlay::Messages(path)),
                KeyCode::Esc | KeyCode::Enter => self.app.overlay = None,
                _ => {}
            },

            Overlay::Messages(path) => match key.code {
                KeyCode::Esc => self.app.overlay = Some(Overlay::Detail(path)),
                KeyCode::Enter | KeyCode::Char('t') => self.app.overlay = None,
                _ => {}
            },

            Overlay::Errors => match key.code {
                KeyCode::Char('c') => {
                    self.app.session.clear_errors();
                    self.app.log("Error list cleared");
                }
                KeyCode::Esc | KeyCode::Char('e') => self.app.overlay = None,
                _ => {}
            },
        }
    }
}
