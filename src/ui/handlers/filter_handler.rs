//! Cycling filter values from the keyboard.

use strum::IntoEnumIterator;

use crate::{
    filter,
    replay::{Difficulty, Outcome, Race},
};

use super::super::{app::App, types::FilterField};

/// Steps `current` through `None` followed by every option, wrapping around.
fn cycle<T: PartialEq + Clone>(current: &Option<T>, options: &[T], forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }

    let position = current
        .as_ref()
        .and_then(|value| options.iter().position(|o| o == value));

    // Slot 0 is "unset"; option i lives in slot i + 1.
    let slots = options.len() + 1;
    let slot = position.map_or(0, |p| p + 1);
    let next = if forward {
        (slot + 1) % slots
    } else {
        (slot + slots - 1) % slots
    };

    next.checked_sub(1).map(|i| options[i].clone())
}

/// Helper struct for changing the active filter selection.
pub struct FilterHandler<'a> {
    app: &'a mut App,
}

impl<'a> FilterHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn cycle(&mut self, field: FilterField, forward: bool) {
        let records = self.app.session.records();
        let selection = &self.app.session.selection;

        let mut next = selection.clone();
        match field {
            FilterField::Player => {
                next.player = cycle(&selection.player, &filter::player_candidates(records), forward);
                // The commander list depends on the player.
                if let Some(commander) = &next.commander
                    && !filter::commander_candidates(records, next.player.as_deref()).contains(commander)
                {
                    next.commander = None;
                }
            }
            FilterField::Commander => {
                let options = filter::commander_candidates(records, selection.player.as_deref());
                next.commander = cycle(&selection.commander, &options, forward);
            }
            FilterField::Map => {
                next.map = cycle(&selection.map, &filter::map_candidates(records), forward);
            }
            FilterField::Difficulty => {
                next.difficulty = cycle(&selection.difficulty, &Difficulty::all(), forward);
            }
            FilterField::Race => {
                let races: Vec<Race> = Race::iter().collect();
                next.race = cycle(&selection.race, &races, forward);
            }
            FilterField::Year => {
                next.year = cycle(&selection.year, &filter::year_candidates(records), forward);
            }
            FilterField::Month => {
                next.month = cycle(&selection.month, &filter::month_candidates(records), forward);
            }
            FilterField::Mutation => {
                next.mutation = cycle(&selection.mutation, &[true, false], forward);
            }
            FilterField::Outcome => {
                next.outcome = cycle(
                    &selection.outcome,
                    &[Outcome::Victory, Outcome::Defeat],
                    forward,
                );
            }
        }

        self.app.session.selection = next;
        self.app.clamp_selection();

        let label = self.describe(field);
        self.app.log(format!("{} filter: {}", field, label));
    }

    fn describe(&self, field: FilterField) -> String {
        let selection = &self.app.session.selection;
        let value = match field {
            FilterField::Player => selection.player.clone(),
            FilterField::Commander => selection.commander.clone(),
            FilterField::Map => selection.map.clone(),
            FilterField::Difficulty => selection.difficulty.map(|d| d.to_string()),
            FilterField::Race => selection.race.map(|r| r.to_string()),
            FilterField::Year => selection.year.map(|y| y.to_string()),
            FilterField::Month => selection.month.map(|m| m.to_string()),
            FilterField::Mutation => selection
                .mutation
                .map(|m| if m { "mutation" } else { "regular" }.to_string()),
            FilterField::Outcome => selection.outcome.map(|o| o.to_string()),
        };
        value.unwrap_or_else(|| "any".to_string())
    }

    pub fn clear(&mut self) {
        self.app.session.selection = Default::default();
        self.app.clamp_selection();
        self.app.log("Filters cleared");
    }
}
