//! Explicit application state threaded through every command handler.

use crate::model::grid::GridConfig;
use crate::model::slot_key::SlotKey;
use crate::store::BookingStore;
use crate::undo::UndoLog;
use crate::view::{render, GridView};

/// Everything a command handler may read or mutate. Handlers take
/// `&mut AppState` and return an outcome; nothing lives in globals.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: GridConfig,
    pub store: BookingStore,
    pub undo: UndoLog,
    pub selection: Option<SlotKey>,
}

impl AppState {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            store: BookingStore::new(),
            undo: UndoLog::new(),
            selection: None,
        }
    }

    pub fn with_undo_capacity(config: GridConfig, capacity: usize) -> Self {
        Self {
            undo: UndoLog::with_capacity(capacity),
            ..Self::new(config)
        }
    }

    /// Rebuilds the grid. Bookings are retained (the projection simply stops
    /// showing out-of-window ones); the undo log is reset; the selection is
    /// dropped when it falls outside the new grid.
    pub fn reconfigure(&mut self, config: GridConfig) {
        self.config = config;
        self.undo.clear();
        if self
            .selection
            .as_ref()
            .is_some_and(|key| !self.config.contains(key))
        {
            self.selection = None;
        }
    }

    /// Current grid projection.
    pub fn view(&self) -> GridView {
        render(&self.config, &self.store, self.selection.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::booking::Booking;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn reconfigure_resets_undo_and_prunes_selection() {
        let mut state = AppState::new(GridConfig::numbered(4, date(1), 7));
        let key = SlotKey::new("Hangar 4", date(5));
        state
            .undo
            .snapshot(&state.store, [key.clone()], "seed entry");
        state.store.set(
            key.clone(),
            Booking::reserved("Hangar 4", date(5), "Inspection"),
        );
        state.selection = Some(key.clone());

        state.reconfigure(GridConfig::numbered(2, date(1), 7));

        assert!(state.undo.is_empty());
        assert_eq!(state.selection, None);
        // Out-of-grid bookings are retained, just not projected.
        assert!(state.store.contains(&key));
        assert!(state.view().slot("Hangar 4", date(5)).is_none());
    }

    #[test]
    fn reconfigure_keeps_selection_still_inside_the_grid() {
        let mut state = AppState::new(GridConfig::numbered(4, date(1), 7));
        let key = SlotKey::new("Hangar 1", date(2));
        state.selection = Some(key.clone());

        state.reconfigure(GridConfig::numbered(2, date(1), 3));
        assert_eq!(state.selection, Some(key));
    }
}
