pub mod error;
pub mod model;
pub mod operations;
pub mod state;
pub mod store;
pub mod undo;
pub mod validation;
pub mod view;

pub use error::{CoreError, Result};
pub use model::booking::{Booking, BookingKind, BLOCKED_LABEL};
pub use model::grid::GridConfig;
pub use model::notice::{Notice, Severity};
pub use model::slot_key::{SlotKey, SlotKeyError};
pub use operations::{apply, notice_for, CommandError, CommandOutcome};
pub use state::AppState;
pub use store::BookingStore;
pub use undo::{UndoEntry, UndoError, UndoLog, DEFAULT_UNDO_CAPACITY};
pub use view::{render, GridView, SlotStatus, SlotView};
