pub mod booking;
pub mod grid;
pub mod notice;
pub mod scenario;
pub mod slot_key;

pub use booking::{Booking, BookingKind, BLOCKED_LABEL};
pub use grid::GridConfig;
pub use notice::{Notice, Severity};
pub use scenario::{
    CommandDef, Expectation, ExpectedSlot, MatchMode, MismatchKind, Scenario, ScenarioConfig,
    ScenarioErrorDetail, ScenarioErrorType, ScenarioReport, ScenarioStatus, SlotMismatch,
    StepDisposition, StepReport, SuiteReport,
};
pub use slot_key::{SlotKey, SlotKeyError};
