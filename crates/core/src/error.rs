use thiserror::Error;

use crate::model::slot_key::SlotKeyError;
use crate::operations::CommandError;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error(transparent)]
    Key(#[from] SlotKeyError),
    #[error(transparent)]
    Command(#[from] CommandError),
}
