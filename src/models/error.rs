use thiserror::Error;

use super::Column;

/// Why a board operation turned into a no-op.
///
/// None of these reach the user; the pipeline services log them to the
/// console and leave the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("task text is empty after trimming")]
    EmptyLabel,
    #[error("index {index} is out of range for column '{column}' ({len} tasks)")]
    IndexOutOfRange {
        column: Column,
        index: usize,
        len: usize,
    },
    #[error("task dropped back onto its source column '{0}'")]
    SameColumn(Column),
    #[error("drop received with no drag in progress")]
    NoActiveDrag,
    #[error("task {task_id} is no longer in column '{column}'")]
    TaskNotFound {
        column: Column,
        task_id: String,
    },
}
