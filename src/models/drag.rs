use super::{Board, BoardError, Column};

/// The task currently being dragged.
///
/// Captured on `dragstart` from the card's position, but carries the task
/// id so the drop removes the right task even if the column changed since.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub source: Column,
    pub task_id: String,
    pub label: String,
}

impl DragState {
    pub fn capture(board: &Board, column: Column, index: usize) -> Result<Self, BoardError> {
        let tasks = board.tasks(column);
        let task = tasks.get(index).ok_or(BoardError::IndexOutOfRange {
            column,
            index,
            len: tasks.len(),
        })?;

        Ok(Self {
            source: column,
            task_id: task.id.clone(),
            label: task.label.clone(),
        })
    }
}

/// Consumes the pending drag and applies it to `board`.
///
/// `pending` is always `None` afterwards, whether or not the move happened.
/// Returns the dragged state on success.
pub fn complete_drop(
    pending: &mut Option<DragState>,
    board: &mut Board,
    target: Column,
) -> Result<DragState, BoardError> {
    let drag = pending.take().ok_or(BoardError::NoActiveDrag)?;
    board.move_task(&drag, target)?;
    Ok(drag)
}
