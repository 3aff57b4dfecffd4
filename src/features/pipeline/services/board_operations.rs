use leptos::logging::{error, log};
use leptos::prelude::*;

use crate::models::{complete_drop, Board, BoardError, Column, DragState};

// None of these surface errors to the user. A rejected operation leaves the
// board as it was and only leaves a trace in the console.

fn log_no_op(operation: &str, reason: &BoardError) {
    log!("{} ignored: {}", operation, reason);
}

// Add the pending input to a column, clearing the input on success
pub fn add_task(column: Column, board: RwSignal<Board>, pending_input: RwSignal<String>) {
    let text = pending_input.get_untracked();
    let added = board.try_update(|board| board.add_task(column, &text).cloned());

    match added {
        Some(Ok(task)) => {
            pending_input.set(String::new());
            log!("Task {} added to '{}'", task.id, column);
        }
        Some(Err(e)) => log_no_op("add_task", &e),
        None => error!("Board signal disposed during add_task"),
    }
}

pub fn remove_task(column: Column, index: usize, board: RwSignal<Board>) {
    match board.try_update(|board| board.remove_task(column, index)) {
        Some(Ok(task)) => log!("Task {} removed from '{}'", task.id, column),
        Some(Err(e)) => log_no_op("remove_task", &e),
        None => error!("Board signal disposed during remove_task"),
    }
}

// Record the card under the pointer as the in-flight drag
pub fn begin_move(
    column: Column,
    index: usize,
    board: RwSignal<Board>,
    dragged: RwSignal<Option<DragState>>,
) {
    match board.with_untracked(|board| DragState::capture(board, column, index)) {
        Ok(drag) => dragged.set(Some(drag)),
        Err(e) => {
            log_no_op("begin_move", &e);
            dragged.set(None);
        }
    }
}

// Apply the in-flight drag to the drop target. The drag is cleared either way.
pub fn complete_move(
    target: Column,
    board: RwSignal<Board>,
    dragged: RwSignal<Option<DragState>>,
) {
    let Some(mut pending) = dragged.try_update(Option::take) else {
        error!("Drag signal disposed during complete_move");
        return;
    };

    match board.try_update(|board| complete_drop(&mut pending, board, target)) {
        Some(Ok(drag)) => log!(
            "Task {} moved from '{}' to '{}'",
            drag.task_id,
            drag.source,
            target
        ),
        Some(Err(e)) => log_no_op("complete_move", &e),
        None => error!("Board signal disposed during complete_move"),
    }
}

// dragend fires after drop as well, so this is usually already a no-op
pub fn cancel_move(dragged: RwSignal<Option<DragState>>) {
    if dragged.with_untracked(Option::is_some) {
        dragged.set(None);
    }
}
