use leptos::prelude::*;

use crate::features::pipeline::services::{
    add_task, begin_move, cancel_move, complete_move, remove_task,
};
use crate::models::{Board, Column, DragState};

/// Board state owned by one pipeline instance, plus the only ways to change it.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: ReadSignal<Board>,
    pub dragged: ReadSignal<Option<DragState>>,
    pub pending_input: RwSignal<String>,
    pub add_task: Callback<Column>,
    pub remove_task: Callback<(Column, usize)>,
    pub begin_move: Callback<(Column, usize)>,
    pub complete_move: Callback<Column>,
    pub cancel_move: Callback<()>,
}

pub fn use_board() -> BoardHook {
    let board = RwSignal::new(Board::new());
    let dragged = RwSignal::new(None::<DragState>);
    let pending_input = RwSignal::new(String::new());

    BoardHook {
        board: board.read_only(),
        dragged: dragged.read_only(),
        pending_input,
        add_task: Callback::new(move |column: Column| {
            add_task(column, board, pending_input);
        }),
        remove_task: Callback::new(move |(column, index): (Column, usize)| {
            remove_task(column, index, board);
        }),
        begin_move: Callback::new(move |(column, index): (Column, usize)| {
            begin_move(column, index, board, dragged);
        }),
        complete_move: Callback::new(move |target: Column| {
            complete_move(target, board, dragged);
        }),
        cancel_move: Callback::new(move |_: ()| {
            cancel_move(dragged);
        }),
    }
}
