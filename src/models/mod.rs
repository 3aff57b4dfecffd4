pub mod board;
pub mod column;
pub mod drag;
pub mod error;
pub mod task;

pub use board::Board;
pub use column::Column;
pub use drag::{complete_drop, DragState};
pub use error::BoardError;
pub use task::Task;
