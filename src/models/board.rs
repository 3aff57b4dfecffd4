use super::{BoardError, Column, DragState, Task};

/// Tasks of every column, each kept in insertion order.
///
/// A task lives in exactly one column. All mutation goes through
/// [`Board::add_task`], [`Board::remove_task`] and [`Board::move_task`];
/// when one of them returns an error the board is unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    columns: [Vec<Task>; 4],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self, column: Column) -> &[Task] {
        &self.columns[column.slot()]
    }

    pub fn len(&self, column: Column) -> usize {
        self.tasks(column).len()
    }

    pub fn labels(&self, column: Column) -> Vec<&str> {
        self.tasks(column)
            .iter()
            .map(|t| t.label.as_str())
            .collect()
    }

    /// Appends a task with the trimmed `text` to the end of `column`.
    pub fn add_task(&mut self, column: Column, text: &str) -> Result<&Task, BoardError> {
        let label = text.trim();
        if label.is_empty() {
            return Err(BoardError::EmptyLabel);
        }

        let tasks = &mut self.columns[column.slot()];
        tasks.push(Task::new(label.to_string()));
        Ok(&tasks[tasks.len() - 1])
    }

    /// Removes the task at `index`, shifting the rest of the column left.
    pub fn remove_task(&mut self, column: Column, index: usize) -> Result<Task, BoardError> {
        let tasks = &mut self.columns[column.slot()];
        if index >= tasks.len() {
            return Err(BoardError::IndexOutOfRange {
                column,
                index,
                len: tasks.len(),
            });
        }
        Ok(tasks.remove(index))
    }

    /// Moves the dragged task to the end of `target`.
    ///
    /// The task is looked up by id in its source column, so a drag that
    /// outlived its task fails with [`BoardError::TaskNotFound`].
    pub fn move_task(&mut self, drag: &DragState, target: Column) -> Result<(), BoardError> {
        if drag.source == target {
            return Err(BoardError::SameColumn(target));
        }

        let Some(index) = self.position(drag.source, &drag.task_id) else {
            return Err(BoardError::TaskNotFound {
                column: drag.source,
                task_id: drag.task_id.clone(),
            });
        };

        let task = self.columns[drag.source.slot()].remove(index);
        self.columns[target.slot()].push(task);
        Ok(())
    }

    fn position(&self, column: Column, task_id: &str) -> Option<usize> {
        self.tasks(column).iter().position(|t| t.id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(column: Column, labels: &[&str]) -> Board {
        let mut board = Board::new();
        for label in labels {
            board.add_task(column, label).unwrap();
        }
        board
    }

    fn total(board: &Board) -> usize {
        Column::all().into_iter().map(|column| board.len(column)).sum()
    }

    fn drag(board: &Board, column: Column, index: usize) -> DragState {
        DragState::capture(board, column, index).unwrap()
    }

    #[test]
    fn starts_with_every_column_empty() {
        let board = Board::new();
        for column in Column::all() {
            assert!(board.tasks(column).is_empty());
        }
        assert_eq!(total(&board), 0);
    }

    #[test]
    fn whitespace_only_text_is_ignored() {
        let mut board = Board::new();
        assert_eq!(
            board.add_task(Column::Declined, "   ").unwrap_err(),
            BoardError::EmptyLabel
        );
        assert_eq!(
            board.add_task(Column::Declined, "\t\n").unwrap_err(),
            BoardError::EmptyLabel
        );
        assert!(board.tasks(Column::Declined).is_empty());
    }

    #[test]
    fn add_appends_trimmed_label_to_one_column_only() {
        let mut board = board_with(Column::Job, &["first"]);
        board.add_task(Column::Job, "  X  ").unwrap();

        assert_eq!(board.labels(Column::Job), vec!["first", "X"]);
        for column in [Column::NextReview, Column::Declined, Column::Approved] {
            assert!(board.tasks(column).is_empty());
        }
    }

    #[test]
    fn duplicate_labels_are_distinct_tasks() {
        let board = board_with(Column::Approved, &["same", "same"]);
        let tasks = board.tasks(Column::Approved);
        assert_eq!(tasks.len(), 2);
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut board = board_with(Column::Job, &["a", "b", "c"]);
        let removed = board.remove_task(Column::Job, 1).unwrap();

        assert_eq!(removed.label, "b");
        assert_eq!(board.labels(Column::Job), vec!["a", "c"]);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut board = board_with(Column::Job, &["a", "b"]);
        let before = board.clone();

        assert_eq!(
            board.remove_task(Column::Job, 2).unwrap_err(),
            BoardError::IndexOutOfRange {
                column: Column::Job,
                index: 2,
                len: 2
            }
        );
        assert!(board.remove_task(Column::Approved, 0).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn move_appends_to_target_and_conserves_total() {
        let mut board = board_with(Column::Job, &["a", "b", "c"]);
        board.add_task(Column::Approved, "done").unwrap();
        let before = total(&board);

        let dragged = drag(&board, Column::Job, 1);
        board.move_task(&dragged, Column::Approved).unwrap();

        assert_eq!(board.labels(Column::Job), vec!["a", "c"]);
        assert_eq!(board.labels(Column::Approved), vec!["done", "b"]);
        assert_eq!(total(&board), before);
    }

    #[test]
    fn moved_task_keeps_its_identity() {
        let mut board = board_with(Column::Job, &["write spec"]);
        let id = board.tasks(Column::Job)[0].id.clone();

        let dragged = drag(&board, Column::Job, 0);
        board.move_task(&dragged, Column::Approved).unwrap();

        assert!(board.labels(Column::Job).is_empty());
        assert_eq!(board.labels(Column::Approved), vec!["write spec"]);
        assert_eq!(board.tasks(Column::Approved)[0].id, id);
    }

    #[test]
    fn drop_on_source_column_changes_nothing() {
        let mut board = board_with(Column::NextReview, &["a", "b"]);
        let before = board.clone();

        let dragged = drag(&board, Column::NextReview, 0);
        assert_eq!(
            board.move_task(&dragged, Column::NextReview).unwrap_err(),
            BoardError::SameColumn(Column::NextReview)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn move_targets_the_dragged_task_even_after_the_column_shifts() {
        let mut board = board_with(Column::Job, &["a", "b", "c"]);
        let dragged = drag(&board, Column::Job, 2);

        board.remove_task(Column::Job, 0).unwrap();
        board.move_task(&dragged, Column::Declined).unwrap();

        assert_eq!(board.labels(Column::Job), vec!["b"]);
        assert_eq!(board.labels(Column::Declined), vec!["c"]);
    }

    #[test]
    fn move_of_a_removed_task_is_a_no_op() {
        let mut board = board_with(Column::Job, &["a", "b"]);
        let dragged = drag(&board, Column::Job, 1);
        board.remove_task(Column::Job, 1).unwrap();
        let before = board.clone();

        assert!(matches!(
            board.move_task(&dragged, Column::Approved),
            Err(BoardError::TaskNotFound {
                column: Column::Job,
                ..
            })
        ));
        assert_eq!(board, before);
    }
}
