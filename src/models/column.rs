use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Job,
    NextReview,
    Declined,
    Approved,
}

impl Column {
    /// Identifier of the column as the board knows it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Job => "job",
            Column::NextReview => "next review",
            Column::Declined => "declined",
            Column::Approved => "approved",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Column::Job => "Job",
            Column::NextReview => "Next Review",
            Column::Declined => "Declined",
            Column::Approved => "Approved",
        }
    }

    // Display order, left to right
    pub fn all() -> [Column; 4] {
        [
            Column::Job,
            Column::NextReview,
            Column::Declined,
            Column::Approved,
        ]
    }

    pub(crate) fn slot(&self) -> usize {
        match self {
            Column::Job => 0,
            Column::NextReview => 1,
            Column::Declined => 2,
            Column::Approved => 3,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
