use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoalDataError {
    #[error("Bad minute value: '{0}'")]
    BadMinute(String),

    #[error("Bad venue value: '{0}'")]
    BadVenue(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Bad record at line {line}: {reason}")]
    BadRecord { line: u64, reason: String },

    #[error("{kind} not found: {name}")]
    NotFound { kind: SelectorKind, name: String },

    #[error("Dataset contains no goal events")]
    EmptyDataset,
}

impl GoalDataError {
    /// Wrap a field-level parse failure with the CSV line it came from.
    pub fn at_line(self, line: u64) -> Self {
        match self {
            GoalDataError::BadRecord { .. } => self,
            other => GoalDataError::BadRecord { line, reason: other.to_string() },
        }
    }

    /// Row-level problems can be skipped; schema problems cannot.
    pub fn is_recoverable(&self) -> bool {
        match self {
            GoalDataError::BadMinute(_) => true,
            GoalDataError::BadVenue(_) => true,
            GoalDataError::BadRecord { .. } => true,
            GoalDataError::MissingColumn(_) => false,
            GoalDataError::NotFound { .. } => false,
            GoalDataError::EmptyDataset => false,
        }
    }
}

/// Which selector a lookup failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    League,
    Team,
    Player,
    Match,
}

impl std::fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            SelectorKind::League => "League",
            SelectorKind::Team => "Team",
            SelectorKind::Player => "Player",
            SelectorKind::Match => "Match",
        };
        write!(f, "{}", name)
    }
}

pub type Result<T> = std::result::Result<T, GoalDataError>;
