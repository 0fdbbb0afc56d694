//! Engine error taxonomy.
//!
//! Every failure is an `EngineError`. Callers that only need to know how to
//! react (reject the move, stop asking, or treat the state as corrupt) can
//! match on [`EngineError::kind`].

/// How a caller should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input. The state is unchanged and the caller may correct the move.
    Validation,
    /// A finite resource ran out. The caller must stop requesting the action.
    ResourceExhausted,
    /// A state invariant does not hold. Unreachable in a correct engine.
    StateCorruption,
}

/// Errors raised by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Section index outside the board.
    #[error("section index {index} out of range (board has {len} sections)")]
    InvalidSectionIndex { index: usize, len: usize },

    /// Hand index outside the active side's hand.
    #[error("hand index {index} out of range (hand holds {len} cards)")]
    InvalidHandIndex { index: usize, len: usize },

    /// Target formation already holds as many cards as the section allows.
    #[error("formation capacity reached on section {section} ({capacity} cards)")]
    FormationFull { section: usize, capacity: usize },

    /// No card at the requested formation position.
    #[error("formation position {index} out of range (formation holds {len} cards)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration cannot produce a game.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The round already reached a terminal signal.
    #[error("round is over")]
    RoundOver,

    /// Draw requested from an empty deck.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,

    /// Oil requested with none left.
    #[error("no oil left")]
    OilExhausted,

    /// Card conservation or formation capacity does not hold.
    #[error("invariant violated: {0}")]
    InvariantViolated(String),

    /// An opaque state snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl EngineError {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidSectionIndex { .. }
            | EngineError::InvalidHandIndex { .. }
            | EngineError::FormationFull { .. }
            | EngineError::IndexOutOfRange { .. }
            | EngineError::InvalidConfig(_)
            | EngineError::RoundOver
            | EngineError::Snapshot(_) => ErrorKind::Validation,
            EngineError::EmptyDeck | EngineError::OilExhausted => ErrorKind::ResourceExhausted,
            EngineError::InvariantViolated(_) => ErrorKind::StateCorruption,
        }
    }
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            EngineError::FormationFull { section: 0, capacity: 3 }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(EngineError::EmptyDeck.kind(), ErrorKind::ResourceExhausted);
        assert_eq!(EngineError::OilExhausted.kind(), ErrorKind::ResourceExhausted);
        assert_eq!(
            EngineError::InvariantViolated("x".into()).kind(),
            ErrorKind::StateCorruption
        );
    }

    #[test]
    fn test_display() {
        let err = EngineError::InvalidHandIndex { index: 9, len: 6 };
        assert_eq!(err.to_string(), "hand index 9 out of range (hand holds 6 cards)");
    }
}
