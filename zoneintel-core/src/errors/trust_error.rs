/// Trust subsystem errors. These are gate rejections with defined
/// semantics, not failures: callers surface them to the voter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrustError {
    #[error("insufficient clearance: voter level {actual} is below the required level {required}")]
    InsufficientClearance { required: u32, actual: u32 },

    #[error("duplicate vote: voter {voter_id} already voted on observation {observation_id}")]
    DuplicateVote {
        observation_id: String,
        voter_id: String,
    },

    #[error("unknown observation: {id}")]
    UnknownObservation { id: String },
}
