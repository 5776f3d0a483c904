//! Validation modules

pub mod intake;

pub use intake::{
    partition_candidates, FileCandidate, IntakePartition, RejectReason, RejectedFile,
};
