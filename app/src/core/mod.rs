pub mod games;
pub mod policy;
pub mod stats;
pub mod submission;
