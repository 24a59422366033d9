//! Error handling for Concord.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod consensus_error;
pub mod error_code;
pub mod ranking_error;

pub use config_error::ConfigError;
pub use consensus_error::ConsensusError;
pub use error_code::ConcordErrorCode;
pub use ranking_error::RankingError;
