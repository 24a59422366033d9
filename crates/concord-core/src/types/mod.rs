//! Shared types: ranking model and collection aliases.

pub mod collections;
pub mod ranking;

pub use ranking::{ClusterRanking, ObjectId, RankItem, RankingSide, TieGroup};
