//! Position indexing: object → index of the ranking item that holds it.

use concord_core::config::MissingObjectPolicy;
use concord_core::types::collections::FxHashMap;
use concord_core::{ClusterRanking, ObjectId, RankItem, RankingError, RankingSide};
use tracing::{debug, warn};

use crate::universe::Universe;

/// Object → 0-based item index for one ranking.
///
/// Two objects share an index iff they sit in the same tie-group.
#[derive(Debug, Clone)]
pub struct PositionMap {
    side: RankingSide,
    positions: FxHashMap<ObjectId, usize>,
    item_count: usize,
    filled: usize,
}

impl PositionMap {
    /// Index every object of `ranking`.
    ///
    /// An empty tie-group is malformed. An object listed in two different
    /// items is `InvalidRanking` when `strict_duplicates` is set; otherwise the
    /// later item wins.
    pub fn build(
        ranking: &ClusterRanking,
        side: RankingSide,
        strict_duplicates: bool,
    ) -> Result<Self, RankingError> {
        let mut positions =
            FxHashMap::with_capacity_and_hasher(ranking.object_count(), Default::default());

        for (idx, item) in ranking.items.iter().enumerate() {
            if let RankItem::Group(group) = item {
                if group.is_empty() {
                    return Err(RankingError::malformed(format!("item {idx} is an empty tie-group"))
                        .in_ranking(side));
                }
            }
            for &object in item.members() {
                match positions.insert(object, idx) {
                    Some(first) if first != idx => {
                        if strict_duplicates {
                            return Err(RankingError::InvalidRanking {
                                side,
                                object,
                                first,
                                second: idx,
                            });
                        }
                        warn!(%side, object, first, second = idx, "object ranked twice; keeping later position");
                    }
                    _ => {}
                }
            }
        }

        Ok(Self {
            side,
            positions,
            item_count: ranking.len(),
            filled: 0,
        })
    }

    pub fn side(&self) -> RankingSide {
        self.side
    }

    pub fn get(&self, object: ObjectId) -> Option<usize> {
        self.positions.get(&object).copied()
    }

    /// Number of objects with a position.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of objects positioned by `complete` rather than by the ranking.
    pub fn filled_count(&self) -> usize {
        self.filled
    }

    /// Give every universe object absent from this ranking a position
    /// according to `policy`. A ranking that already covers the universe is
    /// left untouched.
    pub fn complete(
        &mut self,
        universe: &Universe,
        policy: MissingObjectPolicy,
    ) -> Result<(), RankingError> {
        let missing: Vec<ObjectId> = universe
            .objects()
            .iter()
            .copied()
            .filter(|o| !self.positions.contains_key(o))
            .collect();
        let Some(&first_missing) = missing.first() else {
            return Ok(());
        };

        let slot = match policy {
            MissingObjectPolicy::Reject => {
                return Err(RankingError::IncompleteRanking {
                    side: self.side,
                    object: first_missing,
                });
            }
            MissingObjectPolicy::AppendTied => self.item_count,
            MissingObjectPolicy::PrependTied => {
                for pos in self.positions.values_mut() {
                    *pos += 1;
                }
                0
            }
        };

        debug!(side = %self.side, missing = missing.len(), slot, %policy, "filled missing objects");
        self.filled = missing.len();
        self.item_count += 1;
        self.positions.extend(missing.into_iter().map(|o| (o, slot)));
        Ok(())
    }

    /// Positions laid out in universe order.
    pub fn aligned(&self, universe: &Universe) -> Result<Vec<usize>, RankingError> {
        universe
            .objects()
            .iter()
            .map(|&object| {
                self.get(object).ok_or(RankingError::IncompleteRanking {
                    side: self.side,
                    object,
                })
            })
            .collect()
    }
}
