//! Cluster-ranking model: an ordered sequence of singletons and tie-groups.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::collections::SmallVec4;

/// Opaque, totally-ordered object identifier.
pub type ObjectId = i64;

/// Members of one tie-group.
pub type TieGroup = SmallVec4<ObjectId>;

/// One position of a cluster-ranking.
///
/// Serializes untagged: a singleton is a bare number, a group is an array of
/// numbers, so `[1,[2,3],4]` is a ranking of three items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RankItem {
    Singleton(ObjectId),
    Group(TieGroup),
}

impl RankItem {
    /// Build an item from cluster members: one member becomes a singleton.
    pub fn from_members(members: &[ObjectId]) -> Self {
        match members {
            [single] => RankItem::Singleton(*single),
            _ => RankItem::Group(members.iter().copied().collect()),
        }
    }

    /// Objects occupying this position.
    pub fn members(&self) -> &[ObjectId] {
        match self {
            RankItem::Singleton(id) => std::slice::from_ref(id),
            RankItem::Group(group) => group.as_slice(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, RankItem::Group(_))
    }
}

impl From<ObjectId> for RankItem {
    fn from(id: ObjectId) -> Self {
        RankItem::Singleton(id)
    }
}

impl From<Vec<ObjectId>> for RankItem {
    fn from(members: Vec<ObjectId>) -> Self {
        RankItem::Group(members.into_iter().collect())
    }
}

/// An ordered sequence of ranking items, leftmost first.
///
/// Position 0 is the leftmost item; the consensus engine treats larger
/// positions as better, so the sequence reads worst to best.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterRanking {
    pub items: Vec<RankItem>,
}

impl ClusterRanking {
    pub fn new(items: Vec<RankItem>) -> Self {
        Self { items }
    }

    /// Build a ranking from ordered clusters, rendering one-member clusters
    /// as singletons.
    pub fn from_clusters<I, C>(clusters: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[ObjectId]>,
    {
        Self {
            items: clusters
                .into_iter()
                .map(|c| RankItem::from_members(c.as_ref()))
                .collect(),
        }
    }

    /// Number of items (positions), not objects.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate every object, group members individually, in item order.
    pub fn objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.items.iter().flat_map(|item| item.members().iter().copied())
    }

    pub fn object_count(&self) -> usize {
        self.items.iter().map(|item| item.members().len()).sum()
    }
}

impl From<Vec<RankItem>> for ClusterRanking {
    fn from(items: Vec<RankItem>) -> Self {
        Self::new(items)
    }
}

/// Which of the two input rankings a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankingSide {
    A,
    B,
}

impl fmt::Display for RankingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingSide::A => f.write_str("A"),
            RankingSide::B => f.write_str("B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_members_collapses_single_member() {
        assert_eq!(RankItem::from_members(&[7]), RankItem::Singleton(7));
        assert!(RankItem::from_members(&[1, 2]).is_group());
    }

    #[test]
    fn objects_flattens_groups_in_order() {
        let ranking = ClusterRanking::new(vec![1.into(), vec![2, 3].into(), 4.into()]);
        assert_eq!(ranking.objects().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(ranking.object_count(), 4);
        assert_eq!(ranking.len(), 3);
    }

    #[test]
    fn serde_uses_bracket_notation() {
        let ranking: ClusterRanking = serde_json::from_str("[1,[2,3],4]").unwrap();
        assert_eq!(ranking.items[1], RankItem::Group([2, 3].into_iter().collect()));
        assert_eq!(serde_json::to_string(&ranking).unwrap(), "[1,[2,3],4]");
    }
}
