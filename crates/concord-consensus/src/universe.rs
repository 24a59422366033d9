//! Object collection: the sorted union of both rankings' objects.

use concord_core::types::collections::FxHashMap;
use concord_core::{ClusterRanking, ObjectId, RankingError};

/// Every object under consideration, sorted and deduplicated, with a
/// precomputed object → index map.
#[derive(Debug, Clone)]
pub struct Universe {
    objects: Vec<ObjectId>,
    index: FxHashMap<ObjectId, usize>,
}

impl Universe {
    /// Union the objects of two rankings (group members count individually).
    ///
    /// Fails with `EmptyUniverse` only when both rankings contain no objects.
    pub fn collect(a: &ClusterRanking, b: &ClusterRanking) -> Result<Self, RankingError> {
        let universe = Self::from_objects(a.objects().chain(b.objects()));
        if universe.is_empty() {
            return Err(RankingError::EmptyUniverse);
        }
        Ok(universe)
    }

    pub fn from_objects(objects: impl IntoIterator<Item = ObjectId>) -> Self {
        let mut objects: Vec<ObjectId> = objects.into_iter().collect();
        objects.sort_unstable();
        objects.dedup();
        let index = objects.iter().enumerate().map(|(i, &o)| (o, i)).collect();
        Self { objects, index }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in universe order.
    pub fn objects(&self) -> &[ObjectId] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> ObjectId {
        self.objects[index]
    }

    pub fn index_of(&self, object: ObjectId) -> Option<usize> {
        self.index.get(&object).copied()
    }

    pub fn contains(&self, object: ObjectId) -> bool {
        self.index.contains_key(&object)
    }
}
