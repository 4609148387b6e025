// Copyright 2022 - 2024 Wenmeng See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use log::{debug, trace};
use parking_lot::RwLock;

use crate::map::check_range;
use crate::{Entry, HashMap, Order, RankError, RankedSet, Result};

use super::SortedSetStore;

/// 进程内的sorted-set存储, 每个操作持有一次锁, 读者看不到写了一半的状态
///
/// # Examples
///
/// ```
/// use rankset::{MemoryStore, Order, SortedSetStore};
/// fn main() {
///     let store = MemoryStore::new();
///     store.add("board", "Alice", 50.0).unwrap();
///     store.add("board", "Bob", 80.0).unwrap();
///     let list = store.range_with_scores("board", 0, -1, Order::Desc).unwrap();
///     assert_eq!(list[0].key, "Bob");
///     assert!(store.delete("board").unwrap());
///     assert_eq!(store.len("board").unwrap(), 0);
/// }
/// ```
pub struct MemoryStore {
    sets: RwLock<HashMap<String, RankedSet<String, f64>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            sets: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn missing(set: &str, member: &str) -> RankError {
    RankError::NotFound(format!("member {:?} in set {:?}", member, set))
}

impl SortedSetStore for MemoryStore {
    fn add(&self, set: &str, member: &str, score: f64) -> Result<Option<f64>> {
        let mut sets = self.sets.write();
        let prev = match sets.get_mut(set) {
            Some(ranked) => ranked.upsert(member.to_string(), score)?,
            None => {
                let mut ranked = RankedSet::new();
                ranked.upsert(member.to_string(), score)?;
                sets.insert(set.to_string(), ranked);
                debug!("sorted set {:?} created", set);
                None
            }
        };
        trace!("add {:?} {} -> {:?} prev {:?}", member, score, set, prev);
        Ok(prev)
    }

    fn remove(&self, set: &str, member: &str) -> Result<Option<f64>> {
        let mut sets = self.sets.write();
        let (removed, empty) = match sets.get_mut(set) {
            Some(ranked) => (ranked.remove(member), ranked.is_empty()),
            None => return Ok(None),
        };
        // 与redis一致, 删除最后一个成员时集合一并删除
        if empty {
            sets.remove(set);
            debug!("sorted set {:?} dropped after last member removed", set);
        }
        Ok(removed)
    }

    fn delete(&self, set: &str) -> Result<bool> {
        let existed = self.sets.write().remove(set).is_some();
        debug!("sorted set {:?} deleted, existed {}", set, existed);
        Ok(existed)
    }

    fn range_with_scores(
        &self,
        set: &str,
        start: isize,
        end: isize,
        order: Order,
    ) -> Result<Vec<Entry<String, f64>>> {
        check_range(start, end)?;
        let sets = self.sets.read();
        match sets.get(set) {
            Some(ranked) => ranked.range_by_rank(start, end, order),
            None => Ok(Vec::new()),
        }
    }

    fn score(&self, set: &str, member: &str) -> Result<f64> {
        let sets = self.sets.read();
        let ranked = sets.get(set).ok_or_else(|| missing(set, member))?;
        ranked.score(member).map_err(|_| missing(set, member))
    }

    fn rank(&self, set: &str, member: &str) -> Result<usize> {
        let sets = self.sets.read();
        let ranked = sets.get(set).ok_or_else(|| missing(set, member))?;
        ranked.rank(member).map_err(|_| missing(set, member))
    }

    fn len(&self, set: &str) -> Result<usize> {
        Ok(self.sets.read().get(set).map_or(0, |ranked| ranked.len()))
    }
}
