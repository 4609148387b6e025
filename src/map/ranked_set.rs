// Copyright 2022 - 2024 Wenmeng See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Ordering;
use std::{borrow::Borrow, fmt, hash::Hash, ptr::NonNull};

use crate::arr::{SkipIter, SkipList, SkipNode};
use crate::{HashMap, RankError, Result};

use super::{Entry, KeyRef, KeyWrapper, Member, Order, Score};

struct Context<K, S> {
    key: K,
    score: S,
}

impl<K: Member, S: Score> Context<K, S> {
    fn to_entry(&self) -> Entry<K, S>
    where
        K: Clone,
    {
        Entry::new(self.key.clone(), self.score)
    }
}

impl<K: Member, S: Score> PartialEq for Context<K, S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Member, S: Score> Eq for Context<K, S> {}

impl<K: Member, S: Score> PartialOrd for Context<K, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 分值高的在前, 分值相同按成员升序
impl<K: Member, S: Score> Ord for Context<K, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.score.cmp_score(&self.score) {
            Ordering::Equal => self.key.cmp(&other.key),
            ord => ord,
        }
    }
}

/// 校验排名区间, start不能为负, end为-1表示到最后一个元素
pub(crate) fn check_range(start: isize, end: isize) -> Result<()> {
    if start < 0 {
        return Err(RankError::Validation(format!(
            "range start must be >= 0, got {}",
            start
        )));
    }
    if end < -1 {
        return Err(RankError::Validation(format!(
            "range end must be >= -1, got {}",
            end
        )));
    }
    Ok(())
}

/// 一种按分值排名的有序集合(order-statistics map)
///
/// 成员唯一, 默认按分值从高到低排列, 分值相同时按成员升序, 保证排名稳定
///
/// 字典记录成员所在的跳表节点, 跳表负责排序与排名, 插入, 更新, 删除与排名查询均为O(log n)
///
/// # Examples
///
/// ```
/// use rankset::{Order, RankedSet};
/// fn main() {
///     let mut val = RankedSet::new();
///     val.upsert("Alice", 50).unwrap();
///     val.upsert("Bob", 80).unwrap();
///     val.upsert("Carol", 80).unwrap();
///     assert_eq!(val.len(), 3);
///     assert_eq!(val.rank(&"Bob").unwrap(), 0);
///     assert_eq!(val.rank(&"Alice").unwrap(), 2);
///     val.upsert("Alice", 90).unwrap();
///     assert_eq!(val.rank(&"Alice").unwrap(), 0);
///     let top = val.range_by_rank(0, 1, Order::Desc).unwrap();
///     assert_eq!(top[1].key, "Bob");
/// }
/// ```
pub struct RankedSet<K: Member, S: Score> {
    dict: HashMap<KeyRef<K>, NonNull<SkipNode<Context<K, S>>>>,
    zsl: SkipList<Context<K, S>>,
}

impl<K: Member, S: Score> RankedSet<K, S> {
    pub fn new() -> Self {
        Self {
            dict: HashMap::new(),
            zsl: SkipList::new(),
        }
    }

    /// 预留字典容量
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dict: HashMap::with_capacity(capacity),
            zsl: SkipList::new(),
        }
    }

    pub fn len(&self) -> usize {
        debug_assert!(self.dict.len() == self.zsl.len());
        self.dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zsl.is_empty()
    }

    /// 清除集合
    ///
    /// # Examples
    ///
    /// ```
    /// use rankset::RankedSet;
    /// fn main() {
    ///     let mut val = RankedSet::new();
    ///     val.upsert("aa", 10).unwrap();
    ///     val.upsert("bb", 12).unwrap();
    ///     assert_eq!(val.len(), 2);
    ///     val.clear();
    ///     assert_eq!(val.len(), 0);
    /// }
    /// ```
    pub fn clear(&mut self) {
        self.dict.clear();
        self.zsl.clear();
    }

    /// 包含键值
    ///
    /// # Examples
    ///
    /// ```
    /// use rankset::RankedSet;
    /// fn main() {
    ///     let mut val = RankedSet::new();
    ///     val.upsert("aa", 10).unwrap();
    ///     assert_eq!(val.contains_key(&"aa"), true);
    ///     assert_eq!(val.contains_key(&"bb"), false);
    /// }
    /// ```
    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.dict.contains_key(KeyWrapper::from_ref(k))
    }

    /// 添加或者更新值, 返回原来的分值
    ///
    /// 成员不合法或者分值为NaN/无穷时返回Validation错误, 集合不会被修改
    ///
    /// # Examples
    ///
    /// ```
    /// use rankset::{RankError, RankedSet};
    /// fn main() {
    ///     let mut val = RankedSet::new();
    ///     assert_eq!(val.upsert("aa".to_string(), 10.0).unwrap(), None);
    ///     assert_eq!(val.upsert("aa".to_string(), 14.5).unwrap(), Some(10.0));
    ///     assert_eq!(val.score("aa").unwrap(), 14.5);
    ///     assert!(matches!(val.upsert("bb".to_string(), f64::NAN), Err(RankError::Validation(_))));
    ///     assert!(matches!(val.upsert(String::new(), 1.0), Err(RankError::Validation(_))));
    ///     assert_eq!(val.len(), 1);
    /// }
    /// ```
    pub fn upsert(&mut self, key: K, score: S) -> Result<Option<S>> {
        if !key.is_valid() {
            return Err(RankError::Validation(format!("invalid member {:?}", key)));
        }
        if !score.is_valid() {
            return Err(RankError::Validation(format!(
                "score for {:?} must be finite, got {:?}",
                key, score
            )));
        }

        if let Some(&node) = self.dict.get(KeyWrapper::from_ref(&key)) {
            // 节点由dict持有, 在remove之前一直有效
            let old = unsafe {
                let old = node.as_ref().value().score;
                self.zsl.update_with(node, |ctx| ctx.score = score);
                old
            };
            return Ok(Some(old));
        }

        let node = self.zsl.insert(Context { key, score });
        let key_ref = KeyRef::new(unsafe { &node.as_ref().value().key });
        self.dict.insert(key_ref, node);
        Ok(None)
    }

    /// 删除元素, 不存在时不做任何处理, 返回被删除的分值
    ///
    /// # Examples
    ///
    /// ```
    /// use rankset::RankedSet;
    /// fn main() {
    ///     let mut val = RankedSet::new();
    ///     val.upsert("aa", 10).unwrap();
    ///     val.upsert("bb", 12).unwrap();
    ///     assert_eq!(val.remove(&"bb"), Some(12));
    ///     assert_eq!(val.remove(&"bb"), None);
    ///     assert_eq!(val.len(), 1);
    /// }
    /// ```
    pub fn remove<Q>(&mut self, k: &Q) -> Option<S>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let node = self.dict.remove(KeyWrapper::from_ref(k))?;
        Some(unsafe { self.zsl.remove_node(node) }.score)
    }

    fn node<Q>(&self, k: &Q) -> Result<&Context<K, S>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        match self.dict.get(KeyWrapper::from_ref(k)) {
            Some(node) => Ok(unsafe { node.as_ref().value() }),
            None => Err(RankError::NotFound(format!("member {:?}", k))),
        }
    }

    /// 获取score值, 不存在返回NotFound
    ///
    /// # Examples
    ///
    /// ```
    /// use rankset::RankedSet;
    /// fn main() {
    ///     let mut val = RankedSet::new();
    ///     val.upsert("aa", 10).unwrap();
    ///     val.upsert("bb", 12).unwrap();
    ///     assert_eq!(val.score(&"bb").unwrap(), 12);
    ///     assert!(val.score(&"cc").is_err());
    /// }
    /// ```
    pub fn score<Q>(&self, k: &Q) -> Result<S>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        Ok(self.node(k)?.score)
    }

    /// 获取0开始的排名, 分值从高到低
    ///
    /// # Examples
    ///
    /// ```
    /// use rankset::RankedSet;
    /// fn main() {
    ///     let mut val = RankedSet::new();
    ///     val.upsert("aa", 10).unwrap();
    ///     val.upsert("bb", 12).unwrap();
    ///     assert_eq!(val.rank(&"bb").unwrap(), 0);
    ///     val.upsert("bb", 9).unwrap();
    ///     assert_eq!(val.rank(&"bb").unwrap(), 1);
    /// }
    /// ```
    pub fn rank<Q>(&self, k: &Q) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.rank_by(k, Order::Desc)
    }

    /// 按指定方向获取0开始的排名, 两个方向同分时都按成员升序
    ///
    /// # Examples
    ///
    /// ```
    /// use rankset::{Order, RankedSet};
    /// fn main() {
    ///     let mut val = RankedSet::new();
    ///     val.upsert("Alice", 50).unwrap();
    ///     val.upsert("Bob", 80).unwrap();
    ///     val.upsert("Carol", 80).unwrap();
    ///     assert_eq!(val.rank_by(&"Alice", Order::Asc).unwrap(), 0);
    ///     assert_eq!(val.rank_by(&"Bob", Order::Asc).unwrap(), 1);
    ///     assert_eq!(val.rank_by(&"Carol", Order::Asc).unwrap(), 2);
    /// }
    /// ```
    pub fn rank_by<Q>(&self, k: &Q, order: Order) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let ctx = self.node(k)?;
        let desc = self
            .zsl
            .get_rank(ctx)
            .ok_or_else(|| RankError::NotFound(format!("member {:?}", k)))?;
        match order {
            Order::Desc => Ok(desc),
            Order::Asc => {
                let (lo, hi) = self.score_group(&ctx.score);
                Ok(self.len() - hi + (desc - lo))
            }
        }
    }

    /// 与score同分的元素在降序中的区间[lo, hi)
    fn score_group(&self, score: &S) -> (usize, usize) {
        let lo = self
            .zsl
            .count_while(|ctx| ctx.score.cmp_score(score) == Ordering::Greater);
        let hi = self
            .zsl
            .count_while(|ctx| ctx.score.cmp_score(score) != Ordering::Less);
        (lo, hi)
    }

    /// 升序排名pos对应的降序下标, 以及该同分组在降序中剩余的个数
    fn asc_to_desc(&self, pos: usize) -> Option<(usize, usize)> {
        let n = self.len();
        if pos >= n {
            return None;
        }
        let score = self.zsl.get_by_rank(n - 1 - pos)?.score;
        let (lo, hi) = self.score_group(&score);
        let offset = pos - (n - hi);
        Some((lo + offset, hi - lo - offset))
    }

    /// 根据排名获取元素
    ///
    /// # Examples
    ///
    /// ```
    /// use rankset::{Order, RankedSet};
    /// fn main() {
    ///     let mut val = RankedSet::new();
    ///     val.upsert("aa", 10).unwrap();
    ///     val.upsert("bb", 12).unwrap();
    ///     assert_eq!(val.get_by_rank(0, Order::Desc), Some((&"bb", 12)));
    ///     assert_eq!(val.get_by_rank(0, Order::Asc), Some((&"aa", 10)));
    ///     assert_eq!(val.get_by_rank(2, Order::Asc), None);
    /// }
    /// ```
    pub fn get_by_rank(&self, rank: usize, order: Order) -> Option<(&K, S)> {
        let desc = match order {
            Order::Desc => rank,
            Order::Asc => self.asc_to_desc(rank)?.0,
        };
        self.zsl.get_by_rank(desc).map(|ctx| (&ctx.key, ctx.score))
    }

    /// 按排名区间获取元素, 区间两端均包含
    ///
    /// start为负时返回Validation错误, end为-1表示到最后一个元素, 超出长度的end会被截断,
    /// start超出长度或者end小于start时返回空
    ///
    /// # Examples
    ///
    /// ```
    /// use rankset::{Entry, Order, RankedSet};
    /// fn main() {
    ///     let mut val = RankedSet::new();
    ///     val.upsert("Alice", 50).unwrap();
    ///     val.upsert("Bob", 80).unwrap();
    ///     val.upsert("Carol", 80).unwrap();
    ///     assert_eq!(
    ///         val.range_by_rank(0, -1, Order::Desc).unwrap(),
    ///         vec![Entry::new("Bob", 80), Entry::new("Carol", 80), Entry::new("Alice", 50)]
    ///     );
    ///     assert_eq!(
    ///         val.range_by_rank(0, -1, Order::Asc).unwrap(),
    ///         vec![Entry::new("Alice", 50), Entry::new("Bob", 80), Entry::new("Carol", 80)]
    ///     );
    ///     assert!(val.range_by_rank(5, -1, Order::Desc).unwrap().is_empty());
    ///     assert!(val.range_by_rank(-1, 2, Order::Desc).is_err());
    /// }
    /// ```
    pub fn range_by_rank(&self, start: isize, end: isize, order: Order) -> Result<Vec<Entry<K, S>>>
    where
        K: Clone,
    {
        check_range(start, end)?;
        let n = self.len();
        let start = start as usize;
        if start >= n {
            return Ok(Vec::new());
        }
        let end = if end == -1 {
            n - 1
        } else {
            (end as usize).min(n - 1)
        };
        if end < start {
            return Ok(Vec::new());
        }

        let count = end - start + 1;
        match order {
            Order::Desc => Ok(self.zsl.range(start, count).map(Context::to_entry).collect()),
            Order::Asc => {
                let mut result = Vec::with_capacity(count);
                let mut pos = start;
                while pos <= end {
                    let (desc, remain) = match self.asc_to_desc(pos) {
                        Some(v) => v,
                        None => break,
                    };
                    let take = remain.min(end - pos + 1);
                    result.extend(self.zsl.range(desc, take).map(Context::to_entry));
                    pos += take;
                }
                Ok(result)
            }
        }
    }

    /// 排名最高的n个元素
    pub fn top(&self, n: usize) -> Vec<Entry<K, S>>
    where
        K: Clone,
    {
        self.zsl.range(0, n).map(Context::to_entry).collect()
    }

    /// 按分值从高到低遍历
    ///
    /// # Examples
    ///
    /// ```
    /// use rankset::RankedSet;
    /// fn main() {
    ///     let mut val = RankedSet::new();
    ///     val.upsert("aa", 10).unwrap();
    ///     val.upsert("bb", 12).unwrap();
    ///     let mut iter = val.iter();
    ///     assert_eq!(iter.next(), Some((&"bb", &12)));
    ///     assert_eq!(iter.next(), Some((&"aa", &10)));
    ///     assert_eq!(iter.next(), None);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, S> {
        Iter {
            iter: self.zsl.iter(),
        }
    }
}

impl<K: Member, S: Score> Default for RankedSet<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Member + Clone, S: Score> Clone for RankedSet<K, S> {
    fn clone(&self) -> Self {
        let mut set = RankedSet::with_capacity(self.len());
        for (key, score) in self.iter() {
            let node = set.zsl.insert(Context {
                key: key.clone(),
                score: *score,
            });
            let key_ref = KeyRef::new(unsafe { &node.as_ref().value().key });
            set.dict.insert(key_ref, node);
        }
        set
    }
}

impl<K: Member, S: Score> fmt::Debug for RankedSet<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Member, S: Score> Drop for RankedSet<K, S> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<K: Member + Send, S: Score + Send> Send for RankedSet<K, S> {}
unsafe impl<K: Member + Sync, S: Score + Sync> Sync for RankedSet<K, S> {}

pub struct Iter<'a, K: 'a, S: 'a> {
    iter: SkipIter<'a, Context<K, S>>,
}

impl<'a, K, S> Iterator for Iter<'a, K, S> {
    type Item = (&'a K, &'a S);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|ctx| (&ctx.key, &ctx.score))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, S> DoubleEndedIterator for Iter<'a, K, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|ctx| (&ctx.key, &ctx.score))
    }
}

impl<'a, K, S> ExactSizeIterator for Iter<'a, K, S> {}

#[cfg(test)]
mod tests {
    use super::RankedSet;
    use crate::{Entry, Order, RankError};

    fn sample() -> RankedSet<String, f64> {
        let mut set = RankedSet::new();
        set.upsert("Alice".to_string(), 50.0).unwrap();
        set.upsert("Bob".to_string(), 80.0).unwrap();
        set.upsert("Carol".to_string(), 80.0).unwrap();
        set
    }

    fn keys(entries: &[Entry<String, f64>]) -> Vec<&str> {
        entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_tie_break() {
        let set = sample();
        let all = set.range_by_rank(0, -1, Order::Desc).unwrap();
        assert_eq!(keys(&all), vec!["Bob", "Carol", "Alice"]);
        assert_eq!(set.rank("Carol").unwrap(), 1);
    }

    #[test]
    fn test_remove_then_range() {
        let mut set = sample();
        assert_eq!(set.remove("Bob"), Some(80.0));
        let all = set.range_by_rank(0, -1, Order::Desc).unwrap();
        assert_eq!(keys(&all), vec!["Carol", "Alice"]);
        assert!(matches!(set.score("Bob"), Err(RankError::NotFound(_))));
        assert!(matches!(set.rank("Bob"), Err(RankError::NotFound(_))));
        assert_eq!(set.remove("Bob"), None);
    }

    #[test]
    fn test_update_repositions() {
        let mut set = sample();
        set.upsert("Alice".to_string(), 100.0).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.rank("Alice").unwrap(), 0);
        set.upsert("Alice".to_string(), 80.0).unwrap();
        let all = set.range_by_rank(0, -1, Order::Desc).unwrap();
        assert_eq!(keys(&all), vec!["Alice", "Bob", "Carol"]);
        set.upsert("Bob".to_string(), -3.5).unwrap();
        let all = set.range_by_rank(0, -1, Order::Desc).unwrap();
        assert_eq!(keys(&all), vec!["Alice", "Carol", "Bob"]);
    }

    #[test]
    fn test_idempotent_upsert() {
        let mut set = sample();
        assert_eq!(set.upsert("Carol".to_string(), 80.0).unwrap(), Some(80.0));
        assert_eq!(set.upsert("Carol".to_string(), 80.0).unwrap(), Some(80.0));
        assert_eq!(set.rank("Carol").unwrap(), 1);
        assert_eq!(set.score("Carol").unwrap(), 80.0);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_invalid_score_leaves_set_untouched() {
        let mut set = sample();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                set.upsert("Alice".to_string(), bad),
                Err(RankError::Validation(_))
            ));
        }
        assert_eq!(set.score("Alice").unwrap(), 50.0);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_range_bounds() {
        let set = sample();
        assert!(set.range_by_rank(5, -1, Order::Desc).unwrap().is_empty());
        assert!(set.range_by_rank(3, 10, Order::Asc).unwrap().is_empty());
        assert!(set.range_by_rank(2, 1, Order::Desc).unwrap().is_empty());
        assert_eq!(keys(&set.range_by_rank(1, 100, Order::Desc).unwrap()), vec!["Carol", "Alice"]);
        assert_eq!(keys(&set.range_by_rank(1, 1, Order::Desc).unwrap()), vec!["Carol"]);
        assert!(matches!(
            set.range_by_rank(-1, -1, Order::Desc),
            Err(RankError::Validation(_))
        ));
        assert!(matches!(
            set.range_by_rank(0, -2, Order::Desc),
            Err(RankError::Validation(_))
        ));
    }

    #[test]
    fn test_ascending_keeps_key_order() {
        let mut set = RankedSet::new();
        for (k, s) in [("e", 1), ("d", 2), ("c", 2), ("b", 2), ("a", 3)] {
            set.upsert(k, s).unwrap();
        }
        let asc = set.range_by_rank(0, -1, Order::Asc).unwrap();
        let asc = asc.iter().map(|e| e.key).collect::<Vec<_>>();
        assert_eq!(asc, vec!["e", "b", "c", "d", "a"]);

        let mid = set.range_by_rank(2, 3, Order::Asc).unwrap();
        let mid = mid.iter().map(|e| e.key).collect::<Vec<_>>();
        assert_eq!(mid, vec!["c", "d"]);

        for (i, k) in ["e", "b", "c", "d", "a"].iter().enumerate() {
            assert_eq!(set.rank_by(k, Order::Asc).unwrap(), i);
            assert_eq!(set.get_by_rank(i, Order::Asc).map(|(k, _)| *k), Some(*k));
        }
        let desc = set.range_by_rank(0, -1, Order::Desc).unwrap();
        let desc = desc.iter().map(|e| e.key).collect::<Vec<_>>();
        assert_eq!(desc, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_clear() {
        let mut set = sample();
        set.clear();
        assert!(set.is_empty());
        assert!(set.range_by_rank(0, -1, Order::Desc).unwrap().is_empty());
        set.upsert("Dave".to_string(), 1.0).unwrap();
        assert_eq!(set.rank("Dave").unwrap(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut set = sample();
        let copy = set.clone();
        set.clear();
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.rank("Bob").unwrap(), 0);
        assert_eq!(keys(&copy.top(2)), vec!["Bob", "Carol"]);
    }

    #[test]
    fn test_reinsert_after_remove() {
        let mut set = sample();
        for round in 0..50 {
            assert_eq!(set.remove("Bob"), Some(80.0));
            assert_eq!(set.upsert("Bob".to_string(), 80.0).unwrap(), None);
            // 重新插入的节点必须能继续更新和删除
            assert_eq!(set.upsert("Bob".to_string(), round as f64).unwrap(), Some(80.0));
            assert_eq!(set.score("Bob").unwrap(), round as f64);
            assert_eq!(set.upsert("Bob".to_string(), 80.0).unwrap(), Some(round as f64));
        }
        assert_eq!(set.len(), 3);
        assert_eq!(keys(&set.top(3)), vec!["Bob", "Carol", "Alice"]);
        assert_eq!(set.remove("Carol"), Some(80.0));
        assert_eq!(set.remove("Carol"), None);
        assert_eq!(set.upsert("Carol".to_string(), 1.0).unwrap(), None);
        assert_eq!(keys(&set.top(3)), vec!["Bob", "Alice", "Carol"]);
    }

    #[test]
    fn test_order_from_reverse() {
        let set = sample();
        let desc = set.range_by_rank(0, -1, Order::from_reverse(true)).unwrap();
        assert_eq!(keys(&desc), vec!["Bob", "Carol", "Alice"]);
        let asc = set.range_by_rank(0, -1, Order::from_reverse(false)).unwrap();
        assert_eq!(keys(&asc), vec!["Alice", "Bob", "Carol"]);
        assert_eq!(Order::from_reverse(true), Order::default());
    }

    #[test]
    fn test_iter_rev() {
        let set = sample();
        let rev = set.iter().rev().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
        assert_eq!(rev, vec!["Alice", "Carol", "Bob"]);
        assert_eq!(set.iter().len(), 3);
    }
}
