// Copyright 2022 - 2024 Wenmeng See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::Arc;

use crate::{Entry, Order, Result};

mod memory;

pub use memory::MemoryStore;

/// 提供sorted-set语义的存储, 集合通过名字区分
///
/// 实现方需要保持与`RankedSet`一致的排序规则: 分值降序, 同分按成员升序;
/// 区间参数与`RankedSet::range_by_rank`一致, 后端错误以`RankError::Operation`返回
pub trait SortedSetStore: Send + Sync {
    /// 添加或者更新成员, 返回原来的分值
    fn add(&self, set: &str, member: &str, score: f64) -> Result<Option<f64>>;
    /// 删除成员, 不存在时返回None
    fn remove(&self, set: &str, member: &str) -> Result<Option<f64>>;
    /// 删除整个集合, 返回集合原先是否存在
    fn delete(&self, set: &str) -> Result<bool>;
    fn range_with_scores(
        &self,
        set: &str,
        start: isize,
        end: isize,
        order: Order,
    ) -> Result<Vec<Entry<String, f64>>>;
    fn score(&self, set: &str, member: &str) -> Result<f64>;
    fn rank(&self, set: &str, member: &str) -> Result<usize>;
    fn len(&self, set: &str) -> Result<usize>;
}

impl<T: SortedSetStore + ?Sized> SortedSetStore for Arc<T> {
    fn add(&self, set: &str, member: &str, score: f64) -> Result<Option<f64>> {
        (**self).add(set, member, score)
    }

    fn remove(&self, set: &str, member: &str) -> Result<Option<f64>> {
        (**self).remove(set, member)
    }

    fn delete(&self, set: &str) -> Result<bool> {
        (**self).delete(set)
    }

    fn range_with_scores(
        &self,
        set: &str,
        start: isize,
        end: isize,
        order: Order,
    ) -> Result<Vec<Entry<String, f64>>> {
        (**self).range_with_scores(set, start, end, order)
    }

    fn score(&self, set: &str, member: &str) -> Result<f64> {
        (**self).score(set, member)
    }

    fn rank(&self, set: &str, member: &str) -> Result<usize> {
        (**self).rank(set, member)
    }

    fn len(&self, set: &str) -> Result<usize> {
        (**self).len(set)
    }
}
