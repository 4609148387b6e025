// Copyright 2022 - 2024 Wenmeng See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use log::{debug, info};

use crate::{Entry, Member, Order, RankError, Result, Score, SortedSetStore};

/// 排行榜配置
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardConfig {
    /// 存储中的集合名
    pub set_name: String,
    /// 默认展示的前n名
    pub capacity: usize,
    /// 单次最多展示的数量
    pub max_capacity: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            set_name: "leaderboard".to_string(),
            capacity: 10,
            max_capacity: 50,
        }
    }
}

impl LeaderboardConfig {
    pub fn new(set_name: impl Into<String>) -> Self {
        Self {
            set_name: set_name.into(),
            ..Default::default()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.set_name.is_empty() {
            return Err(RankError::Validation("set name must not be empty".to_string()));
        }
        if self.max_capacity == 0 {
            return Err(RankError::Validation("max capacity must be >= 1".to_string()));
        }
        check_capacity(self.capacity, self.max_capacity)
    }
}

fn check_capacity(capacity: usize, max_capacity: usize) -> Result<()> {
    if capacity == 0 || capacity > max_capacity {
        return Err(RankError::Validation(format!(
            "capacity must be in 1..={}, got {}",
            max_capacity, capacity
        )));
    }
    Ok(())
}

/// 删除请求, 只给出成员时删除该成员, 只要求清空时清空, 其它情况无法判断意图
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRequest {
    Player(String),
    ClearAll,
    Ambiguous,
}

impl DeleteRequest {
    /// 由请求中的name与clearAll字段构造
    ///
    /// # Examples
    ///
    /// ```
    /// use rankset::DeleteRequest;
    /// fn main() {
    ///     assert_eq!(DeleteRequest::from_parts(Some("Bob".to_string()), false), DeleteRequest::Player("Bob".to_string()));
    ///     assert_eq!(DeleteRequest::from_parts(None, true), DeleteRequest::ClearAll);
    ///     assert_eq!(DeleteRequest::from_parts(None, false), DeleteRequest::Ambiguous);
    ///     assert_eq!(DeleteRequest::from_parts(Some("Bob".to_string()), true), DeleteRequest::Ambiguous);
    /// }
    /// ```
    pub fn from_parts(name: Option<String>, clear_all: bool) -> Self {
        match (name, clear_all) {
            (Some(name), false) => DeleteRequest::Player(name),
            (None, true) => DeleteRequest::ClearAll,
            _ => DeleteRequest::Ambiguous,
        }
    }
}

/// 提交成绩后的结果, 包含本次写入的成员与最新的排行
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub added: Entry<String, f64>,
    pub previous: Option<f64>,
    pub leaderboard: Vec<Entry<String, f64>>,
}

/// 排行榜, 将列表, 提交, 删除与清空映射到注入的sorted-set存储上
///
/// 存储句柄在打开时传入, 关闭时交还, 重连等策略由存储自己负责
///
/// # Examples
///
/// ```
/// use rankset::{DeleteRequest, Leaderboard, LeaderboardConfig, MemoryStore};
/// fn main() {
///     let board = Leaderboard::open(MemoryStore::new(), LeaderboardConfig::default()).unwrap();
///     board.submit("Alice", 50.0).unwrap();
///     board.submit("Bob", 80.0).unwrap();
///     let sub = board.submit("Carol", 80.0).unwrap();
///     let names = sub.leaderboard.iter().map(|e| e.key.as_str()).collect::<Vec<_>>();
///     assert_eq!(names, vec!["Bob", "Carol", "Alice"]);
///     board.delete(DeleteRequest::Player("Bob".to_string())).unwrap();
///     assert_eq!(board.list().unwrap().len(), 2);
///     assert!(board.delete(DeleteRequest::Ambiguous).is_err());
///     board.delete(DeleteRequest::ClearAll).unwrap();
///     assert!(board.list().unwrap().is_empty());
/// }
/// ```
pub struct Leaderboard<S: SortedSetStore> {
    store: S,
    config: LeaderboardConfig,
}

impl<S: SortedSetStore> Leaderboard<S> {
    pub fn open(store: S, config: LeaderboardConfig) -> Result<Self> {
        config.validate()?;
        info!(
            "leaderboard {:?} opened, capacity {}",
            config.set_name, config.capacity
        );
        Ok(Self { store, config })
    }

    /// 关闭排行榜并交还存储句柄
    pub fn close(self) -> S {
        info!("leaderboard {:?} closed", self.config.set_name);
        self.store
    }

    pub fn config(&self) -> &LeaderboardConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 完整的排行, 分值从高到低
    pub fn list(&self) -> Result<Vec<Entry<String, f64>>> {
        self.store
            .range_with_scores(&self.config.set_name, 0, -1, Order::Desc)
    }

    /// 前n名, n需要在1..=max_capacity之间
    pub fn list_top(&self, n: usize) -> Result<Vec<Entry<String, f64>>> {
        check_capacity(n, self.config.max_capacity)?;
        self.store
            .range_with_scores(&self.config.set_name, 0, n as isize - 1, Order::Desc)
    }

    /// 按配置的capacity展示前几名
    pub fn top(&self) -> Result<Vec<Entry<String, f64>>> {
        self.list_top(self.config.capacity)
    }

    /// 写入或者更新玩家成绩, 返回最新排行
    pub fn submit(&self, name: &str, score: f64) -> Result<Submission> {
        validate(name, score)?;
        let previous = self.store.add(&self.config.set_name, name, score)?;
        debug!(
            "player {:?} scored {} in {:?}, previous {:?}",
            name, score, self.config.set_name, previous
        );
        Ok(Submission {
            added: Entry::new(name.to_string(), score),
            previous,
            leaderboard: self.list()?,
        })
    }

    /// 批量写入, 所有条目校验通过后才开始写
    ///
    /// 写入过程中存储出错时, 之前写入的条目保留
    pub fn submit_many<N: AsRef<str>>(&self, players: &[(N, f64)]) -> Result<Vec<Entry<String, f64>>> {
        for (name, score) in players {
            validate(name.as_ref(), *score)?;
        }
        for (name, score) in players {
            self.store.add(&self.config.set_name, name.as_ref(), *score)?;
        }
        debug!(
            "{} players submitted to {:?}",
            players.len(),
            self.config.set_name
        );
        self.list()
    }

    /// 删除玩家, 不存在时不报错
    pub fn remove(&self, name: &str) -> Result<Option<f64>> {
        let removed = self.store.remove(&self.config.set_name, name)?;
        debug!("player {:?} removed from {:?}: {:?}", name, self.config.set_name, removed);
        Ok(removed)
    }

    /// 清空排行
    pub fn clear(&self) -> Result<()> {
        self.store.delete(&self.config.set_name)?;
        info!("leaderboard {:?} cleared", self.config.set_name);
        Ok(())
    }

    pub fn delete(&self, request: DeleteRequest) -> Result<()> {
        match request {
            DeleteRequest::Player(name) => self.remove(&name).map(|_| ()),
            DeleteRequest::ClearAll => self.clear(),
            DeleteRequest::Ambiguous => Err(RankError::Validation(
                "delete needs either a player name or clear all, not both or neither".to_string(),
            )),
        }
    }

    /// 玩家0开始的名次
    pub fn rank(&self, name: &str) -> Result<usize> {
        self.store.rank(&self.config.set_name, name)
    }

    pub fn score(&self, name: &str) -> Result<f64> {
        self.store.score(&self.config.set_name, name)
    }

    pub fn len(&self) -> Result<usize> {
        self.store.len(&self.config.set_name)
    }
}

fn validate(name: &str, score: f64) -> Result<()> {
    if !name.is_valid() {
        return Err(RankError::Validation("player name is required".to_string()));
    }
    if !score.is_valid() {
        return Err(RankError::Validation(format!(
            "score for {:?} must be finite, got {}",
            name, score
        )));
    }
    Ok(())
}
