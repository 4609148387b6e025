// Copyright 2022 - 2024 Wenmeng See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod arr;
mod error;
mod leaderboard;
mod map;
mod store;

pub use error::{RankError, Result};
pub use leaderboard::{DeleteRequest, Leaderboard, LeaderboardConfig, Submission};
pub use map::{Entry, Iter, Member, Order, RankedSet, Score};
pub use store::{MemoryStore, SortedSetStore};

#[cfg(feature = "hashbrown")]
extern crate hashbrown;

#[cfg(feature = "hashbrown")]
pub(crate) use hashbrown::HashMap;
#[cfg(not(feature = "hashbrown"))]
pub(crate) use std::collections::HashMap;
