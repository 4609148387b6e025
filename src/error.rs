// Copyright 2022 - 2024 Wenmeng See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// 有序集合及其存储适配层的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// 成员, 分值或者区间参数不合法
    #[error("validation failed: {0}")]
    Validation(String),

    /// 要求存在的成员不存在
    #[error("not found: {0}")]
    NotFound(String),

    /// 后端存储的错误, 原样透传给调用方
    #[error("operation failed: {0}")]
    Operation(String),
}

impl RankError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RankError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RankError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
