// Copyright 2022 - 2024 Wenmeng See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

mod ranked_set;

pub use ranked_set::{Iter, RankedSet};
pub(crate) use ranked_set::check_range;

/// 可作为排序分值的数值类型
pub trait Score: Copy + PartialOrd + fmt::Debug {
    /// 是否为可接受的分值, 浮点数拒绝NaN与无穷
    fn is_valid(&self) -> bool {
        true
    }

    /// 合法分值之间的全序比较
    fn cmp_score(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

macro_rules! impl_integer_score {
    ($ty:ident) => {
        impl Score for $ty {
            #[inline(always)]
            fn cmp_score(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    };
}

macro_rules! impl_float_score {
    ($ty:ident) => {
        impl Score for $ty {
            #[inline(always)]
            fn is_valid(&self) -> bool {
                self.is_finite()
            }
        }
    };
}

impl_integer_score!(i8);
impl_integer_score!(i16);
impl_integer_score!(i32);
impl_integer_score!(i64);
impl_integer_score!(i128);
impl_integer_score!(isize);
impl_integer_score!(u8);
impl_integer_score!(u16);
impl_integer_score!(u32);
impl_integer_score!(u64);
impl_integer_score!(u128);
impl_integer_score!(usize);
impl_float_score!(f32);
impl_float_score!(f64);

/// 有序集合中的成员, 相同分值时按成员升序排列
pub trait Member: Ord + Hash + fmt::Debug {
    /// 是否为可接受的成员, 字符串拒绝空串
    fn is_valid(&self) -> bool {
        true
    }
}

macro_rules! impl_str_member {
    ($ty:ty) => {
        impl Member for $ty {
            #[inline(always)]
            fn is_valid(&self) -> bool {
                !self.is_empty()
            }
        }
    };
}

macro_rules! impl_primitive_member {
    ($ty:ident) => {
        impl Member for $ty {}
    };
}

impl_str_member!(String);
impl_str_member!(&str);
impl_str_member!(Box<str>);
impl_str_member!(Rc<str>);
impl_str_member!(Arc<str>);
impl_primitive_member!(char);
impl_primitive_member!(i32);
impl_primitive_member!(i64);
impl_primitive_member!(u32);
impl_primitive_member!(u64);
impl_primitive_member!(usize);

/// 排名方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// 分值从高到低, 排行榜默认
    #[default]
    Desc,
    /// 分值从低到高
    Asc,
}

impl Order {
    /// true对应Desc, 与sorted-set的REV参数一致
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Order::Desc
        } else {
            Order::Asc
        }
    }
}

/// 排名区间返回的元素
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<K, S> {
    pub key: K,
    pub score: S,
}

impl<K, S> Entry<K, S> {
    pub fn new(key: K, score: S) -> Self {
        Entry { key, score }
    }
}

impl<K: fmt::Display, S: fmt::Display> fmt::Display for Entry<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.score)
    }
}

struct KeyRef<K> {
    k: *const K,
}

impl<K> KeyRef<K> {
    pub fn new(k: *const K) -> Self {
        Self { k }
    }
}

impl<K: Hash> Hash for KeyRef<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        unsafe {
            (&*self.k).hash(state);
        }
    }
}

impl<K: PartialEq> PartialEq for KeyRef<K> {
    fn eq(&self, other: &Self) -> bool {
        unsafe { (&*self.k).eq(&*other.k) }
    }
}

impl<K: Eq> Eq for KeyRef<K> {}

#[repr(transparent)]
struct KeyWrapper<Q: ?Sized>(Q);

impl<Q: ?Sized> KeyWrapper<Q> {
    pub fn from_ref(key: &Q) -> &Self {
        unsafe { &*(key as *const Q as *const KeyWrapper<Q>) }
    }
}

impl<Q: ?Sized + Hash> Hash for KeyWrapper<Q> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<Q: ?Sized + PartialEq> PartialEq for KeyWrapper<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl<Q: ?Sized + Eq> Eq for KeyWrapper<Q> {}

impl<K, Q> Borrow<KeyWrapper<Q>> for KeyRef<K>
where
    K: Borrow<Q>,
    Q: ?Sized,
{
    fn borrow(&self) -> &KeyWrapper<Q> {
        let key = unsafe { &*self.k }.borrow();
        KeyWrapper::from_ref(key)
    }
}
