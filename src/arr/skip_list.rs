// Copyright 2022 - 2024 Wenmeng See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fmt, marker::PhantomData, mem, ptr, ptr::NonNull};

struct LevelType<T> {
    pub forward: *mut SkipNode<T>,
    pub span: usize,
}

impl<T> Clone for LevelType<T> {
    fn clone(&self) -> Self {
        Self {
            forward: self.forward,
            span: self.span,
        }
    }
}

impl<T> LevelType<T> {
    pub fn new() -> Self {
        LevelType {
            forward: ptr::null_mut(),
            span: 0,
        }
    }
}

/// 跳表节点, 头节点的值未初始化
pub struct SkipNode<T> {
    value: mem::MaybeUninit<T>,
    backward: *mut SkipNode<T>,
    levels: Vec<LevelType<T>>,
}

impl<T> SkipNode<T> {
    /// 节点存储的值
    pub fn value(&self) -> &T {
        unsafe { &*self.value.as_ptr() }
    }
}

/// 节点第i层, node必须是有效节点且i小于其层数
#[inline(always)]
unsafe fn level<'a, T>(node: *mut SkipNode<T>, i: usize) -> &'a mut LevelType<T> {
    &mut (&mut (*node).levels)[i]
}

/// 数据节点的值, 不能用于头节点
#[inline(always)]
unsafe fn value_of<'a, T>(node: *mut SkipNode<T>) -> &'a T {
    (&*node).value()
}

/// 带跨度(span)的跳表, 可以在O(log n)内完成插入, 删除, 排名和按排名查找
///
/// 每一层的前向指针都记录跨越的节点数, 按层累加即可得到排名
pub struct SkipList<T: Ord> {
    length: usize,
    level: usize,

    header: *mut SkipNode<T>,
    tail: *mut SkipNode<T>,
}

const MAX_LEVEL: usize = 32;
const PERCENT: u16 = 25;

impl<T: Ord> SkipList<T> {
    pub fn new() -> Self {
        SkipList {
            length: 0,
            level: 1,
            header: Self::make_node(MAX_LEVEL, mem::MaybeUninit::uninit()),
            tail: ptr::null_mut(),
        }
    }

    /// 释放所有数据节点, 头节点保留
    fn free_all(&mut self) {
        unsafe {
            let mut x = level(self.header, 0).forward;
            while !x.is_null() {
                let next = level(x, 0).forward;
                Self::free_node(x);
                x = next;
            }
        }
    }

    /// 清除所有数据
    pub fn clear(&mut self) {
        self.free_all();
        unsafe {
            let header = &mut *self.header;
            for level in header.levels.iter_mut() {
                level.forward = ptr::null_mut();
                level.span = 0;
            }
            header.backward = ptr::null_mut();
        }
        self.tail = ptr::null_mut();
        self.level = 1;
        self.length = 0;
    }

    fn make_node(level: usize, value: mem::MaybeUninit<T>) -> *mut SkipNode<T> {
        assert!(level > 0);

        let levels = vec![LevelType::new(); level];
        let node = SkipNode {
            value,
            backward: ptr::null_mut(),
            levels,
        };
        Box::into_raw(Box::new(node))
    }

    fn free_node(node: *mut SkipNode<T>) {
        unsafe {
            let mut node = Box::from_raw(node);
            node.value.assume_init_drop();
        }
    }

    fn rand_level() -> usize {
        let mut level = 1;
        while level < MAX_LEVEL && rand::random::<u16>() % 100 < PERCENT {
            level += 1;
        }
        level
    }

    /// 插入值, 返回新节点, 节点地址在删除前保持不变
    pub fn insert(&mut self, value: T) -> NonNull<SkipNode<T>> {
        let x = Self::make_node(Self::rand_level(), mem::MaybeUninit::new(value));
        self.link(x);
        unsafe { NonNull::new_unchecked(x) }
    }

    /// 将已分配的节点按值挂到合适的位置
    fn link(&mut self, x: *mut SkipNode<T>) {
        let mut update: [*mut SkipNode<T>; MAX_LEVEL] = [ptr::null_mut(); MAX_LEVEL];
        let mut rank = [0; MAX_LEVEL];
        unsafe {
            let node_level = (&(*x).levels).len();
            let mut cur = self.header;
            for i in (0..self.level).rev() {
                rank[i] = if i == self.level - 1 { 0 } else { rank[i + 1] };
                loop {
                    let next = level(cur, i).forward;
                    if next.is_null() || value_of(next) >= value_of(x) {
                        break;
                    }
                    rank[i] += level(cur, i).span;
                    cur = next;
                }
                update[i] = cur;
            }

            if node_level > self.level {
                for i in self.level..node_level {
                    rank[i] = 0;
                    update[i] = self.header;
                    level(self.header, i).span = self.length;
                }
                self.level = node_level;
            }

            for i in 0..node_level {
                let prev = level(update[i], i);
                let cur = level(x, i);
                cur.forward = prev.forward;
                prev.forward = x;

                cur.span = prev.span - (rank[0] - rank[i]);
                prev.span = (rank[0] - rank[i]) + 1;
            }

            for i in node_level..self.level {
                level(update[i], i).span += 1;
            }

            (*x).backward = if update[0] == self.header {
                ptr::null_mut()
            } else {
                update[0]
            };
            let next = level(x, 0).forward;
            if !next.is_null() {
                (*next).backward = x;
            } else {
                self.tail = x;
            }
        }
        self.length += 1;
    }

    /// 每一层中最后一个小于value的节点
    fn find_update(&self, value: &T) -> [*mut SkipNode<T>; MAX_LEVEL] {
        let mut update: [*mut SkipNode<T>; MAX_LEVEL] = [ptr::null_mut(); MAX_LEVEL];
        let mut x = self.header;
        unsafe {
            for i in (0..self.level).rev() {
                loop {
                    let next = level(x, i).forward;
                    if next.is_null() || value_of(next) >= value {
                        break;
                    }
                    x = next;
                }
                update[i] = x;
            }
        }
        update
    }

    fn unlink(&mut self, x: *mut SkipNode<T>, update: &[*mut SkipNode<T>; MAX_LEVEL]) {
        unsafe {
            for i in 0..self.level {
                let prev = level(update[i], i);
                if prev.forward == x {
                    let cur = level(x, i);
                    prev.span += cur.span;
                    prev.span -= 1;
                    prev.forward = cur.forward;
                } else {
                    prev.span -= 1;
                }
            }

            let next = level(x, 0).forward;
            if !next.is_null() {
                (*next).backward = (*x).backward;
            } else {
                self.tail = (*x).backward;
            }

            while self.level > 1 && level(self.header, self.level - 1).forward.is_null() {
                self.level -= 1;
            }
            let node = &mut *x;
            for level in node.levels.iter_mut() {
                level.forward = ptr::null_mut();
                level.span = 0;
            }
            node.backward = ptr::null_mut();
        }
        self.length -= 1;
    }

    /// 删除指定节点并返回其值
    ///
    /// # Safety
    ///
    /// node必须是当前跳表`insert`返回且尚未删除的节点
    pub unsafe fn remove_node(&mut self, node: NonNull<SkipNode<T>>) -> T {
        let x = node.as_ptr();
        let update = self.find_update(value_of(x));
        debug_assert!(level(update[0], 0).forward == x);
        self.unlink(x, &update);
        let node = Box::from_raw(x);
        node.value.assume_init_read()
    }

    /// 原地修改节点的值, 若顺序被破坏则重新挂载该节点, 节点地址不变
    ///
    /// # Safety
    ///
    /// node必须是当前跳表`insert`返回且尚未删除的节点
    pub unsafe fn update_with<F>(&mut self, node: NonNull<SkipNode<T>>, f: F)
    where
        F: FnOnce(&mut T),
    {
        let x = node.as_ptr();
        let update = self.find_update(value_of(x));
        f((&mut (*x).value).assume_init_mut());

        let prev = (*x).backward;
        let next = level(x, 0).forward;
        if (prev.is_null() || value_of(prev) < value_of(x))
            && (next.is_null() || value_of(x) < value_of(next))
        {
            return;
        }

        self.unlink(x, &update);
        self.link(x);
    }

    /// 获取0开始的排名
    pub fn get_rank(&self, value: &T) -> Option<usize> {
        let mut x = self.header;
        let mut rank = 0;
        unsafe {
            for i in (0..self.level).rev() {
                loop {
                    let next = level(x, i).forward;
                    if next.is_null() || value_of(next) > value {
                        break;
                    }
                    rank += level(x, i).span;
                    x = next;
                }

                if x != self.header && value_of(x) == value {
                    return Some(rank - 1);
                }
            }
        }
        None
    }

    fn find_by_rank(&self, rank: usize) -> *mut SkipNode<T> {
        if rank >= self.length {
            return ptr::null_mut();
        }
        let target = rank + 1;
        let mut x = self.header;
        let mut traversed = 0;
        unsafe {
            for i in (0..self.level).rev() {
                while !level(x, i).forward.is_null() && traversed + level(x, i).span <= target {
                    traversed += level(x, i).span;
                    x = level(x, i).forward;
                }
                if traversed == target {
                    return x;
                }
            }
        }
        ptr::null_mut()
    }

    /// 根据0开始的排名获取值
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        let x = self.find_by_rank(rank);
        if x.is_null() {
            None
        } else {
            unsafe { Some(value_of(x)) }
        }
    }

    /// 从头部开始连续满足pred的元素个数, pred在有序序列上必须是单调的
    pub fn count_while<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut x = self.header;
        let mut rank = 0;
        unsafe {
            for i in (0..self.level).rev() {
                loop {
                    let next = level(x, i).forward;
                    if next.is_null() || !pred(value_of(next)) {
                        break;
                    }
                    rank += level(x, i).span;
                    x = next;
                }
            }
        }
        rank
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// 按顺序遍历
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            len: self.length,
            head: unsafe { level(self.header, 0).forward },
            tail: self.tail,
            data: PhantomData,
        }
    }

    /// 从排名start开始最多遍历count个元素
    pub fn range(&self, start: usize, count: usize) -> Iter<'_, T> {
        let len = count.min(self.length.saturating_sub(start));
        if len == 0 {
            return Iter {
                len: 0,
                head: ptr::null_mut(),
                tail: ptr::null_mut(),
                data: PhantomData,
            };
        }
        Iter {
            len,
            head: self.find_by_rank(start),
            tail: self.find_by_rank(start + len - 1),
            data: PhantomData,
        }
    }
}

impl<T: Ord> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Drop for SkipList<T> {
    fn drop(&mut self) {
        self.free_all();
        let _header = unsafe { Box::from_raw(self.header) };
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for SkipList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl<T: Ord + Send> Send for SkipList<T> {}
unsafe impl<T: Ord + Sync> Sync for SkipList<T> {}

pub struct Iter<'a, T: 'a> {
    len: usize,
    head: *mut SkipNode<T>,
    tail: *mut SkipNode<T>,
    data: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        unsafe {
            let node = self.head;
            self.head = level(node, 0).forward;
            self.len -= 1;
            Some(value_of(node))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        unsafe {
            let node = self.tail;
            self.tail = (*node).backward;
            self.len -= 1;
            Some(value_of(node))
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            len: self.len,
            head: self.head,
            tail: self.tail,
            data: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SkipList;

    fn is_sorted<T: Ord>(list: &SkipList<T>) -> bool {
        let values = list.iter().collect::<Vec<_>>();
        values.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_basic() {
        let mut list = SkipList::new();
        list.insert(4);
        let two = list.insert(2);
        list.insert(1);
        assert_eq!(list.get_rank(&2), Some(1));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2, &4]);
        assert_eq!(unsafe { list.remove_node(two) }, 2);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get_rank(&2), None);
    }

    #[test]
    fn test_insert_rank() {
        let mut list = SkipList::new();
        for v in [50, 10, 40, 20, 30] {
            list.insert(v);
        }
        assert_eq!(list.len(), 5);
        assert!(is_sorted(&list));
        for (i, v) in [10, 20, 30, 40, 50].iter().enumerate() {
            assert_eq!(list.get_rank(v), Some(i));
            assert_eq!(list.get_by_rank(i), Some(v));
        }
        assert_eq!(list.get_rank(&35), None);
        assert_eq!(list.get_by_rank(5), None);
    }

    #[test]
    fn test_remove_node() {
        let mut list = SkipList::new();
        let nodes = (0..100).map(|v| list.insert(v)).collect::<Vec<_>>();
        for v in (0..100).step_by(2) {
            assert_eq!(unsafe { list.remove_node(nodes[v]) }, v);
        }
        assert_eq!(list.len(), 50);
        assert!(is_sorted(&list));
        for (i, v) in (1..100).step_by(2).enumerate() {
            assert_eq!(list.get_rank(&v), Some(i));
        }
        assert_eq!(list.iter().rev().next(), Some(&99));
    }

    #[test]
    fn test_update_with() {
        let mut list = SkipList::new();
        let mut nodes = vec![];
        for v in 0..20 {
            nodes.push(list.insert(v * 10));
        }
        unsafe {
            // 原位修改, 位置不变
            list.update_with(nodes[5], |v| *v = 51);
            assert_eq!(list.get_rank(&51), Some(5));
            // 移动到末尾
            list.update_with(nodes[0], |v| *v = 1000);
            assert_eq!(list.get_rank(&1000), Some(19));
            assert_eq!(list.get_by_rank(0), Some(&10));
            // 移动到开头
            list.update_with(nodes[19], |v| *v = -1);
            assert_eq!(list.get_rank(&-1), Some(0));
            assert_eq!(list.len(), 20);
            assert!(is_sorted(&list));
            assert_eq!(list.remove_node(nodes[0]), 1000);
        }
        assert_eq!(list.iter().rev().next(), Some(&180));
    }

    #[test]
    fn test_count_while_and_range() {
        let mut list = SkipList::new();
        for v in [5, 1, 3, 9, 7] {
            list.insert(v);
        }
        assert_eq!(list.count_while(|v| *v < 6), 3);
        assert_eq!(list.count_while(|_| true), 5);
        assert_eq!(list.range(1, 2).collect::<Vec<_>>(), vec![&3, &5]);
        assert_eq!(list.range(3, 5).rev().collect::<Vec<_>>(), vec![&9, &7]);
        assert_eq!(list.range(5, 5).next(), None);
    }

    #[test]
    fn test_iter_both_ends() {
        let mut list = SkipList::new();
        for v in [3, 1, 2] {
            list.insert(v);
        }
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_clear() {
        let mut list = SkipList::new();
        for v in 0..64 {
            list.insert(v.to_string());
        }
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
        list.insert("a".to_string());
        assert_eq!(list.get_rank(&"a".to_string()), Some(0));
    }
}
