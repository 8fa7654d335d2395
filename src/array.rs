//! 列表上的即时辅助函数，通常作用于[`to_list`](crate::stream::collector::to_list)收集出的结果。
//!
//! 所有函数都不修改入参，返回新的列表。

use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::hash::Hash;

/// 单个分块的最大长度，超过时按此值分块。
pub const CHUNK_SIZE_LIMIT: usize = 512;

/// 排序方向。
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Order::Asc => ordering,
            Order::Desc => ordering.reverse(),
        }
    }
}

pub fn filter<T: Clone>(list: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    list.iter().filter(|value| predicate(*value)).cloned().collect()
}

/// 与[`filter`]相反，丢弃满足条件的元素。
pub fn reject<T: Clone>(list: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    filter(list, |value| !predicate(value))
}

/// 按`size`切分为连续的分块，最后一块可能不足`size`个。
///
/// `size`超过[`CHUNK_SIZE_LIMIT`]时按上限切分，为0时返回空列表。
pub fn chunk<T: Clone>(list: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    list.chunks(size.min(CHUNK_SIZE_LIMIT)).map(<[T]>::to_vec).collect()
}

/// 稳定排序，相等元素保持原有顺序。
pub fn sort<T: Ord + Clone>(list: &[T], order: Order) -> Vec<T> {
    sort_with(list, |a, b| order.apply(a.cmp(b)))
}

/// 按`key`提取的值稳定排序。
pub fn sort_by<T, K>(list: &[T], mut key: impl FnMut(&T) -> K, order: Order) -> Vec<T>
where
    T: Clone,
    K: Ord,
{
    sort_with(list, |a, b| order.apply(key(a).cmp(&key(b))))
}

pub fn sort_with<T: Clone>(list: &[T], compare: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
    list.iter().cloned().sorted_by(compare).collect()
}

/// 展开一层嵌套。
pub fn flatten<T: Clone>(list: &[Vec<T>]) -> Vec<T> {
    list.iter().flatten().cloned().collect()
}

pub fn take<T: Clone>(list: &[T], n: usize) -> Vec<T> {
    list.iter().take(n).cloned().collect()
}

pub fn skip<T: Clone>(list: &[T], n: usize) -> Vec<T> {
    list.iter().skip(n).cloned().collect()
}

pub fn last<T>(list: &[T]) -> Option<&T> {
    list.last()
}

/// 丢弃`from`之前的元素，再丢弃剩余部分的第一个元素。
pub fn tail<T: Clone>(list: &[T], from: usize) -> Vec<T> {
    skip(list, from.saturating_add(1))
}

/// 从下标`offset`开始查找`target`。
pub fn includes<T: PartialEq>(list: &[T], target: &T, offset: usize) -> bool {
    list.iter().skip(offset).any(|value| value == target)
}

/// 顺序查找，`matches(target, value)`为真即视为找到。
pub fn seq_search<T>(list: &[T], target: &T, mut matches: impl FnMut(&T, &T) -> bool) -> bool {
    list.iter().any(|value| matches(target, value))
}

/// 长度相同，且两个列表的元素互相包含。
///
/// 只比较长度和成员关系，不比较各元素的出现次数：`[1, 1, 2]`与`[1, 2, 2]`相等。
pub fn equals<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let a_set: FxHashSet<&T> = a.iter().collect();
    let b_set: FxHashSet<&T> = b.iter().collect();
    a.iter().all(|value| b_set.contains(value)) && b.iter().all(|value| a_set.contains(value))
}

/// `sub`的元素都在`list`中出现，且`sub`本身没有重复元素。
pub fn contains_all<T: Eq + Hash + Clone>(list: &[T], sub: &[T]) -> bool {
    equals(&intersect(list, sub), sub)
}

/// `a`中同时出现在`b`中的元素，按`a`中首次出现的顺序去重。
pub fn intersect<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let b_set: FxHashSet<&T> = b.iter().collect();
    a.iter().unique().filter(|value| b_set.contains(value)).cloned().collect()
}

/// 只出现在其中一个列表中的元素：先是`a`独有的，再是`b`独有的，去重。
pub fn diff<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let a_set: FxHashSet<&T> = a.iter().collect();
    let b_set: FxHashSet<&T> = b.iter().collect();
    a.iter()
        .filter(|value| !b_set.contains(value))
        .chain(b.iter().filter(|value| !a_set.contains(value)))
        .unique()
        .cloned()
        .collect()
}

/// 按位置比较的差异，去重。
///
/// 在公共长度内，先输出`a`中与`b`同位置不相等的元素，再输出`b`中对应的元素，
/// 最后输出较长列表多出的部分。
pub fn symmetric_diff<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let common = a.len().min(b.len());
    let (a_head, a_rest) = a.split_at(common);
    let (b_head, b_rest) = b.split_at(common);
    let mismatched = || a_head.iter().zip(b_head).filter(|(x, y)| x != y);
    mismatched()
        .map(|(x, _)| x)
        .chain(mismatched().map(|(_, y)| y))
        .chain(a_rest)
        .chain(b_rest)
        .unique()
        .cloned()
        .collect()
}
