//! 收集器：传给[`Stream::collect`](crate::stream::Stream::collect)，把通过全部阶段的元素汇总为具体容器。
//!
//! 收集器就是普通函数`FnOnce(I) -> R`，其中`I`是元素迭代器，因此也可以直接作用于任意迭代器。

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Display;
use std::hash::Hash;

/// 按遇到顺序收集为列表。
pub fn to_list<I: Iterator>(items: I) -> Vec<I::Item> {
    items.collect()
}

/// 按值去重收集为集合，不保证顺序。
pub fn to_set<I>(items: I) -> FxHashSet<I::Item>
where
    I: Iterator,
    I::Item: Eq + Hash,
{
    items.collect()
}

/// 统计元素个数。
pub fn counting<I: Iterator>(items: I) -> usize {
    items.count()
}

/// 以`Display`格式拼接全部元素。
pub fn joining<I>(delimiter: impl Into<String>) -> impl FnOnce(I) -> String
where
    I: Iterator,
    I::Item: Display,
{
    let delimiter = delimiter.into();
    move |mut items| items.join(&delimiter)
}

/// 按`key`和`value`提取键值收集为映射，键冲突时后出现的元素覆盖之前的值。
pub fn to_map<T, I, K, V>(
    mut key: impl FnMut(&T) -> K, mut value: impl FnMut(T) -> V,
) -> impl FnOnce(I) -> FxHashMap<K, V>
where
    I: Iterator<Item = T>,
    K: Eq + Hash,
{
    move |items| {
        let mut map = FxHashMap::default();
        for item in items {
            map.insert(key(&item), value(item));
        }
        map
    }
}

/// 同[`to_map`]，但键冲突时用`merge(已有值, 新元素)`的结果作为新值，键保持不变。
pub fn to_map_merging<T, I, K, V>(
    mut key: impl FnMut(&T) -> K, mut value: impl FnMut(T) -> V, mut merge: impl FnMut(V, T) -> V,
) -> impl FnOnce(I) -> FxHashMap<K, V>
where
    I: Iterator<Item = T>,
    K: Eq + Hash,
{
    move |items| {
        let mut map = FxHashMap::default();
        for item in items {
            let k = key(&item);
            let merged = match map.remove(&k) {
                Some(existing) => merge(existing, item),
                None => value(item),
            };
            map.insert(k, merged);
        }
        map
    }
}

/// 按`key`分组，组内保持遇到顺序。
pub fn grouping_by<T, I, K>(mut key: impl FnMut(&T) -> K) -> impl FnOnce(I) -> FxHashMap<K, Vec<T>>
where
    I: Iterator<Item = T>,
    K: Eq + Hash,
{
    move |items| {
        let mut groups: FxHashMap<K, Vec<T>> = FxHashMap::default();
        for item in items {
            groups.entry(key(&item)).or_default().push(item);
        }
        groups
    }
}
