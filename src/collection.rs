//! 按插入顺序保存的键值集合。

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// 键值集合，`keys`/`values`/迭代都按键首次插入的顺序。
///
/// `add`只在键不存在时插入，已有的值不会被覆盖；需要覆盖时使用`set`。
#[derive(Debug, Clone)]
pub struct Collection<K, V> {
    entries: Vec<(K, V)>,
    index: FxHashMap<K, usize>,
}

impl<K, V> Default for Collection<K, V> {
    fn default() -> Self {
        Collection { entries: Vec::new(), index: FxHashMap::default() }
    }
}

impl<K: Eq + Hash + Clone, V> Collection<K, V> {
    pub fn new() -> Self {
        Collection::default()
    }

    /// 键不存在时插入并返回`true`，否则保持原值并返回`false`。
    pub fn add(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// 插入或覆盖，返回被覆盖的旧值；覆盖时键的位置不变。
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.add(key, value);
                None
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.values()
    }

    /// 移除键，不存在时忽略；返回自身以便链式调用。
    pub fn remove(&mut self, key: &K) -> &mut Self {
        if let Some(pos) = self.index.remove(key) {
            self.entries.remove(pos);
            for (key, _) in &self.entries[pos..] {
                if let Some(index) = self.index.get_mut(key) {
                    *index -= 1;
                }
            }
        }
        self
    }

    pub fn remove_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a K>) -> &mut Self
    where
        K: 'a,
    {
        for key in keys {
            self.remove(key);
        }
        self
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for Collection<K, V> {
    /// 重复的键以首次出现的值为准。
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for (key, value) in iter {
            collection.add(key, value);
        }
        collection
    }
}

impl<K, V> IntoIterator for Collection<K, V> {
    type Item = V;
    type IntoIter = std::iter::Map<std::vec::IntoIter<(K, V)>, fn((K, V)) -> V>;

    fn into_iter(self) -> Self::IntoIter {
        let value: fn((K, V)) -> V = |(_, value)| value;
        self.entries.into_iter().map(value)
    }
}

/// 以下标为键收集。
pub fn collect<V>(values: Vec<V>) -> Collection<usize, V> {
    values.into_iter().enumerate().collect()
}

/// 以`key`提取的值为键收集，键重复时保留首次出现的值。
pub fn collect_by<K, V>(values: Vec<V>, mut key: impl FnMut(&V) -> K) -> Collection<K, V>
where
    K: Eq + Hash + Clone,
{
    values.into_iter().map(|value| (key(&value), value)).collect()
}
