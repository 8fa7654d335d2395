use std::iter::FusedIterator;

/// 由种子和后继函数生成的无限序列。
///
/// 后继函数只在下一次拉取时作用于上一个值，取到第`n`个元素时恰好调用了`n - 1`次。
pub(crate) struct Iterate<T, F> {
    last: Option<T>,
    started: bool,
    successor: F,
}

impl<T, F> Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    pub(crate) fn new(seed: T, successor: F) -> Self {
        Iterate { last: Some(seed), started: false, successor }
    }
}

impl<T, F> Iterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            let next = (self.successor)(self.last.as_ref()?);
            self.last = Some(next);
        } else {
            self.started = true;
        }
        self.last.clone()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Clone, F: FnMut(&T) -> T> FusedIterator for Iterate<T, F> {}
