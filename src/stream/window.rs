use crate::stream::stage::Source;
use std::iter::FusedIterator;

/// 窗口：求值时对数据源的截取，先跳过`offset`个元素，再最多保留`limit`个元素。
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub(crate) struct Window {
    pub(crate) offset: Option<usize>,
    pub(crate) limit: Option<usize>,
}

impl Window {
    pub(crate) fn apply<S: 'static>(self, source: Source<S>) -> Source<S> {
        let source: Source<S> = match self.offset {
            Some(offset) if offset > 0 => Box::new(Offset::new(source, offset)),
            _ => source,
        };
        match self.limit {
            Some(limit) => Box::new(Limit::new(source, limit)),
            None => source,
        }
    }
}

/// 丢弃前`remaining`个元素，首次拉取时才真正跳过。
#[derive(Debug)]
pub(crate) struct Offset<I> {
    source: I,
    remaining: usize,
}

impl<I: Iterator> Offset<I> {
    pub(crate) fn new(source: I, offset: usize) -> Self {
        Offset { source, remaining: offset }
    }
}

impl<I: Iterator> Iterator for Offset<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.source.next()?;
        }
        self.source.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (lower.saturating_sub(self.remaining), upper.map(|upper| upper.saturating_sub(self.remaining)))
    }
}

impl<I: FusedIterator> FusedIterator for Offset<I> {}

/// 最多产出`remaining`个元素，达到上限后不再从数据源拉取。
#[derive(Debug)]
pub(crate) struct Limit<I> {
    source: I,
    remaining: usize,
}

impl<I: Iterator> Limit<I> {
    pub(crate) fn new(source: I, limit: usize) -> Self {
        Limit { source, remaining: limit }
    }
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.source.next();
        if item.is_some() { self.remaining -= 1 } else { self.remaining = 0 }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.source.size_hint();
        (lower.min(self.remaining), Some(upper.map_or(self.remaining, |upper| upper.min(self.remaining))))
    }
}

impl<I: Iterator> FusedIterator for Limit<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn boxed(values: Vec<i32>) -> Source<i32> {
        Box::new(values.into_iter())
    }

    #[test]
    fn test_offset() {
        assert_eq!(Offset::new(0..5, 2).collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(Offset::new(0..5, 0).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(Offset::new(0..5, 5).collect::<Vec<_>>(), Vec::<i32>::new());
        assert_eq!(Offset::new(0..5, 10).collect::<Vec<_>>(), Vec::<i32>::new());
        assert_eq!(Offset::new(0..5, 2).size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_limit() {
        assert_eq!(Limit::new(0..5, 2).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(Limit::new(0..5, 0).collect::<Vec<_>>(), Vec::<i32>::new());
        assert_eq!(Limit::new(0..5, 10).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(Limit::new(0.., 3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(Limit::new(0.., 3).size_hint(), (3, Some(3)));
        assert_eq!(Limit::new(0..2, 3).size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_limit_stops_pulling() {
        let pulled = Rc::new(Cell::new(0));
        let counter = pulled.clone();
        let source = (0..).inspect(move |_| counter.set(counter.get() + 1));
        assert_eq!(Limit::new(source, 4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn test_offset_is_lazy() {
        let pulled = Rc::new(Cell::new(0));
        let counter = pulled.clone();
        let mut offset = Offset::new((0..10).inspect(move |_| counter.set(counter.get() + 1)), 3);
        assert_eq!(pulled.get(), 0);
        assert_eq!(offset.next(), Some(3));
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn test_window_offset_before_limit() {
        let window = Window { offset: Some(2), limit: Some(3) };
        assert_eq!(window.apply(boxed((0..10).collect())).collect::<Vec<_>>(), vec![2, 3, 4]);
        let window = Window { offset: Some(8), limit: Some(3) };
        assert_eq!(window.apply(boxed((0..10).collect())).collect::<Vec<_>>(), vec![8, 9]);
        let window = Window::default();
        assert_eq!(window.apply(boxed(vec![1, 2])).collect::<Vec<_>>(), vec![1, 2]);
        let window = Window { offset: None, limit: Some(0) };
        assert_eq!(window.apply(boxed(vec![1, 2])).collect::<Vec<_>>(), Vec::<i32>::new());
    }
}
