//! 流水线：构造、阶段与窗口。
//!
//! 构造方法和`map`/`filter`/`skip`/`take`只记录要做什么，不会从数据源拉取任何元素；
//! 直到调用终结操作（见`terminal`）才按“先跳过、再截取、逐个过阶段”的顺序求值一次。

pub mod collector;
pub mod compose;
pub mod err;
mod source;
mod stage;
mod terminal;
mod window;

use crate::Integer;
use crate::stream::source::Iterate;
use crate::stream::stage::{Plan, plan_of, then_filter, then_map};
use crate::stream::window::Window;
use std::fmt::{Debug, Formatter};

pub use stage::{StageKind, Survivors};

/// 惰性流。
///
/// 每个终结操作都会耗尽流：数据源和阶段链被消费，之后再调用终结操作只会看到空数据源，
/// 得到初始值或默认值，而不会重放原来的序列。
pub struct Stream<T> {
    plan: Option<Plan<T>>,
    stages: Vec<StageKind>,
    unbounded: bool,
    window: Window,
}

impl<T: 'static> Stream<T> {
    fn new(plan: Plan<T>, unbounded: bool) -> Self {
        Stream { plan: Some(plan), stages: Vec::new(), unbounded, window: Window::default() }
    }

    /// 包装已有序列，可以是无限序列，是否截取由调用方负责。
    pub fn of<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Stream::new(plan_of(Box::new(source.into_iter())), false)
    }

    /// 由种子和后继函数生成无限序列：`seed, successor(&seed), ...`。
    ///
    /// 生成的流是无界的，除`first_or`外的终结操作都要求先调用`take(n)`。
    /// 后继函数只在拉取下一个元素时才调用，`take(n)`最多调用`n - 1`次，`first_or`不调用。
    pub fn iterate(seed: T, successor: impl FnMut(&T) -> T + 'static) -> Self
    where
        T: Clone,
    {
        Stream::new(plan_of(Box::new(Iterate::new(seed, successor))), true)
    }

    /// 无限重复同一个值，无界。
    pub fn repeat(value: T) -> Self
    where
        T: Clone,
    {
        Stream::new(plan_of(Box::new(std::iter::repeat(value))), true)
    }

    /// 追加映射阶段。
    pub fn map<R: 'static>(self, f: impl FnMut(T) -> R + 'static) -> Stream<R> {
        let mut stages = self.stages;
        stages.push(StageKind::Map);
        Stream { plan: self.plan.map(|plan| then_map(plan, f)), stages, unbounded: self.unbounded, window: self.window }
    }

    /// 追加过滤阶段，不满足条件的元素被丢弃，之后的阶段不会再看到它。
    pub fn filter(mut self, predicate: impl FnMut(&T) -> bool + 'static) -> Self {
        self.stages.push(StageKind::Filter);
        self.plan = self.plan.map(|plan| then_filter(plan, predicate));
        self
    }

    /// 求值时跳过数据源的前`n`个元素，重复调用以最后一次为准。
    pub fn skip(mut self, n: usize) -> Self {
        self.window.offset = Some(n);
        self
    }

    /// 求值时最多取数据源的`n`个元素（在`skip`之后计数），同时使无界流变为有界。
    pub fn take(mut self, n: usize) -> Self {
        self.window.limit = Some(n);
        self.unbounded = false;
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.unbounded
    }

    pub fn is_spent(&self) -> bool {
        self.plan.is_none()
    }

    pub fn stages(&self) -> &[StageKind] {
        &self.stages
    }
}

impl Stream<Integer> {
    /// 生成`[start, end)`范围内步长为1的整数。
    pub fn range(start: Integer, end: Integer) -> Self {
        Stream::range_by(start, end, 1)
    }

    /// 生成`[start, end)`范围内指定步长的整数。
    ///
    /// 基于`iterate`实现，再隐式`take`范围内按步长间隔的元素个数，即`ceil(|end - start| / |step|)`，
    /// 而不是`take(end - start)`。步长为0，或步长方向与范围方向相反时，不生成任何元素。
    pub fn range_by(start: Integer, end: Integer, step: Integer) -> Self {
        Stream::iterate(start, move |prev| prev.saturating_add(step)).take(range_len(start, end, step))
    }
}

fn range_len(start: Integer, end: Integer, step: Integer) -> usize {
    let (span, step) = match step {
        s if s > 0 && end > start => (end.abs_diff(start), s.unsigned_abs()),
        s if s < 0 && end < start => (start.abs_diff(end), s.unsigned_abs()),
        _ => return 0,
    };
    usize::try_from(span.div_ceil(step)).unwrap_or(usize::MAX)
}

impl<T> Debug for Stream<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream")
            .field("stages", &self.stages)
            .field("unbounded", &self.unbounded)
            .field("offset", &self.window.offset)
            .field("limit", &self.window.limit)
            .field("spent", &self.plan.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::collector::to_list;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_of_is_bounded() {
        let stream = Stream::of(vec![1, 2, 3]);
        assert!(!stream.is_unbounded());
        assert!(!stream.is_spent());
    }

    #[test]
    fn test_iterate_is_unbounded_until_take() {
        let stream = Stream::iterate(1, |x| x * 2);
        assert!(stream.is_unbounded());
        let mut stream = stream.take(5);
        assert!(!stream.is_unbounded());
        assert_eq!(stream.collect(to_list), Ok(vec![1, 2, 4, 8, 16]));
    }

    fn counting_successor(calls: &Rc<Cell<usize>>) -> impl FnMut(&i32) -> i32 + 'static {
        let calls = calls.clone();
        move |x| {
            calls.set(calls.get() + 1);
            x + 1
        }
    }

    #[test]
    fn test_iterate_take_runs_successor_n_minus_one_times() {
        let calls = Rc::new(Cell::new(0));
        let mut stream = Stream::iterate(0, counting_successor(&calls)).take(5);
        assert_eq!(stream.collect(to_list), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_iterate_first_or_skips_successor() {
        let calls = Rc::new(Cell::new(0));
        let mut stream = Stream::iterate(0, counting_successor(&calls));
        assert_eq!(stream.first_or(-1), 0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_iterate_stops_before_overflow() {
        let mut stream = Stream::iterate(1u8, |x| x * 2).take(8);
        assert_eq!(stream.collect(to_list), Ok(vec![1, 2, 4, 8, 16, 32, 64, 128]));
    }

    #[test]
    fn test_skip_does_not_bound() {
        assert!(Stream::iterate(0, |x| x + 1).skip(10).is_unbounded());
        assert!(Stream::repeat("a").is_unbounded());
    }

    #[test]
    fn test_builders_do_not_pull() {
        let stream = Stream::iterate(0, |_: &i32| -> i32 { panic!("successor must not run while building") });
        let _stream = stream.map(|x| x + 1).filter(|x| *x > 0).skip(3).take(2);
    }

    #[test]
    fn test_stages_recorded_in_order() {
        let stream = Stream::of(0..3).map(|x| x + 1).filter(|x| *x > 1).map(|x| x.to_string());
        assert_eq!(stream.stages(), &[StageKind::Map, StageKind::Filter, StageKind::Map]);
    }

    #[test]
    fn test_window_last_write_wins() {
        let mut stream = Stream::of(0..10).skip(5).skip(2).take(1).take(3);
        assert_eq!(stream.collect(to_list), Ok(vec![2, 3, 4]));
    }

    #[test]
    fn test_skip_take_order_independent() {
        let mut a = Stream::of(0..10).skip(3).take(4);
        let mut b = Stream::of(0..10).take(4).skip(3);
        assert_eq!(a.collect(to_list), Ok(vec![3, 4, 5, 6]));
        assert_eq!(b.collect(to_list), Ok(vec![3, 4, 5, 6]));
    }

    #[test]
    fn test_skip_take_slices_source() {
        let source: Vec<i32> = (0..7).collect();
        for a in 0..10 {
            for b in 0..10 {
                let expected = source.iter().copied().skip(a).take(b).collect::<Vec<_>>();
                assert_eq!(Stream::of(source.clone()).skip(a).take(b).collect(to_list), Ok(expected), "a={a} b={b}");
            }
        }
    }

    #[test]
    fn test_range() {
        assert_eq!(Stream::range(0, 5).collect(to_list), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(Stream::range(3, 3).collect(to_list), Ok(vec![]));
        assert_eq!(Stream::range(5, 0).collect(to_list), Ok(vec![]));
        assert_eq!(Stream::range(-2, 2).collect(to_list), Ok(vec![-2, -1, 0, 1]));
    }

    #[test]
    fn test_range_by() {
        assert_eq!(Stream::range_by(0, 10, 3).collect(to_list), Ok(vec![0, 3, 6, 9]));
        assert_eq!(Stream::range_by(0, 10, 5).collect(to_list), Ok(vec![0, 5]));
        assert_eq!(Stream::range_by(10, 0, -4).collect(to_list), Ok(vec![10, 6, 2]));
        assert_eq!(Stream::range_by(0, 10, -1).collect(to_list), Ok(vec![]));
        assert_eq!(Stream::range_by(0, 10, 0).collect(to_list), Ok(vec![]));
        assert!(!Stream::range_by(0, 10, 0).is_unbounded());
    }

    #[test]
    fn test_range_near_integer_max() {
        assert_eq!(Stream::range(Integer::MAX - 2, Integer::MAX).collect(to_list), Ok(vec![Integer::MAX - 2, Integer::MAX - 1]));
    }

    #[test]
    fn test_debug() {
        let stream = Stream::of(0..3).filter(|x| *x > 0).skip(1);
        assert_eq!(
            format!("{stream:?}"),
            "Stream { stages: [Filter], unbounded: false, offset: Some(1), limit: None, spent: false }"
        );
    }
}
