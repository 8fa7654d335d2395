use crate::stream::compose::compose_once;
use crate::stream::window::Window;

pub(crate) type Source<T> = Box<dyn Iterator<Item = T>>;

/// 阶段链的求值计划：传入窗口后截取数据源，并依次套上全部阶段。
pub(crate) type Plan<T> = Box<dyn FnOnce(Window) -> Source<Staged<T>>>;

/// 元素经过阶段后的状态。
///
/// `Dropped`即缺席标记：元素已被某个过滤阶段丢弃，之后的阶段原样传递，不再调用用户函数。
/// 与`Option`区分开，用户自己的`None`值可以正常流经整条流水线。
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Staged<T> {
    Kept(T),
    Dropped,
}

impl<T> Staged<T> {
    pub(crate) fn map<R>(self, f: impl FnOnce(T) -> R) -> Staged<R> {
        match self {
            Staged::Kept(value) => Staged::Kept(f(value)),
            Staged::Dropped => Staged::Dropped,
        }
    }

    pub(crate) fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Staged<T> {
        match self {
            Staged::Kept(value) if predicate(&value) => Staged::Kept(value),
            _ => Staged::Dropped,
        }
    }

    pub(crate) fn kept(self) -> Option<T> {
        match self {
            Staged::Kept(value) => Some(value),
            Staged::Dropped => None,
        }
    }
}

/// 阶段类型
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StageKind {
    Map,
    Filter,
}

pub(crate) fn plan_of<S: 'static>(source: Source<S>) -> Plan<S> {
    Box::new(move |window: Window| Box::new(window.apply(source).map(Staged::Kept)))
}

pub(crate) fn then_map<T, R>(plan: Plan<T>, mut f: impl FnMut(T) -> R + 'static) -> Plan<R>
where
    T: 'static,
    R: 'static,
{
    Box::new(compose_once(plan, move |staged: Source<Staged<T>>| -> Source<Staged<R>> {
        Box::new(staged.map(move |item| item.map(&mut f)))
    }))
}

pub(crate) fn then_filter<T>(plan: Plan<T>, mut predicate: impl FnMut(&T) -> bool + 'static) -> Plan<T>
where
    T: 'static,
{
    Box::new(compose_once(plan, move |staged: Source<Staged<T>>| -> Source<Staged<T>> {
        Box::new(staged.map(move |item| item.filter(&mut predicate)))
    }))
}

/// 通过全部阶段的元素，按数据源顺序惰性产出。
///
/// 终结操作和收集器只会看到这里产出的值，缺席标记不会出现在公开接口上。
pub struct Survivors<T> {
    staged: Source<Staged<T>>,
}

impl<T> Survivors<T> {
    pub(crate) fn new(staged: Source<Staged<T>>) -> Self {
        Survivors { staged }
    }
}

impl<T> Iterator for Survivors<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.staged.find_map(Staged::kept)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.staged.size_hint().1)
    }
}
