use crate::stream::err::StreamErr;
use crate::stream::stage::Survivors;
use crate::stream::Stream;

/// 终结操作。
///
/// 求值过程一致：对数据源先跳过、再截取，逐个拉取元素并依次经过全部阶段，被过滤的元素直接略过，
/// 其余元素交给各操作自己的累积规则。除`first_or`/`first_or_else`外，无界流上的终结操作
/// 会在拉取任何元素之前返回[`StreamErr::Unbounded`]，流本身保持不变。
impl<T: 'static> Stream<T> {
    fn ensure_bounded(&self, op: &'static str) -> Result<(), StreamErr> {
        if self.unbounded { Err(StreamErr::Unbounded { op }) } else { Ok(()) }
    }

    /// 取出求值计划并耗尽流，已耗尽的流产出空序列。
    fn drain(&mut self) -> Survivors<T> {
        match self.plan.take() {
            Some(plan) => Survivors::new(plan(self.window)),
            None => Survivors::new(Box::new(std::iter::empty())),
        }
    }

    pub fn reduce<R>(&mut self, identity: R, reducer: impl FnMut(R, T) -> R) -> Result<R, StreamErr> {
        self.ensure_bounded("reduce")?;
        Ok(self.drain().fold(identity, reducer))
    }

    /// 同`reduce`，归约函数出错时立即停止，已累积的结果丢弃。
    pub fn try_reduce<R, E>(&mut self, identity: R, mut reducer: impl FnMut(R, T) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StreamErr>,
    {
        self.ensure_bounded("try_reduce")?;
        let mut acc = identity;
        for item in self.drain() {
            acc = reducer(acc, item)?;
        }
        Ok(acc)
    }

    /// 先映射再归约，等价于`map(map_fn).reduce(initial, reducer)`，但不追加阶段。
    pub fn map_reduce<M, R>(
        &mut self, initial: R, map_fn: impl FnMut(T) -> M, reducer: impl FnMut(R, M) -> R,
    ) -> Result<R, StreamErr> {
        self.ensure_bounded("map_reduce")?;
        Ok(self.drain().map(map_fn).fold(initial, reducer))
    }

    pub fn for_each(&mut self, callback: impl FnMut(T)) -> Result<(), StreamErr> {
        self.ensure_bounded("for_each")?;
        self.drain().for_each(callback);
        Ok(())
    }

    /// 同`for_each`，回调出错时立即停止并返回该错误。
    pub fn try_for_each<E>(&mut self, callback: impl FnMut(T) -> Result<(), E>) -> Result<(), E>
    where
        E: From<StreamErr>,
    {
        self.ensure_bounded("try_for_each")?;
        self.drain().try_for_each(callback)
    }

    /// 第一个通过全部阶段的元素，没有则返回`default`。
    ///
    /// 拿到第一个元素后立即停止拉取，因此无界流上也可以安全调用；但如果没有任何元素能通过过滤，
    /// 无界流上的调用不会结束。
    pub fn first_or(&mut self, default: T) -> T {
        self.drain().next().unwrap_or(default)
    }

    pub fn first_or_else(&mut self, default: impl FnOnce() -> T) -> T {
        self.drain().next().unwrap_or_else(default)
    }

    /// 将通过全部阶段的元素作为惰性序列交给收集器，见[`collector`](crate::stream::collector)。
    pub fn collect<R>(&mut self, collector: impl FnOnce(Survivors<T>) -> R) -> Result<R, StreamErr> {
        self.ensure_bounded("collect")?;
        Ok(collector(self.drain()))
    }
}
