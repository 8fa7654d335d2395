/// 从左到右组合两个函数：`compose(f, g)(a) == g(f(a))`。
///
/// ```
/// use rstream::stream::compose::compose;
///
/// let mut inc_then_double = compose(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(inc_then_double(3), 8);
/// ```
pub fn compose<A, B, C>(mut f: impl FnMut(A) -> B, mut g: impl FnMut(B) -> C) -> impl FnMut(A) -> C {
    move |a| g(f(a))
}

/// 同[`compose`]，但只能调用一次，用于组合只执行一次的构造过程。
pub fn compose_once<A, B, C>(f: impl FnOnce(A) -> B, g: impl FnOnce(B) -> C) -> impl FnOnce(A) -> C {
    move |a| g(f(a))
}
