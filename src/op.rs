use crate::condition::Cond;
use crate::Pipe;
use cmd_help::CmdHelp;

#[derive(Debug, PartialEq, CmdHelp)]
pub(crate) enum Op {
    /* **************************************** 访问 **************************************** */
    /// peek        打印每个经过的值到标准输出，值本身不变。
    ///             只有被拉取的值才会打印，被前面的过滤或窗口丢弃的值不会打印。
    Peek,
    /* **************************************** 减少 **************************************** */
    /// filter      保留满足条件的值。
    ///             filter <cond>
    ///                 <cond>  条件，必选，作为单个参数传入，语法参考`-h cond`。
    ///             例如：
    ///                 filter 'len 2,5'
    ///                 filter '!num integer'
    ///                 filter 'reg [a-z]+\d'
    Filter { cond: Cond },
    /* **************************************** 窗口 **************************************** */
    /// skip        跳过数据源的前<count>个值。
    ///             按数据源计数，不论写在哪个操作之后；多次指定时以最后一次为准。
    ///             skip <count>
    ///             例如：
    ///                 range 0 10 skip 3       生成：3 4 5 6 7 8 9
    Skip { count: usize },
    /// take        最多取数据源的<count>个值，同时使无限输入变为有限。
    ///             按数据源计数，不论写在哪个操作之后；多次指定时以最后一次为准。
    ///             take <count>
    ///             例如：
    ///                 iter 1 take 3           生成：1 2 3
    ///                 range 0 10 skip 2 take 3 生成：2 3 4
    Take { count: usize },
}

impl Op {
    pub(crate) fn new_peek() -> Op {
        Op::Peek
    }
    pub(crate) fn new_filter(cond: Cond) -> Op {
        Op::Filter { cond }
    }
    pub(crate) fn new_skip(count: usize) -> Op {
        Op::Skip { count }
    }
    pub(crate) fn new_take(count: usize) -> Op {
        Op::Take { count }
    }

    pub(crate) fn wrap(self, pipe: Pipe) -> Pipe {
        match self {
            Op::Peek => pipe.map(|item| {
                println!("{item}");
                item
            }),
            Op::Filter { cond } => pipe.filter(move |item| cond.test(item)),
            Op::Skip { count } => pipe.skip(count),
            Op::Take { count } => pipe.take(count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Select;
    use crate::item::Item;
    use rstream::stream::collector::to_list;

    fn strings(values: &[&str]) -> Vec<Item> {
        values.iter().map(|s| Item::String(s.to_string())).collect()
    }

    fn run(op: Op, items: Vec<Item>) -> Vec<Item> {
        op.wrap(Pipe::of(items)).collect(to_list).unwrap()
    }

    #[test]
    fn test_peek_keeps_items() {
        assert_eq!(run(Op::new_peek(), strings(&["a", "b"])), strings(&["a", "b"]));
    }

    #[test]
    fn test_filter() {
        let op = Op::new_filter(Select::TextLenSpec { spec: 2 }.yes());
        assert_eq!(run(op, strings(&["a", "bb", "cc", "ddd"])), strings(&["bb", "cc"]));
    }

    #[test]
    fn test_window_counts_source() {
        let items = strings(&["a", "bb", "c", "dd", "e"]);
        // take 作用于数据源，而不是过滤后的结果
        let pipe = Op::new_filter(Select::TextLenSpec { spec: 1 }.yes()).wrap(Pipe::of(items));
        let mut pipe = Op::new_take(3).wrap(pipe);
        assert_eq!(pipe.collect(to_list), Ok(strings(&["a", "c"])));
    }

    #[test]
    fn test_take_bounds_infinite() {
        let pipe = Op::new_take(2).wrap(Pipe::repeat(Item::Integer(7)));
        assert!(!pipe.is_unbounded());
    }
}
