use crate::err::RsErr;
use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use crate::parse::args::input::parse_input;
use crate::parse::args::op::parse_ops;
use crate::parse::args::output::parse_output;
use std::iter::Peekable;
use std::str::FromStr;

mod config;
mod input;
mod op;
mod output;

pub(crate) use config::parse_configs;

pub(crate) fn parse(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(Input, Vec<Op>, Output), RsErr> {
    let input = parse_input(&mut args)?;
    let ops = parse_ops(&mut args)?;
    let output = parse_output(&mut args)?;
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(RsErr::UnknownArgs { args: remaining }) } else { Ok((input, ops, output)) }
}

fn parse_arg_or_arg1(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<Vec<String>, RsErr> {
    match args.next() {
        // 至少有一个值，直接消耗
        Some(value) => {
            if value == "[" {
                // 多值开始
                let mut values = Vec::new();
                for value in args.by_ref() {
                    if value == "]" {
                        // 多值结束
                        return if values.is_empty() { Err(RsErr::ArgNotEnough { cmd, arg }) } else { Ok(values) };
                    } else {
                        values.push(escaped(value))
                    }
                }
                Err(RsErr::UnclosingMultiArg { cmd, arg })
            } else if value == "]" {
                // 未开启的多值结束
                Err(RsErr::UnexpectedClosingBracket { cmd, arg })
            } else {
                Ok(vec![escaped(value)])
            }
        }
        None => Err(RsErr::MissingArg { cmd, arg }),
    }
}

fn escaped(arg: String) -> String {
    if arg == "\\[" || arg == "\\]" { arg[1..].to_string() } else { arg }
}

/// 必选参数，缺失或无法解析都是错误。
fn parse_required<T>(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str, arg: &'static str,
) -> Result<T, RsErr>
where
    T: FromStr,
    T::Err: ToString,
{
    match args.next() {
        Some(value) => value.parse::<T>().map_err(|err| RsErr::ArgParseErr {
            cmd,
            arg,
            arg_value: value.clone(),
            error: err.to_string(),
        }),
        None => Err(RsErr::MissingArg { cmd, arg }),
    }
}

fn consume_if<F>(args: &mut Peekable<impl Iterator<Item = String>>, f: F) -> Option<String>
where
    F: FnOnce(&String) -> bool,
{
    args.next_if(f)
}

fn consume_if_some<M, U>(args: &mut Peekable<impl Iterator<Item = String>>, m: M) -> Option<U>
where
    M: FnOnce(&String) -> Option<U>,
{
    let option = args.peek().and_then(m);
    if option.is_some() {
        args.next();
    }
    option
}

fn parse_general_file_info(args: &mut Peekable<impl Iterator<Item = String>>) -> Option<(String, bool, Option<bool>)> {
    // 必须文件名，直接消耗
    let file = args.next()?;
    let append = consume_if(args, |value| value.eq_ignore_ascii_case("append")).is_some();
    let crlf = consume_if_some(args, |value| {
        if value.eq_ignore_ascii_case("crlf") {
            Some(true)
        } else if value.eq_ignore_ascii_case("lf") {
            Some(false)
        } else {
            None
        }
    });
    Some((file, append, crlf))
}

#[cfg(test)]
fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split(' ').map(String::from).peekable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Select;

    #[test]
    fn test_parse_arg_or_arg1() {
        assert_eq!(Ok(vec!["a".to_string()]), parse_arg_or_arg1(&mut build_args("a"), "of", "text"));
        assert_eq!(
            Ok(vec!["a".to_string(), "[".to_string(), "]".to_string()]),
            parse_arg_or_arg1(&mut build_args("[ a \\[ \\] ]"), "of", "text")
        );
        assert_eq!(Err(RsErr::ArgNotEnough { cmd: "of", arg: "text" }), parse_arg_or_arg1(&mut build_args("[ ]"), "of", "text"));
        assert_eq!(
            Err(RsErr::UnclosingMultiArg { cmd: "of", arg: "text" }),
            parse_arg_or_arg1(&mut build_args("[ a b"), "of", "text")
        );
        assert_eq!(
            Err(RsErr::UnexpectedClosingBracket { cmd: "of", arg: "text" }),
            parse_arg_or_arg1(&mut build_args("]"), "of", "text")
        );
        assert_eq!(Err(RsErr::MissingArg { cmd: "of", arg: "text" }), parse_arg_or_arg1(&mut Vec::<String>::new().into_iter().peekable(), "of", "text"));
    }

    #[test]
    fn test_parse_general_file_info() {
        assert_eq!(Some(("a.txt".to_string(), false, None)), parse_general_file_info(&mut build_args("a.txt")));
        assert_eq!(Some(("a.txt".to_string(), true, None)), parse_general_file_info(&mut build_args("a.txt append")));
        assert_eq!(Some(("a.txt".to_string(), true, Some(true))), parse_general_file_info(&mut build_args("a.txt append crlf")));
        assert_eq!(Some(("a.txt".to_string(), false, Some(false))), parse_general_file_info(&mut build_args("a.txt LF")));
        let mut args = build_args("a.txt count");
        assert_eq!(Some(("a.txt".to_string(), false, None)), parse_general_file_info(&mut args));
        assert_eq!(Some("count".to_string()), args.next());
    }

    #[test]
    fn test_parse_whole() {
        let (input, ops, output) = parse(build_args("range 0 10 filter num take 3 count")).unwrap();
        assert_eq!(Input::new_range(0, 10, None), input);
        assert_eq!(
            vec![Op::new_filter(Select::Num { integer: None }.yes()), Op::new_take(3)],
            ops
        );
        assert_eq!(Output::new_count(), output);
    }

    #[test]
    fn test_parse_defaults() {
        let (input, ops, output) = parse(Vec::<String>::new().into_iter().peekable()).unwrap();
        assert_eq!(Input::new_std_in(), input);
        assert!(ops.is_empty());
        assert_eq!(Output::new_std_out(), output);
    }

    #[test]
    fn test_unknown_args() {
        assert_eq!(
            Err(RsErr::UnknownArgs { args: vec!["unknown".to_string(), "arg".to_string()] }),
            parse(build_args("of abc peek unknown arg"))
        );
    }
}
