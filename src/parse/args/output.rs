use crate::err::RsErr;
use crate::output::Output;
use crate::parse::args::{consume_if, parse_arg_or_arg1, parse_general_file_info, parse_required};
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_output(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, RsErr> {
    match args.peek() {
        Some(cmd) => {
            if cmd.eq_ignore_ascii_case("to") {
                parse_to(args)
            } else if cmd.eq_ignore_ascii_case("set") {
                args.next();
                Ok(Output::new_set())
            } else if cmd.eq_ignore_ascii_case("count") {
                args.next();
                Ok(Output::new_count())
            } else if cmd.eq_ignore_ascii_case("sum") {
                args.next();
                Ok(Output::new_sum())
            } else if cmd.eq_ignore_ascii_case("first") {
                parse_first(args)
            } else if cmd.eq_ignore_ascii_case("join") {
                parse_join(args)
            } else if cmd.eq_ignore_ascii_case("last") {
                args.next();
                Ok(Output::new_last(args.next().ok_or(RsErr::MissingArg { cmd: "last", arg: "default" })?))
            } else if cmd.eq_ignore_ascii_case("sort") {
                args.next();
                Ok(Output::new_sort(consume_if(args, |s| s.eq_ignore_ascii_case("desc")).is_some()))
            } else if cmd.eq_ignore_ascii_case("chunk") {
                args.next();
                Ok(Output::new_chunk(parse_required(args, "chunk", "size")?))
            } else if cmd.eq_ignore_ascii_case("distinct") {
                args.next();
                Ok(Output::new_distinct())
            } else if cmd.eq_ignore_ascii_case("diff") {
                args.next();
                Ok(Output::new_diff(parse_arg_or_arg1(args, "diff", "text")?))
            } else {
                Ok(Output::new_std_out())
            }
        }
        None => Ok(Output::new_std_out()),
    }
}

fn parse_to(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, RsErr> {
    args.next(); // 消耗`to`
    match args.next() {
        Some(output) if output.eq_ignore_ascii_case("out") => Ok(Output::new_std_out()),
        Some(output) if output.eq_ignore_ascii_case("file") => {
            if let Some((file, append, crlf)) = parse_general_file_info(args) {
                Ok(Output::new_file(file, append, crlf))
            } else {
                Err(RsErr::MissingArg { cmd: "to file", arg: "file" })
            }
        }
        Some(output) => Err(RsErr::UnknownArgs { args: vec!["to".to_string(), output] }),
        None => Err(RsErr::MissingArg { cmd: "to", arg: "out|file" }),
    }
}

fn parse_first(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, RsErr> {
    args.next(); // 消耗`first`
    match args.next() {
        Some(default) => Ok(Output::new_first(default)),
        None => Err(RsErr::MissingArg { cmd: "first", arg: "default" }),
    }
}

fn parse_join(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Output, RsErr> {
    args.next(); // 消耗`join`
    // 分隔符必选，前缀和后缀可选
    let delimiter = args.next().ok_or(RsErr::MissingArg { cmd: "join", arg: "delimiter" })?;
    let prefix = args.next();
    let postfix = if prefix.is_some() { args.next() } else { None };
    Ok(Output::new_join(delimiter, prefix, postfix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::args::build_args;

    #[test]
    fn test_default() {
        let mut args = build_args("abc");
        assert_eq!(Ok(Output::new_std_out()), parse_output(&mut args));
        assert_eq!(Some("abc".to_string()), args.next());
    }

    #[test]
    fn test_parse_to() {
        assert_eq!(Ok(Output::new_std_out()), parse_output(&mut build_args("to out")));
        assert_eq!(
            Ok(Output::new_file("a.txt".to_string(), true, Some(true))),
            parse_output(&mut build_args("to file a.txt append crlf"))
        );
        assert_eq!(Err(RsErr::MissingArg { cmd: "to file", arg: "file" }), parse_output(&mut build_args("TO FILE")));
        assert_eq!(
            Err(RsErr::UnknownArgs { args: vec!["to".to_string(), "clip".to_string()] }),
            parse_output(&mut build_args("to clip"))
        );
    }

    #[test]
    fn test_parse_terminals() {
        assert_eq!(Ok(Output::new_set()), parse_output(&mut build_args("set")));
        assert_eq!(Ok(Output::new_count()), parse_output(&mut build_args("count")));
        assert_eq!(Ok(Output::new_sum()), parse_output(&mut build_args("sum")));
        assert_eq!(Ok(Output::new_first("none".to_string())), parse_output(&mut build_args("first none")));
        assert_eq!(Err(RsErr::MissingArg { cmd: "first", arg: "default" }), parse_output(&mut build_args("first")));
    }

    #[test]
    fn test_parse_list_outputs() {
        assert_eq!(Ok(Output::new_last("none".to_string())), parse_output(&mut build_args("last none")));
        assert_eq!(Err(RsErr::MissingArg { cmd: "last", arg: "default" }), parse_output(&mut build_args("last")));
        assert_eq!(Ok(Output::new_sort(false)), parse_output(&mut build_args("sort")));
        assert_eq!(Ok(Output::new_sort(true)), parse_output(&mut build_args("SORT desc")));
        assert_eq!(Ok(Output::new_chunk(3)), parse_output(&mut build_args("chunk 3")));
        assert!(matches!(
            parse_output(&mut build_args("chunk x")),
            Err(RsErr::ArgParseErr { cmd: "chunk", arg: "size", .. })
        ));
        assert_eq!(Ok(Output::new_distinct()), parse_output(&mut build_args("distinct")));
        assert_eq!(
            Ok(Output::new_diff(vec!["a".to_string(), "b".to_string()])),
            parse_output(&mut build_args("diff [ a b ]"))
        );
        assert_eq!(Ok(Output::new_diff(vec!["a".to_string()])), parse_output(&mut build_args("diff a")));
    }

    #[test]
    fn test_parse_join() {
        assert_eq!(Ok(Output::new_join(",".to_string(), None, None)), parse_output(&mut build_args("join ,")));
        assert_eq!(
            Ok(Output::new_join(",".to_string(), Some("[".to_string()), Some("]".to_string()))),
            parse_output(&mut build_args("join , [ ]"))
        );
        assert_eq!(
            Ok(Output::new_join(",".to_string(), Some("<".to_string()), None)),
            parse_output(&mut build_args("join , <"))
        );
        assert_eq!(Err(RsErr::MissingArg { cmd: "join", arg: "delimiter" }), parse_output(&mut build_args("join")));
    }
}
