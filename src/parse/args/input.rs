use crate::err::RsErr;
use crate::input::Input;
use crate::parse::args::{consume_if_some, parse_arg_or_arg1, parse_required};
use rstream::Integer;
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_input(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RsErr> {
    match args.peek() {
        Some(input) => {
            if input.eq_ignore_ascii_case("in") {
                args.next(); // 消耗`in`
                Ok(Input::new_std_in())
            } else if input.eq_ignore_ascii_case("file") {
                parse_file(args)
            } else if input.eq_ignore_ascii_case("of") {
                parse_of(args)
            } else if input.eq_ignore_ascii_case("range") {
                parse_range(args)
            } else if input.eq_ignore_ascii_case("iter") {
                parse_iter(args)
            } else if input.eq_ignore_ascii_case("repeat") {
                parse_repeat(args)
            } else {
                Ok(Input::new_std_in())
            }
        }
        None => Ok(Input::new_std_in()),
    }
}

fn parse_file(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RsErr> {
    args.next(); // 消耗`file`
    Ok(Input::new_file(parse_arg_or_arg1(args, "file", "file")?))
}

fn parse_of(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RsErr> {
    args.next(); // 消耗`of`
    Ok(Input::new_of(parse_arg_or_arg1(args, "of", "text")?))
}

fn parse_range(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RsErr> {
    args.next(); // 消耗`range`
    let start = parse_required(args, "range", "start")?;
    let end = parse_required(args, "range", "end")?;
    let step = consume_if_some(args, |value| value.parse::<Integer>().ok());
    Ok(Input::new_range(start, end, step))
}

fn parse_iter(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RsErr> {
    args.next(); // 消耗`iter`
    let seed = parse_required(args, "iter", "seed")?;
    let step = consume_if_some(args, |value| value.parse::<Integer>().ok());
    Ok(Input::new_iter(seed, step))
}

fn parse_repeat(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Input, RsErr> {
    args.next(); // 消耗`repeat`
    match args.next() {
        Some(value) => Ok(Input::new_repeat(value)),
        None => Err(RsErr::MissingArg { cmd: "repeat", arg: "value" }),
    }
}
