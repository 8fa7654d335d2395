use crate::err::RsErr;
use crate::op::Op;
use crate::parse::args::parse_required;
use crate::parse::parse_cond;
use std::iter::Peekable;

pub(in crate::parse::args) fn parse_ops(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Vec<Op>, RsErr> {
    let mut ops = vec![];
    while let Some(op) = parse_op(args)? {
        ops.push(op);
    }
    Ok(ops)
}

fn parse_op(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RsErr> {
    match args.peek() {
        Some(cmd) => {
            if cmd.eq_ignore_ascii_case("peek") {
                args.next();
                Ok(Some(Op::new_peek()))
            } else if cmd.eq_ignore_ascii_case("filter") {
                parse_filter(args)
            } else if cmd.eq_ignore_ascii_case("skip") {
                args.next();
                Ok(Some(Op::new_skip(parse_required(args, "skip", "count")?)))
            } else if cmd.eq_ignore_ascii_case("take") {
                args.next();
                Ok(Some(Op::new_take(parse_required(args, "take", "count")?)))
            } else {
                Ok(None)
            }
        }
        None => Ok(None),
    }
}

fn parse_filter(args: &mut Peekable<impl Iterator<Item = String>>) -> Result<Option<Op>, RsErr> {
    args.next();
    match args.next() {
        Some(cond) => Ok(Some(Op::new_filter(parse_cond(&cond)?))),
        None => Err(RsErr::MissingArg { cmd: "filter", arg: "cond" }),
    }
}
