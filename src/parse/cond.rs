use crate::condition::{Cond, Select};
use crate::err::RsErr;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, space0, space1, usize};
use nom::combinator::{eof, map, opt, rest, value, verify};
use nom::number::complete::double;
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};

type ParserError<'a> = nom::error::Error<&'a str>;

/// 正则需要在解析完成后编译，编译失败时给出正则自身的错误信息。
#[derive(Debug, Clone)]
enum Token<'a> {
    Select(Select),
    Reg(&'a str),
}

/// 解析单个参数形式的条件：`[!]<select>`。
pub(crate) fn parse_cond(cond: &str) -> Result<Cond, RsErr> {
    match terminated(parse_token, (space0, eof)).parse(cond) {
        Ok((_, (not, Token::Select(select)))) => Ok(Cond::new(select, not)),
        Ok((_, (not, Token::Reg(reg)))) => Ok(Cond::new(Select::new_reg_match(reg)?, not)),
        Err(err) => Err(RsErr::ParseCondErr { cond: cond.to_string(), error: err.to_string() }),
    }
}

fn parse_token(input: &str) -> IResult<&str, (bool, Token<'_>), ParserError<'_>> {
    (preceded(space0, map(opt(char('!')), |not| not.is_some())), preceded(space0, parse_select)).parse(input)
}

fn parse_select(input: &str) -> IResult<&str, Token<'_>, ParserError<'_>> {
    alt((
        preceded(
            (tag_no_case("len"), space1),
            alt((
                map(parse_range(usize), |(min, max)| Token::Select(Select::new_text_len_range(min, max))),
                map(usize, |spec| Token::Select(Select::TextLenSpec { spec })),
            )),
        ),
        preceded(
            (tag_no_case("num"), space1),
            alt((
                value(Token::Select(Select::Num { integer: Some(true) }), tag_no_case("integer")),
                value(Token::Select(Select::Num { integer: Some(false) }), tag_no_case("float")),
                map(parse_range(double), |(min, max)| Token::Select(Select::new_num_range(min, max))),
                map(double, |spec| Token::Select(Select::NumSpec { spec })),
            )),
        ),
        value(Token::Select(Select::Num { integer: None }), tag_no_case("num")),
        map(preceded((tag_no_case("reg"), space1), rest), Token::Reg),
    ))
    .parse(input)
}

/// `[<min>],[<max>]`，至少指定其一。
fn parse_range<'a, T, F>(bound: F) -> impl Parser<&'a str, Output = (Option<T>, Option<T>), Error = ParserError<'a>>
where
    F: Parser<&'a str, Output = T, Error = ParserError<'a>> + Clone,
{
    map(
        verify((opt(bound.clone()), char(','), opt(bound)), |(min, _, max): &(Option<T>, char, Option<T>)| {
            min.is_some() || max.is_some()
        }),
        |(min, _, max)| (min, max),
    )
}
