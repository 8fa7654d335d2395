use crate::err::RsErr;
use crate::item::Item;
use crate::{Pipe, PipeRes};
use cmd_help::CmdHelp;
use rstream::{Integer, Stream};
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Input {
    /// in          从标准输入按行读取。
    ///             未指定输入时的默认输入。
    StdIn,
    /// file        从文件按行读取，多个文件依次读取。
    ///             file <file>|[ <file>[ <file>][...] ]
    ///                 <file>  文件路径，至少指定一个。
    ///             例如：
    ///                 file input.txt
    ///                 file [ input1.txt input2.txt ]
    File { files: Vec<String> },
    /// of          使用字面值作为输入。
    ///             of <text>|[ <text>[ <text>][...] ]
    ///                 <text>  字面值，至少指定一个，单独的中括号需要转义为'\['和'\]'。
    ///             例如：
    ///                 of line
    ///                 of [ line1 "line 2" \[ ]
    Of { values: Vec<String> },
    /// range       生成[start, end)范围内的整数。
    ///             range <start> <end>[ <step>]
    ///                 <start> 起始值，包含。
    ///                 <end>   结束值，不包含。
    ///                 <step>  步长，可选，默认为1；为0或与范围方向相反时无数据生成。
    ///             例如：
    ///                 range 0 5       生成：0 1 2 3 4
    ///                 range 0 10 3    生成：0 3 6 9
    ///                 range 10 0 -4   生成：10 6 2
    Range { start: Integer, end: Integer, step: Integer },
    /// iter        从种子开始按步长生成无限整数序列，必须配合`take`使用。
    ///             iter <seed>[ <step>]
    ///                 <seed>  起始值。
    ///                 <step>  步长，可选，默认为1。
    ///             例如：
    ///                 iter 1 take 3           生成：1 2 3
    ///                 iter 0 -2 take 3        生成：0 -2 -4
    Iter { seed: Integer, step: Integer },
    /// repeat      无限重复字面值，必须配合`take`使用。
    ///             repeat <value>
    ///             例如：
    ///                 repeat abc take 2       生成：abc abc
    Repeat { value: String },
}

impl Input {
    pub(crate) fn new_std_in() -> Input {
        Input::StdIn
    }
    pub(crate) fn new_file(files: Vec<String>) -> Input {
        Input::File { files }
    }
    pub(crate) fn new_of(values: Vec<String>) -> Input {
        Input::Of { values }
    }
    pub(crate) fn new_range(start: Integer, end: Integer, step: Option<Integer>) -> Input {
        Input::Range { start, end, step: step.unwrap_or(1) }
    }
    pub(crate) fn new_iter(seed: Integer, step: Option<Integer>) -> Input {
        Input::Iter { seed, step: step.unwrap_or(1) }
    }
    pub(crate) fn new_repeat(value: String) -> Input {
        Input::Repeat { value }
    }

    pub(crate) fn try_into_pipe(self) -> PipeRes {
        match self {
            Input::StdIn => Ok(Pipe::of(read_lines(io::stdin().lock(), STD_IN.to_string()))),
            Input::File { files } => open_files(files),
            Input::Of { values } => Ok(Stream::of(values.into_iter().map(Item::String))),
            Input::Range { start, end, step } => Ok(Stream::range_by(start, end, step).map(Item::Integer)),
            Input::Iter { seed, step } => {
                Ok(Stream::iterate(seed, move |prev| prev.saturating_add(step)).map(Item::Integer))
            }
            Input::Repeat { value } => Ok(Stream::repeat(Item::String(value))),
        }
    }
}

const STD_IN: &str = "<stdin>";

/// 所有文件先全部打开，任何一个打开失败都直接返回错误。
fn open_files(files: Vec<String>) -> PipeRes {
    let mut readers = Vec::with_capacity(files.len());
    for file in files {
        match File::open(&file) {
            Ok(fin) => readers.push((BufReader::new(fin), file)),
            Err(err) => return Err(RsErr::OpenFileErr { file, err: err.to_string() }),
        }
    }
    Ok(Pipe::of(readers.into_iter().flat_map(|(reader, file)| read_lines(reader, file))))
}

/// 按行读取，读取过程中的错误无法经由流传递，直接终止进程。
fn read_lines(reader: impl BufRead + 'static, input: String) -> impl Iterator<Item = Item> + 'static {
    reader.lines().enumerate().map(move |(line_no, line)| match to_item(&input, line_no + 1, line) {
        Ok(item) => item,
        Err(err) => err.termination(),
    })
}

fn to_item(input: &str, line_no: usize, line: io::Result<String>) -> Result<Item, RsErr> {
    line.map(Item::String).map_err(|err| RsErr::ReadInputErr { input: input.to_string(), line_no, err: err.to_string() })
}
