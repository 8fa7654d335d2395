use crate::err::RsErr;
use crate::item::Item;
use crate::Pipe;
use cmd_help::CmdHelp;
use itertools::Itertools;
use rstream::array::{self, Order};
use rstream::collection::{collect_by, Collection};
use rstream::stream::collector::{counting, joining, to_list, to_set};
use rstream::Integer;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

#[derive(Debug, Eq, PartialEq, CmdHelp)]
pub(crate) enum Output {
    /// to out      逐行输出到标准输出。
    ///             未指定输出时的默认输出。
    StdOut,
    /// to file     逐行输出到文件。
    ///             to file <file>[ append][ lf|crlf]
    ///                 <file>  文件路径，必选。
    ///                 append  追加输出而不是覆盖，可选，如果未指定则覆盖源文件。
    ///                 lf|crlf 指定换行符为'LF'或'CRLF'，可选，如果未指定则默认使用'LF'。
    ///             例如：
    ///                 to file out.txt
    ///                 to file out.txt append crlf
    File { file: String, append: bool, crlf: Option<bool> },
    /// set         去重后排序输出，整数排在字符串之后。
    Set,
    /// count       输出值的个数。
    Count,
    /// sum         输出所有整数值的和，无法解析为整数的值忽略。
    Sum,
    /// first       输出第一个值，没有任何值时输出默认值。
    ///             只拉取第一个值，可以直接用于无限输入。
    ///             first <default>
    ///             例如：
    ///                 iter 1 filter 'num 100,' first none
    First { default: String },
    /// join        使用分隔符拼接为一行输出。
    ///             join <delimiter>[ <prefix>[ <postfix>]]
    ///             例如：
    ///                 join ,
    ///                 join , [ ]
    Join { delimiter: String, prefix: Option<String>, postfix: Option<String> },
    /// last        输出最后一个值，没有任何值时输出默认值。
    ///             last <default>
    Last { default: String },
    /// sort        排序后输出，整数排在字符串之后，相等的值保持原有顺序。
    ///             sort[ desc]
    ///                 desc    倒序，可选。
    Sort { desc: bool },
    /// chunk       按固定个数分块，每块以空格拼接为一行输出，最后一块可能不足<size>个。
    ///             每块最多512个值。
    ///             chunk <size>
    ///             例如：
    ///                 range 0 7 chunk 3       输出三行：'0 1 2' '3 4 5' '6'
    Chunk { size: usize },
    /// distinct    按文本去重，保留首次出现的值并按出现顺序输出。
    ///             整数和与之文本相同的字符串视为同一个值。
    Distinct,
    /// diff        输出只出现在输入或只出现在给定值中的值，按文本比较并去重。
    ///             先输出输入独有的值，再输出给定值独有的值。
    ///             diff <text>|[ <text>[ <text>][...] ]
    ///             例如：
    ///                 range 1 5 diff [ 3 4 5 6 ]      输出：1 2 5 6
    Diff { values: Vec<String> },
}

impl Output {
    pub(crate) fn new_std_out() -> Self {
        Output::StdOut
    }
    pub(crate) fn new_file(file: String, append: bool, crlf: Option<bool>) -> Self {
        Output::File { file, append, crlf }
    }
    pub(crate) fn new_set() -> Self {
        Output::Set
    }
    pub(crate) fn new_count() -> Self {
        Output::Count
    }
    pub(crate) fn new_sum() -> Self {
        Output::Sum
    }
    pub(crate) fn new_first(default: String) -> Self {
        Output::First { default }
    }
    pub(crate) fn new_join(delimiter: String, prefix: Option<String>, postfix: Option<String>) -> Self {
        Output::Join { delimiter, prefix, postfix }
    }

    pub(crate) fn new_last(default: String) -> Self {
        Output::Last { default }
    }
    pub(crate) fn new_sort(desc: bool) -> Self {
        Output::Sort { desc }
    }
    pub(crate) fn new_chunk(size: usize) -> Self {
        Output::Chunk { size }
    }
    pub(crate) fn new_distinct() -> Self {
        Output::Distinct
    }
    pub(crate) fn new_diff(values: Vec<String>) -> Self {
        Output::Diff { values }
    }

    pub(crate) fn handle(self, mut pipe: Pipe) -> Result<(), RsErr> {
        match self {
            Output::StdOut => pipe.for_each(|item| println!("{item}"))?,
            Output::File { file, append, crlf } => write_to_file(pipe, file, append, crlf)?,
            Output::Set => {
                for item in pipe.collect(to_set)?.into_iter().sorted() {
                    println!("{item}");
                }
            }
            Output::Count => println!("{}", pipe.collect(counting)?),
            Output::Sum => println!("{}", sum(&mut pipe)?),
            Output::First { default } => println!("{}", pipe.first_or(Item::String(default))),
            Output::Join { delimiter, prefix, postfix } => {
                let joined = pipe.collect(joining(delimiter))?;
                println!("{}{joined}{}", prefix.unwrap_or_default(), postfix.unwrap_or_default());
            }
            Output::Last { default } => {
                let list = pipe.collect(to_list)?;
                println!("{}", array::last(&list).map_or(default, Item::to_string));
            }
            Output::Sort { desc } => {
                let order = if desc { Order::Desc } else { Order::Asc };
                print_lines(array::sort(&pipe.collect(to_list)?, order));
            }
            Output::Chunk { size } => {
                for chunk in array::chunk(&pipe.collect(to_list)?, size) {
                    println!("{}", chunk.iter().join(" "));
                }
            }
            Output::Distinct => print_lines(distinct(pipe.collect(to_list)?)),
            Output::Diff { values } => print_lines(diff(pipe.collect(to_list)?, values)),
        }
        Ok(())
    }
}

fn print_lines(items: impl IntoIterator<Item = impl Display>) {
    for item in items {
        println!("{item}");
    }
}

fn distinct(items: Vec<Item>) -> Collection<String, Item> {
    collect_by(items, Item::to_string)
}

fn diff(items: Vec<Item>, values: Vec<String>) -> Vec<String> {
    array::diff(&items.iter().map(Item::to_string).collect::<Vec<_>>(), &values)
}

fn sum(pipe: &mut Pipe) -> Result<Integer, RsErr> {
    Ok(pipe.map_reduce(0, |item| item.as_integer(), |acc: Integer, value| value.map_or(acc, |v| acc.saturating_add(v)))?)
}

fn write_to_file(mut pipe: Pipe, file: String, append: bool, crlf: Option<bool>) -> Result<(), RsErr> {
    let fout = OpenOptions::new()
        .write(true)
        .truncate(!append)
        .append(append)
        .create(true)
        .open(&file)
        .map_err(|err| RsErr::OpenFileErr { file: file.clone(), err: err.to_string() })?;
    let mut writer = BufWriter::new(fout);
    let ending = if crlf.unwrap_or(false) { "\r\n" } else { "\n" };
    pipe.try_for_each(|item| {
        write!(writer, "{item}{ending}").map_err(|err| RsErr::WriteToFileErr {
            file: file.clone(),
            item: item.to_string(),
            err: err.to_string(),
        })
    })?;
    writer.flush().map_err(|err| RsErr::WriteToFileErr { file, item: String::new(), err: err.to_string() })
}
