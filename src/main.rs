use crate::condition::Select;
use crate::config::Config;
use crate::err::RsErr;
use crate::input::Input;
use crate::item::Item;
use crate::op::Op;
use crate::output::Output;
use itertools::Itertools;
use rstream::Stream;

mod condition;
mod config;
mod err;
mod input;
mod item;
mod op;
mod output;
mod parse;
mod print;

pub(crate) type Pipe = Stream<Item>;

pub(crate) type PipeRes = Result<Pipe, RsErr>;

const USAGE: &str = "\
用法：rs [<config>]... [<input>] [<op>]... [<output>]
    <config>    全局配置，只能出现在开头：
                    -h[ <cmd>]  打印帮助，可以指定命令名，`-h cond`打印条件语法
                    -V          打印版本
                    -v          执行前打印解析后的输入、操作和输出
                    -d          仅解析，不执行
    <input>     输入，未指定时从标准输入读取
    <op>        操作，按顺序追加到流水线
    <output>    输出，未指定时输出到标准输出";

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), RsErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse::args::parse_configs(&mut args);
    if configs.has(Config::Help) {
        print_help(&args.join(" "));
        return Ok(());
    }
    if configs.has(Config::Version) {
        println!("rs {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let (input, ops, output) = parse::args::parse(args)?;
    if configs.has(Config::Verbose) {
        crate::println_info!("Input:");
        crate::println_info!("    {:?}", input);
        crate::println_info!("Op:");
        crate::println_info!("{}", ops.iter().map(|op| format!("    {:?}", op)).join("\n"));
        crate::println_info!("Output:");
        crate::println_info!("    {:?}", output);
    }
    if configs.has(Config::DryRun) {
        return Ok(());
    }
    let mut pipe = input.try_into_pipe()?;
    for op in ops {
        pipe = op.wrap(pipe);
    }
    if configs.has(Config::Verbose) {
        crate::println_info!("Stream:");
        crate::println_info!("    {:?}", pipe);
    }
    output.handle(pipe)
}

fn print_help(topic: &str) {
    if topic.is_empty() {
        println!("{USAGE}");
        print_section("输入", Input::all_help());
        print_section("操作", Op::all_help());
        print_section("输出", Output::all_help());
    } else if topic.eq_ignore_ascii_case("cond") {
        print_section("条件", Select::all_help());
    } else if let Some(help) =
        Input::find_help(topic).or_else(|| Op::find_help(topic)).or_else(|| Output::find_help(topic))
    {
        println!("{help}");
    } else {
        crate::println_err!("Unknown cmd `{topic}`, use `rs -h` to list all cmds");
    }
}

fn print_section(title: &str, helps: &[(&str, &str)]) {
    println!();
    println!("{title}：");
    for (_, help) in helps {
        for line in help.lines() {
            println!("    {line}");
        }
    }
}
