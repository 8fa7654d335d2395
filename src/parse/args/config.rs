use crate::config::{Config, Configs};
use std::iter::Peekable;

/// 只解析参数开头连续出现的配置，遇到第一个非配置参数停止。
pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Configs {
    let mut configs = Vec::new();
    while let Some(config) = args.peek().and_then(|arg| Config::from_flag(arg)) {
        args.next();
        configs.push(config);
    }
    Configs::new(configs)
}
