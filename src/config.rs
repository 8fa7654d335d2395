/// 全局配置，只能出现在所有参数之前。
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Config {
    /// 帮助 `-h`
    Help,
    /// 版本 `-V`
    Version,
    /// 打印流水线信息 `-v`
    Verbose,
    /// 仅解析，不执行 `-d`
    DryRun,
}

impl Config {
    pub(crate) fn from_flag(flag: &str) -> Option<Config> {
        match flag {
            "-h" => Some(Config::Help),
            "-V" => Some(Config::Version),
            "-v" => Some(Config::Verbose),
            "-d" => Some(Config::DryRun),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Eq, PartialEq)]
pub(crate) struct Configs(Vec<Config>);

impl Configs {
    pub(crate) fn new(configs: Vec<Config>) -> Configs {
        Configs(configs)
    }

    pub(crate) fn has(&self, config: Config) -> bool {
        self.0.contains(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(Config::from_flag("-h"), Some(Config::Help));
        assert_eq!(Config::from_flag("-d"), Some(Config::DryRun));
        assert_eq!(Config::from_flag("-x"), None);
        assert_eq!(Config::from_flag("of"), None);
    }
}
