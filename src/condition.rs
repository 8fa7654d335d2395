use crate::err::RsErr;
use crate::item::Item;
use cmd_help::CmdHelp;
use regex::Regex;
use rstream::Integer;

pub(crate) type Float = f64;

/// 条件
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cond {
    Yes(Select),
    No(Select),
}

impl Cond {
    pub(crate) fn new(select: Select, not: bool) -> Cond {
        if not { Cond::No(select) } else { Cond::Yes(select) }
    }

    pub(crate) fn test(&self, item: &Item) -> bool {
        match self {
            Cond::Yes(select) => select.select(item),
            Cond::No(select) => !select.select(item),
        }
    }
}

/// 选择
#[derive(Debug, Clone, CmdHelp)]
pub(crate) enum Select {
    /// len <min>,<max>
    ///     按照字符串长度范围选择，最小值和最大值至少指定其一，范围包含两端。
    ///     整数按其十进制文本计算长度。
    ///     例如：
    ///         'len 2,'
    ///         'len 2,5'
    ///         '!len ,5'
    TextLenRange { min: Option<usize>, max: Option<usize> },
    /// len <len>
    ///     按照字符串特定长度选择。
    ///     例如：
    ///         'len 3'
    ///         '!len 3'
    TextLenSpec { spec: usize },
    /// num <min>,<max>
    ///     按照数值范围选择，最小值和最大值至少指定其一，范围包含两端。
    ///     无法解析为有限数值的数据不选择。
    ///     例如：
    ///         'num 2,5'
    ///         'num -2.1,'
    ///         '!num ,5.3'
    NumRange { min: Option<Float>, max: Option<Float> },
    /// num <spec>
    ///     按照数值特定值选择。
    ///     例如：
    ///         'num 3'
    ///         'num 3.5'
    NumSpec { spec: Float },
    /// num[ integer|float]
    ///     按照整数或浮点数选择，不指定时选择全部数值。
    ///     例如：
    ///         num
    ///         'num integer'
    ///         '!num float'
    Num { integer: Option<bool> },
    /// reg <exp>
    ///     选择完整匹配给定正则表达式的数据。
    ///     <exp>   正则表达式，必选。
    ///     例如：
    ///         'reg \d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}'
    ///         '!reg [a-z]+'
    RegMatch { regex: Regex },
}

impl PartialEq for Select {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Select::TextLenRange { min: l_min, max: l_max }, Select::TextLenRange { min: r_min, max: r_max }) => {
                l_min == r_min && l_max == r_max
            }
            (Select::TextLenSpec { spec: l }, Select::TextLenSpec { spec: r }) => l == r,
            (Select::NumRange { min: l_min, max: l_max }, Select::NumRange { min: r_min, max: r_max }) => {
                l_min == r_min && l_max == r_max
            }
            (Select::NumSpec { spec: l }, Select::NumSpec { spec: r }) => l == r,
            (Select::Num { integer: l }, Select::Num { integer: r }) => l == r,
            // Regex 比较模式字符串
            (Select::RegMatch { regex: l }, Select::RegMatch { regex: r }) => l.as_str() == r.as_str(),
            _ => false,
        }
    }
}

impl Select {
    pub(crate) fn new_text_len_range(min: Option<usize>, max: Option<usize>) -> Select {
        Select::TextLenRange { min, max }
    }
    pub(crate) fn new_num_range(min: Option<Float>, max: Option<Float>) -> Select {
        Select::NumRange { min, max }
    }
    pub(crate) fn new_reg_match(regex: &str) -> Result<Select, RsErr> {
        let reg = format!(r"\A(?:{})\z", regex);
        Regex::new(&reg)
            .map(|regex| Select::RegMatch { regex })
            .map_err(|err| RsErr::ParseRegexErr { reg: regex.to_string(), err: err.to_string() })
    }

    #[cfg(test)]
    pub(crate) fn yes(self) -> Cond {
        Cond::Yes(self)
    }

    #[cfg(test)]
    pub(crate) fn no(self) -> Cond {
        Cond::No(self)
    }

    fn select(&self, item: &Item) -> bool {
        match self {
            Select::TextLenRange { min, max } => {
                let len = item.text().chars().count();
                min.is_none_or(|min| len >= min) && max.is_none_or(|max| len <= max)
            }
            Select::TextLenSpec { spec } => item.text().chars().count() == *spec,
            Select::NumRange { min, max } => {
                as_float(item).is_some_and(|v| min.is_none_or(|min| v >= min) && max.is_none_or(|max| v <= max))
            }
            Select::NumSpec { spec } => as_float(item).is_some_and(|v| v == *spec),
            Select::Num { integer } => match (integer, item) {
                (Some(true), Item::Integer(_)) => true,
                (Some(false), Item::Integer(_)) => false,
                (Some(true), Item::String(string)) => string.parse::<Integer>().is_ok(),
                (Some(false), Item::String(string)) => {
                    string.parse::<Integer>().is_err() && string.parse::<Float>().is_ok_and(Float::is_finite)
                }
                (None, _) => as_float(item).is_some(),
            },
            Select::RegMatch { regex } => regex.is_match(&item.text()),
        }
    }
}

/// 有限数值，`NaN`和无穷不算数值。
fn as_float(item: &Item) -> Option<Float> {
    match item {
        Item::Integer(integer) => Some(*integer as Float),
        Item::String(string) => string.parse::<Float>().ok().filter(|v| v.is_finite()),
    }
}
