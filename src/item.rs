use rstream::Integer;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// 流水线中的元素，数值输入产生整数，文本输入产生字符串。
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub(crate) enum Item {
    String(String),
    Integer(Integer),
}

impl Item {
    pub(crate) fn text(&self) -> Cow<'_, str> {
        match self {
            Item::String(string) => Cow::Borrowed(string),
            Item::Integer(integer) => Cow::Owned(integer.to_string()),
        }
    }

    /// 整数值，字符串尝试按整数解析。
    pub(crate) fn as_integer(&self) -> Option<Integer> {
        match self {
            Item::String(string) => string.parse().ok(),
            Item::Integer(integer) => Some(*integer),
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::String(string) => f.write_str(string),
            Item::Integer(integer) => write!(f, "{integer}"),
        }
    }
}
