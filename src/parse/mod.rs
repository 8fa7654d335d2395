pub(crate) mod args;
mod cond;

pub(crate) use cond::parse_cond;
