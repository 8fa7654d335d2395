use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum StreamErr {
    #[error("[Unbounded] `{op}` would not terminate: stream source is infinite, call take(n) to bound it")]
    Unbounded { op: &'static str },
}
