use rstream::StreamErr;
use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum RsErr {
    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Missing Arg] At least one value for argument `{arg}` is required for cmd `{cmd}`")]
    ArgNotEnough { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Closing bracket (`]`) for argument `{arg}` is required for cmd `{cmd}`")]
    UnclosingMultiArg { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unexpected closing bracket of argument `{arg}` for cmd `{cmd}`")]
    UnexpectedClosingBracket { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Condition] Invalid condition `{cond}`, error: {error}")]
    ParseCondErr { cond: String, error: String },

    #[error("[Condition] Invalid regex `{reg}`, error: {err}")]
    ParseRegexErr { reg: String, err: String },

    #[error("[Input] Open input file `{file}` error: {err}")]
    OpenFileErr { file: String, err: String },

    #[error("[Input] Read line `{line_no}` of input `{input}` error: {err}")]
    ReadInputErr { input: String, line_no: usize, err: String },

    #[error("[Output] Write item `{item}` to file `{file}` error: {err}")]
    WriteToFileErr { file: String, item: String, err: String },

    #[error(transparent)]
    Stream(#[from] StreamErr),
}

impl Termination for RsErr {
    fn report(self) -> ExitCode {
        crate::println_err!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl RsErr {
    pub(crate) fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        match self {
            RsErr::ArgParseErr { .. } => 1,
            RsErr::MissingArg { .. } => 2,
            RsErr::ArgNotEnough { .. } => 3,
            RsErr::UnclosingMultiArg { .. } => 4,
            RsErr::UnexpectedClosingBracket { .. } => 5,
            RsErr::UnknownArgs { .. } => 6,
            RsErr::ParseCondErr { .. } => 7,
            RsErr::ParseRegexErr { .. } => 8,
            RsErr::OpenFileErr { .. } => 9,
            RsErr::ReadInputErr { .. } => 10,
            RsErr::WriteToFileErr { .. } => 11,
            RsErr::Stream(StreamErr::Unbounded { .. }) => 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_err_is_transparent() {
        let err = RsErr::from(StreamErr::Unbounded { op: "collect" });
        assert_eq!(err.to_string(), StreamErr::Unbounded { op: "collect" }.to_string());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let errs = [
            RsErr::ArgParseErr { cmd: "", arg: "", arg_value: String::new(), error: String::new() },
            RsErr::MissingArg { cmd: "", arg: "" },
            RsErr::ArgNotEnough { cmd: "", arg: "" },
            RsErr::UnclosingMultiArg { cmd: "", arg: "" },
            RsErr::UnexpectedClosingBracket { cmd: "", arg: "" },
            RsErr::UnknownArgs { args: vec![] },
            RsErr::ParseCondErr { cond: String::new(), error: String::new() },
            RsErr::ParseRegexErr { reg: String::new(), err: String::new() },
            RsErr::OpenFileErr { file: String::new(), err: String::new() },
            RsErr::ReadInputErr { input: String::new(), line_no: 0, err: String::new() },
            RsErr::WriteToFileErr { file: String::new(), item: String::new(), err: String::new() },
            RsErr::Stream(StreamErr::Unbounded { op: "" }),
        ];
        let mut codes = errs.iter().map(RsErr::exit_code).collect::<Vec<_>>();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errs.len());
    }
}
