use std::{
    ffi::OsString,
    io::{self, Write},
};

use anyhow::Context as _;
use clap::Parser;

pub const DEFAULT_EXIT_CODE: i32 = 42;

#[derive(Debug, Parser)]
#[command(
    name = "exit-code-custom",
    disable_help_flag = true,
    disable_version_flag = true,
    styles = clap_cargo::style::CLAP_STYLING
)]
pub struct ExitCodeOpt {
    /// Status to print and exit with.
    #[arg(
        allow_hyphen_values = true,
        value_parser = parse_exit_code,
        default_value_t = DEFAULT_EXIT_CODE
    )]
    pub code: i32,
    /// Anything after the status is accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<OsString>,
}

/// Base-10 integer, surrounding whitespace and a leading sign allowed.
fn parse_exit_code(s: &str) -> Result<i32, String> {
    s.trim().parse::<i32>().map_err(|err| err.to_string())
}

/// Prints `Custom exit code: <code>` and returns the code to exit with.
pub fn exit_code(opt: &ExitCodeOpt, out: &mut impl Write) -> anyhow::Result<i32> {
    if !opt.rest.is_empty() {
        tracing::trace!("ignoring extra arguments: {:?}", opt.rest);
    }
    writeln!(out, "Custom exit code: {}", opt.code)
        .and_then(|()| out.flush())
        .context("Failed to write to stdout")?;
    Ok(opt.code)
}

/// Prints `Exit code: <code>` and returns `code` unchanged.
pub fn fixed_exit_code(code: i32, out: &mut impl Write) -> anyhow::Result<i32> {
    writeln!(out, "Exit code: {}", code)
        .and_then(|()| out.flush())
        .context("Failed to write to stdout")?;
    Ok(code)
}

/// Entry point of `exit-code-custom`.
///
/// Malformed input is reported by clap on stderr and exits with status 2.
/// The returned code should go to [`std::process::exit`] as is, leaving any
/// truncation to the platform.
pub fn cli_main() -> anyhow::Result<i32> {
    let opt = ExitCodeOpt::parse();
    tracing::debug!("exit code: {}", opt.code);
    exit_code(&opt, &mut io::stdout().lock())
}

/// Entry point of the fixed-status fixtures. Arguments are ignored.
pub fn fixed_cli_main(code: i32) -> anyhow::Result<i32> {
    fixed_exit_code(code, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ExitCodeOpt, clap::Error> {
        ExitCodeOpt::try_parse_from(
            std::iter::once("exit-code-custom").chain(args.iter().copied()),
        )
    }

    #[test_log::test]
    fn test_default_code() {
        let opt = parse(&[]).unwrap();
        assert_eq!(opt.code, DEFAULT_EXIT_CODE);

        let mut out = Vec::new();
        assert_eq!(exit_code(&opt, &mut out).unwrap(), 42);
        assert_eq!(String::from_utf8(out).unwrap(), "Custom exit code: 42\n");
    }

    #[test_log::test]
    fn test_explicit_code() {
        let opt = parse(&["7"]).unwrap();
        let mut out = Vec::new();
        assert_eq!(exit_code(&opt, &mut out).unwrap(), 7);
        assert_eq!(String::from_utf8(out).unwrap(), "Custom exit code: 7\n");
    }

    #[test_log::test]
    fn test_out_of_byte_range_code_is_kept() {
        assert_eq!(parse(&["300"]).unwrap().code, 300);
        assert_eq!(parse(&["-1"]).unwrap().code, -1);
    }

    #[test_log::test]
    fn test_lenient_integer_syntax() {
        assert_eq!(parse(&[" 12 "]).unwrap().code, 12);
        assert_eq!(parse(&["+5"]).unwrap().code, 5);
    }

    #[test_log::test]
    fn test_extra_args_are_ignored() {
        let opt = parse(&["3", "--verbose", "x"]).unwrap();
        assert_eq!(opt.code, 3);
        assert_eq!(
            opt.rest,
            vec![OsString::from("--verbose"), OsString::from("x")]
        );
    }

    #[test_log::test]
    fn test_malformed_code() {
        for bad in ["abc", "4.2", "", "99999999999", "0x10"] {
            let err = parse(&[bad]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{bad:?}");
        }
    }

    #[test_log::test]
    fn test_fixed_exit_code() {
        let mut out = Vec::new();
        assert_eq!(fixed_exit_code(1, &mut out).unwrap(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), "Exit code: 1\n");
    }
}
