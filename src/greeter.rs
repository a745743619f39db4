use std::{
    env::args_os,
    ffi::OsString,
    io::{self, Write},
};

use anyhow::Context as _;

use crate::{
    env::{EnvSource, ProcessEnv},
    render::{quoted, quoted_list},
};

pub const GREETING: &str = "Hello from pytron-example!";

pub const CACHE_DIR_VAR: &str = "UV_CACHE_DIR";
pub const RAISE_VAR: &str = "EXAMPLE_RAISE";

pub const RAISE_MESSAGE: &str = "I am raised from within main.py";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Aborts when `EXAMPLE_RAISE` is set.
    Raising,
    /// Never reads `EXAMPLE_RAISE`, always succeeds.
    Quiet,
}

/// Prints the greeting, the recognized cache dir (if any) and `args`.
///
/// Both variables are read before anything is written. With
/// [`Variant::Raising`] and `EXAMPLE_RAISE` set, the output is still written
/// in full and then [`RAISE_MESSAGE`] is returned as an error.
pub fn greet(
    variant: Variant,
    args: &[OsString],
    env: &impl EnvSource,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let cache_dir = env.truthy(CACHE_DIR_VAR);
    let raise = match variant {
        Variant::Raising => env.truthy(RAISE_VAR),
        Variant::Quiet => None,
    };

    write_report(out, cache_dir.as_ref(), args).context("Failed to write to stdout")?;

    if let Some(raise) = raise {
        tracing::debug!("{} is set to {:?}, aborting", RAISE_VAR, raise);
        anyhow::bail!(RAISE_MESSAGE);
    }
    Ok(())
}

fn write_report(
    out: &mut impl Write,
    cache_dir: Option<&OsString>,
    args: &[OsString],
) -> io::Result<()> {
    writeln!(out, "{}", GREETING)?;
    if let Some(cache_dir) = cache_dir {
        writeln!(out, "I've recognized {} ={}", CACHE_DIR_VAR, quoted(cache_dir))?;
    }
    writeln!(out, "Arguments received: {}", quoted_list(args))?;
    out.flush()
}

/// Entry point of the greeter binaries.
///
/// Arguments are taken straight from the process so that `--`, `--help` and
/// friends are echoed like any other argument.
pub fn cli_main(variant: Variant) -> anyhow::Result<()> {
    let args: Vec<OsString> = args_os().skip(1).collect();
    greet(variant, &args, &ProcessEnv, &mut io::stdout().lock())
}
