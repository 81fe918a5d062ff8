use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub const USAGE: &str = "\
Print the sum of the decimal digits of each NUMBER.

USAGE:
    digitsum [OPTIONS] [<NUMBER>...]

With no NUMBER, 54321 is used.

OPTIONS:
    -r, --root              Print the digital root instead of the digit sum.
    -j, --json              Print one JSON report per line.
        --reject-negative   Fail on negative numbers instead of ignoring the sign.
    -c, --config <PATH>     Read configuration from PATH (default: digitsum.toml).
    -v, --verbose           Log at debug level.
    -h, --help              Print this message.
";

#[derive(Debug, Default)]
pub struct ArgParser {
  pub verbose: bool,
  pub help: bool,
  pub root: bool,
  pub json: bool,
  pub reject_negative: bool,
  pub config: Option<PathBuf>,
  pub numbers: Vec<String>,
}

impl ArgParser {
  pub fn new() -> anyhow::Result<Self> {
    Self::from_args(std::env::args_os().skip(1))
  }

  pub fn from_args<I>(args: I) -> anyhow::Result<Self>
  where
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString>,
  {
    Self::parse(Parser::from_args(args))
  }

  fn parse(mut p: Parser) -> anyhow::Result<Self> {
    let mut args = Self::default();

    while let Some(arg) = p.next()? {
      match arg {
        // negative numbers look like a cluster of short flags
        Arg::Short(c) if c.is_ascii_digit() => {
          let mut number = format!("-{c}");
          if let Some(rest) = p.optional_value() {
            number.push_str(&rest.string()?);
          }
          args.numbers.push(number);
        }
        Arg::Short('v') | Arg::Long("verbose") => {
          if args.verbose {
            anyhow::bail!("--verbose was used more than once");
          }
          args.verbose = true;
        }
        Arg::Short('h') | Arg::Long("help") => args.help = true,
        Arg::Short('r') | Arg::Long("root") => args.root = true,
        Arg::Short('j') | Arg::Long("json") => args.json = true,
        Arg::Long("reject-negative") => args.reject_negative = true,
        Arg::Short('c') | Arg::Long("config") => {
          let path = p.value().context("--config needs a path")?;
          args.config = Some(PathBuf::from(path));
        }
        Arg::Value(value) => args.numbers.push(value.string()?),
        unk => return Err(unk.unexpected().into()),
      }
    }

    Ok(args)
  }
}
