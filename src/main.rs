pub mod arg_parser;
pub mod config;
pub mod logger;

use anyhow::Context;
use arg_parser::{ArgParser, USAGE};
use config::{Config, Mode, Output};
use digits::{checked_digit_sum, parse_number, Report};
use logger::{debug, info};
use std::io::Write;

/// Used when no number is given on the command line.
const DEFAULT_NUMBER: i64 = 54321;

fn main() {
  if let Err(e) = run() {
    // the logger may not be set up yet if parsing args or config failed
    logger::init(false, None);
    logger::fatal!("{:#}", e);
  }
}

fn run() -> anyhow::Result<()> {
  let args = ArgParser::new().context("bad arguments (see --help)")?;
  if args.help {
    print!("{USAGE}");
    return Ok(());
  }

  let conf = Config::load(args.config.as_deref())?;
  logger::init(args.verbose, conf.log_level);
  debug!("{:?}", conf);

  let mode = if args.root { Mode::Root } else { conf.mode };
  let output = if args.json { Output::Json } else { conf.output };
  let policy = if args.reject_negative {
    digits::SignPolicy::Reject
  } else {
    conf.sign_policy()
  };

  // validate everything before printing anything
  let inputs = if args.numbers.is_empty() {
    info!("No number given, using {}", DEFAULT_NUMBER);
    vec![DEFAULT_NUMBER]
  } else {
    args
      .numbers
      .iter()
      .map(|s| parse_number(s))
      .collect::<Result<Vec<_>, _>>()?
  };
  for &num in &inputs {
    checked_digit_sum(num, policy)?;
  }

  let mut stdout = std::io::stdout().lock();
  for num in inputs {
    let line = render(Report::new(num), mode, output)?;
    debug!("{} -> {}", num, line);
    writeln!(stdout, "{line}").context("failed to write to stdout")?;
  }

  Ok(())
}

fn render(report: Report, mode: Mode, output: Output) -> anyhow::Result<String> {
  Ok(match (output, mode) {
    (Output::Json, _) => report.to_json()?,
    (Output::Plain, Mode::Sum) => report.to_string(),
    (Output::Plain, Mode::Root) => report.digital_root.to_string(),
  })
}
