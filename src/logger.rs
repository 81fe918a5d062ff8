pub use log::{debug, info, LevelFilter};

/// `RUST_LOG` wins, then `--verbose`, then the config, then `info`.
/// Calling this again after a logger is installed does nothing.
pub fn init(verbose: bool, config_level: Option<LevelFilter>) {
  let level = if verbose {
    LevelFilter::Debug
  } else {
    config_level.unwrap_or(LevelFilter::Info)
  };

  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
    .format_timestamp(None)
    .try_init()
    .ok();
}

// based on log crate error! impl
// always reaches stderr, even when the filter drops errors
macro_rules! fatal {
    // fatal!("a {} event", "log")
    ($($arg:tt)+) => ({
        if log::log_enabled!(log::Level::Error) {
            log::log!(log::Level::Error, $($arg)+);
        } else {
            eprintln!("error: {}", format_args!($($arg)+));
        }
        std::process::exit(1);
    })
}

pub(crate) use fatal;
