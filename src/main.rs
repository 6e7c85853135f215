// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, Flags};
use art_space::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Art Space - a tiny artwork gallery

USAGE:
  art_space [OPTIONS]

OPTIONS:
  --lang <LANG>         Interface language (e.g. en-US, fr)
  --config-dir <PATH>   Directory holding settings.toml
  -h, --help            Print this help

Use the Next / Previous buttons or the arrow keys to browse.
";

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Returns `Ok(None)` when help was requested.
fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if let Some(extra) = remaining.first() {
        tracing::warn!(argument = ?extra, "ignoring unexpected argument");
    }

    Ok(Some(flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn parses_lang_and_config_dir() {
        let flags = parse_args(args(&["--lang", "fr", "--config-dir", "/tmp/art"]))
            .expect("valid args")
            .expect("not help");
        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/art"));
    }

    #[test]
    fn no_args_gives_default_flags() {
        let flags = parse_args(args(&[])).expect("valid args").expect("not help");
        assert_eq!(flags, Flags::default());
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse_args(args(&["--help"])).expect("valid args").is_none());
    }

    #[test]
    fn missing_option_value_is_an_error() {
        assert!(parse_args(args(&["--lang"])).is_err());
    }
}
