// SPDX-License-Identifier: MPL-2.0
use person_lens::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: person_lens [OPTIONS]

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --api-url <URL>       Search service base URL (overrides API_BASE_URL)
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory holding session state
  -h, --help            Print this help
";

fn main() -> iced::Result {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("person_lens=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("{error}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_url: args.opt_value_from_str("--api-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    })
}
