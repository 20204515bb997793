// SPDX-License-Identifier: MPL-2.0
use card_deck::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: card-deck [MANIFEST] [--data-dir DIR] [--config-dir DIR]";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "card_deck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let data_dir = read_option(&mut args, "--data-dir");
    let config_dir = read_option(&mut args, "--config-dir");
    let manifest = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(data_dir.clone(), config_dir.clone());

    app::run(Flags {
        manifest,
        data_dir,
        config_dir,
    })
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, key, "ignoring malformed argument");
            None
        }
    }
}
