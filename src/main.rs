// SPDX-License-Identifier: MPL-2.0
use feedback_kit::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "feedback_kit=info";

fn main() -> iced::Result {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();

    let lang = match args.opt_value_from_str::<_, String>("--lang") {
        Ok(lang) => lang,
        Err(err) => {
            tracing::warn!("ignoring --lang: {err}");
            None
        }
    };
    let config_dir = match args.opt_value_from_str::<_, String>("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            tracing::warn!("ignoring --config-dir: {err}");
            None
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(Flags { lang, config_dir })
}
