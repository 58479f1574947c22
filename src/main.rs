// SPDX-License-Identifier: MPL-2.0
use toastboard::app::{self, Flags};

const HELP: &str = "\
toastboard - toast notification showcase

USAGE:
  toastboard [OPTIONS]

OPTIONS:
  --config-dir <DIR>     Directory holding settings.toml
  --duration-ms <MS>     How long each toast stays visible
  -h, --help             Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("Ignoring --config-dir: {err}");
            None
        }),
        duration_ms: args.opt_value_from_str("--duration-ms").unwrap_or_else(|err| {
            log::warn!("Ignoring --duration-ms: {err}");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {:?}", remaining);
    }

    app::run(flags)
}
