use std::io;

use tracing::error;

use cmstorm_backlight::cli::{self, Command};

fn main() {
    // A second subscriber is the only failure here, and it must not change
    // the exit status.
    let _ = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    match cli::parse(std::env::args_os()) {
        Command::Switch(mode) => {
            // Failures are logged only, the exit status is always success.
            if let Err(e) = cmstorm_backlight::switch_keyboard_backlight(mode) {
                error!("{:#}", e);
            }
        }
        Command::Help => print!("{}", cli::HELP),
    }
}
