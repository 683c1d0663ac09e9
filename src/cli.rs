use std::ffi::OsString;

use clap::{Parser, ValueEnum};

use crate::model::BacklightMode;

pub const HELP: &str = "\
Switch the CM Storm Devastator keyboard backlight on or off.
Usage: cmstorm-backlight [on|off]
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum State {
    On,
    Off,
}

#[derive(Parser, Debug)]
#[command(name = "cmstorm-backlight", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(value_enum, ignore_case = true)]
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Switch(BacklightMode),
    Help,
}

/// Parse the process arguments, program name included. Anything that is not
/// a single `on` or `off` asks for the help banner.
pub fn parse<I, T>(args: I) -> Command
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(Args { state: State::On }) => Command::Switch(BacklightMode::On),
        Ok(Args { state: State::Off }) => Command::Switch(BacklightMode::Off),
        Err(_) => Command::Help,
    }
}
