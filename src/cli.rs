use clap::{ArgAction, Parser};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Contact printed at the foot of `--help`. Packagers set
/// `SYMLINK_TRACK_BUGREPORT` at build time; otherwise the package authors are used.
pub const BUG_REPORT: &str = match option_env!("SYMLINK_TRACK_BUGREPORT") {
    Some(address) => address,
    None => env!("CARGO_PKG_AUTHORS"),
};

#[derive(Parser, Debug)]
#[command(name = "symlink-track", version, disable_version_flag = true)]
#[command(about = "Create a path of resolving symbolic links", long_about = None)]
#[command(after_help = format!("Report any bugs to <{BUG_REPORT}>."))]
pub struct Cli {
    /// Path to start from
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Further paths; accepted but ignored
    #[arg(value_name = "EXTRA", hide = true)]
    pub extra: Vec<PathBuf>,

    /// Do a maximum number of <MAX> hops
    #[arg(
        short = 'm',
        long = "max",
        visible_alias = "max-hops",
        value_name = "MAX",
        value_parser = parse_max_hops
    )]
    pub max_hops: Option<NonZeroUsize>,

    /// Display package version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),
}

fn parse_max_hops(raw: &str) -> Result<NonZeroUsize, String> {
    raw.parse::<NonZeroUsize>()
        .map_err(|_| format!("Invalid argument to -m, must be positive integer: {raw}"))
}
