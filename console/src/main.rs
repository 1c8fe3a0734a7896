mod merge;
mod strip;
pub mod utils;
mod validate;

use clap::{
    Parser,
    Subcommand,
};
use merge::MergeArgs;
use strip::StripArgs;
use utils::UtilsArgs;
use validate::ValidateArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    #[command(about = "Merge manifest inputs into the annotated reference matrix")]
    Merge {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  MergeArgs,
    },

    #[command(about = "Strip metadata preambles from series matrix files")]
    Strip {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  StripArgs,
    },

    #[command(about = "Check a manifest and its referenced files without merging")]
    Validate {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  ValidateArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Merge { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Strip { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Validate { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
    }
    Ok(())
}
