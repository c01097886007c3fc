use anyhow::Result;
use clap::Parser;
use glbot_config::Config;

use crate::commands::SubCommand;

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        match args.cmd {
            SubCommand::Server(cmd) => cmd.run(config),
        }
    }
}
