//! Commands module.

mod server;

use clap::Subcommand;
pub(crate) use server::ServerCommand;

#[derive(Subcommand)]
pub(crate) enum SubCommand {
    /// Start the bot server.
    Server(ServerCommand),
}
