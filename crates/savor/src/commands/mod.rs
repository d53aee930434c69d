//! Command dispatch: bridges CLI args -> core Commands -> output formatting.

pub mod chat;
pub mod config_cmd;
pub mod dashboard;
pub mod foods;
pub mod orders;
pub mod profile;
pub mod revenue;
pub mod reviews;
pub mod util;
pub mod vouchers;

use savor_core::Console;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    console: &Console,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Vouchers(args) => vouchers::handle(console, args, global).await,
        Command::Foods(args) => foods::handle(console, args, global).await,
        Command::Orders(args) => orders::handle(console, args, global).await,
        Command::Reviews(args) => reviews::handle(console, args, global).await,
        Command::Chat(args) => chat::handle(console, args, global).await,
        Command::Dashboard => dashboard::handle(console, global).await,
        Command::Revenue(args) => revenue::handle(console, args, global).await,
        Command::Profile(args) => profile::handle(console, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
