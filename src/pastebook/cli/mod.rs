//! Command-line client: argument dispatch, terminal output and OS integrations.
//! Not part of the library API.

mod commands;
mod print;
mod setup;

use crate::args::{Cli, Commands};
use pastebook::error::Result;

pub(crate) fn run(cli: Cli) -> Result<()> {
    let mut ctx = setup::init_context(cli.verbose)?;

    match cli.command {
        Some(Commands::Create {
            title,
            content,
            no_editor,
        }) => commands::handle_create(&mut ctx, title, content, no_editor),
        Some(Commands::Edit {
            paste,
            title,
            content,
        }) => commands::handle_edit(&mut ctx, paste, title, content),
        Some(Commands::List { search }) => commands::handle_list(&mut ctx, search),
        Some(Commands::Search { term }) => commands::handle_list(&mut ctx, Some(term)),
        Some(Commands::View { paste }) => commands::handle_view(&mut ctx, paste),
        Some(Commands::Copy { paste }) => commands::handle_copy(&mut ctx, paste),
        Some(Commands::Share { paste }) => commands::handle_share(&mut ctx, paste),
        Some(Commands::Delete { paste }) => commands::handle_delete(&mut ctx, paste),
        Some(Commands::Reset { yes }) => commands::handle_reset(&mut ctx, yes),
        Some(Commands::Whoami) => commands::handle_whoami(&ctx),
        Some(Commands::Login { identity }) => commands::handle_login(&mut ctx, identity),
        Some(Commands::Owns { paste }) => commands::handle_owns(&mut ctx, paste),
        Some(Commands::Config { key, value }) => commands::handle_config(&mut ctx, key, value),
        None => commands::handle_list(&mut ctx, None),
    }
}
