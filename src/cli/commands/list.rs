use crate::cli::commands::{open_session, print_window};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `list` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { days, rows } = cmd {
        let session = open_session(cfg, *days)?;

        print_window(&session);

        if *rows {
            session.print_rows();
        } else {
            session.print_listing();
        }

        println!();
        session.print_summary();
    }
    Ok(())
}
