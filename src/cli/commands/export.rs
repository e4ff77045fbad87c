use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        days,
        format,
        file,
        force,
    } = cmd
    {
        let session = open_session(cfg, *days)?;

        if session.events().is_empty() {
            info("No meetings in the selected window, exporting header only.");
        }

        session.export(file.as_deref(), &cfg.export_dir, *format, *force)?;
    }
    Ok(())
}
