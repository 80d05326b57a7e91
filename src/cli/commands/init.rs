use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command: write a default configuration file at `path`.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    println!("⚙️  Initializing minesim…");

    let cfg = Config::init(path, force)?;
    log::info!("configuration written to {}", path.display());

    success(format!("Config file : {}", path.display()));
    println!(
        "⛏️  Mine {} | shift {} | incharge {}",
        cfg.mine_name, cfg.shift_id, cfg.shift_incharge
    );
    Ok(())
}
