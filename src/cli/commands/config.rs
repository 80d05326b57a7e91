use crate::cli::parser::Commands;
use crate::config::{Config, missing_fields};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if !print_config && !check && !edit_config {
            info("Nothing to do: use --print, --check or --edit.");
            return Ok(());
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use, run `minesim init`)",
                    path.display()
                ));
            } else {
                let missing = missing_fields(path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields (defaults in use): {}", missing.join(", ")));
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "{} does not exist (run `minesim init` first)",
            path.display()
        )));
    }

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            Ok(())
        }
        _ if editor_to_use != default_editor => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));
            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                    Ok(())
                }
                _ => Err(AppError::Config(format!(
                    "failed to edit configuration file using '{}'",
                    default_editor
                ))),
            }
        }
        _ => Err(AppError::Config(format!(
            "failed to edit configuration file using '{}'",
            editor_to_use
        ))),
    }
}
