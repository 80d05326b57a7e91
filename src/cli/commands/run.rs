use crate::cli::commands::view::{print_refresh, shift_over};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Session, SimRng};
use crate::errors::AppResult;
use crate::export::logic::{ExportLogic, ExportTarget};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use std::io;
use std::thread;
use std::time::Duration;

/// Handle the `run` command
pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    if let Commands::Run {
        steps,
        seed,
        interval_ms,
        quiet,
        shift_over: close_shift,
        format,
        out,
        export_log,
        force,
        wrap,
    } = cmd
    {
        let mut cfg = cfg.clone();
        if let Some(policy) = wrap {
            cfg.wrap_policy = *policy;
        }

        let mut session = Session::new(&cfg)?;
        let mut rng = SimRng::new(*seed);
        let steps = steps.unwrap_or(cfg.default_steps);

        for i in 1..=steps {
            session.step(&mut rng)?;

            if !quiet {
                print_refresh(&session, cfg.recent_rows, color);
            }

            if *interval_ms > 0 && i < steps {
                thread::sleep(Duration::from_millis(*interval_ms));
            }
        }

        if *quiet && steps > 0 {
            print_refresh(&session, cfg.recent_rows, color);
        }

        info(format!(
            "{} refreshes, {} log records (wrap policy: {})",
            session.steps_taken(),
            session.log().len(),
            session.policy().as_str()
        ));

        if !close_shift && !export_log {
            return Ok(());
        }

        let dir = expand_tilde(out.as_deref().unwrap_or(&cfg.output_dir));
        let target = ExportTarget {
            dir: &dir,
            format: *format,
            force: *force,
        };
        log::debug!("exporting as {} into {}", format.as_str(), dir.display());

        let stdin = io::stdin();
        let mut input = stdin.lock();

        if *close_shift {
            shift_over(&session, &target, &mut input)?;
        }

        if *export_log {
            ExportLogic::export_log(&session.log().to_vec(), &target, &mut input)?;
        }
    }

    Ok(())
}
