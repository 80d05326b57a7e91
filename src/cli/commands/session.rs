use crate::cli::commands::view::{print_live_table, print_refresh, shift_over};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{MAX_STEPS, Session, SimRandom, SimRng};
use crate::errors::{AppError, AppResult};
use crate::export::logic::ExportTarget;
use crate::ui::messages::{error, info, success};
use crate::utils::path::expand_tilde;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  <enter> | step [N]   refresh the fleet (N times, N <= 10000)
  shift-over | s       close the running shift: report + export
  shift <ID>           start a new shift, e.g. `shift WS2`
  log                  show the live truck table
  help                 this text
  quit | q             leave the session";

#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Step(u32),
    ShiftOver,
    Shift(String),
    Log,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> AppResult<SessionCommand> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(SessionCommand::Step(1));
    };
    let arg = parts.next();

    if parts.next().is_some() {
        return Err(AppError::InvalidCommand(line.trim().to_string()));
    }

    match (word.to_lowercase().as_str(), arg) {
        ("step", None) => Ok(SessionCommand::Step(1)),
        ("step", Some(n)) => match n.parse::<u32>() {
            Ok(n) if n <= MAX_STEPS => Ok(SessionCommand::Step(n)),
            _ => Err(AppError::InvalidCommand(line.trim().to_string())),
        },
        ("shift-over" | "s", None) => Ok(SessionCommand::ShiftOver),
        ("shift", Some(id)) => Ok(SessionCommand::Shift(id.to_string())),
        ("log", None) => Ok(SessionCommand::Log),
        ("help" | "?", None) => Ok(SessionCommand::Help),
        ("quit" | "q" | "exit", None) => Ok(SessionCommand::Quit),
        _ => Err(AppError::InvalidCommand(line.trim().to_string())),
    }
}

/// Handle the `session` command
pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    if let Commands::Session {
        seed,
        format,
        out,
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

        let dir = expand_tilde(out.as_deref().unwrap_or(&cfg.output_dir));
        let target = ExportTarget {
            dir: &dir,
            format: *format,
            force: *force,
        };

        info(format!(
            "Real-Time Coal Mine Simulation - {} (type `help` for commands)",
            cfg.mine_name
        ));

        let stdin = io::stdin();
        let mut input = stdin.lock();
        drive(&mut session, &mut rng, &mut input, &target, cfg.recent_rows, color)?;

        info(format!(
            "Session closed after {} refreshes ({} log records).",
            session.steps_taken(),
            session.log().len()
        ));
    }

    Ok(())
}

/// Read commands from `input` until `quit` or end of input.
///
/// Command errors are reported and the session continues; only I/O errors on
/// `input` and clock failures end it.
pub fn drive<R: SimRandom + ?Sized>(
    session: &mut Session,
    rng: &mut R,
    input: &mut dyn BufRead,
    target: &ExportTarget<'_>,
    rows: usize,
    color: bool,
) -> AppResult<()> {
    loop {
        print!("minesim> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(e) => {
                error(e);
                continue;
            }
        };

        match command {
            SessionCommand::Step(n) => {
                for _ in 0..n {
                    session.step(rng)?;
                }
                print_refresh(session, rows, color);
            }
            SessionCommand::ShiftOver => {
                if let Err(e) = shift_over(session, target, input) {
                    error(e);
                }
            }
            SessionCommand::Shift(id) => match session.begin_shift(&id) {
                Ok(()) => success(format!("Shift {} started.", session.shift_id())),
                Err(e) => error(e),
            },
            SessionCommand::Log => print_live_table(session, rows, color),
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;
    use crate::models::FLEET_SIZE;
    use std::env;
    use std::fs;
    use std::io::Cursor;

    #[test]
    fn parses_session_commands() {
        assert_eq!(parse_command("").unwrap(), SessionCommand::Step(1));
        assert_eq!(parse_command("  \n").unwrap(), SessionCommand::Step(1));
        assert_eq!(parse_command("step 5").unwrap(), SessionCommand::Step(5));
        assert_eq!(parse_command("S").unwrap(), SessionCommand::ShiftOver);
        assert_eq!(parse_command("shift-over").unwrap(), SessionCommand::ShiftOver);
        assert_eq!(
            parse_command("shift WS2").unwrap(),
            SessionCommand::Shift("WS2".into())
        );
        assert_eq!(parse_command("q").unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn rejects_unknown_or_malformed_commands() {
        assert!(matches!(parse_command("dance"), Err(AppError::InvalidCommand(_))));
        assert!(matches!(parse_command("step x"), Err(AppError::InvalidCommand(_))));
        assert_eq!(parse_command("step 10000").unwrap(), SessionCommand::Step(10_000));
        assert!(matches!(parse_command("step 10001"), Err(AppError::InvalidCommand(_))));
        assert!(matches!(parse_command("step 4000000000"), Err(AppError::InvalidCommand(_))));
        assert!(matches!(parse_command("shift"), Err(AppError::InvalidCommand(_))));
        assert!(matches!(parse_command("log now please"), Err(AppError::InvalidCommand(_))));
    }

    #[test]
    fn scripted_session_steps_and_reports() {
        let dir = env::temp_dir().join("minesim_session_drive");
        fs::remove_dir_all(&dir).ok();
        let target = ExportTarget {
            dir: &dir,
            format: ExportFormat::Csv,
            force: true,
        };

        let mut session = Session::new(&Config::default()).unwrap();
        let mut rng = SimRng::from_seed_u64(21);
        let mut input = Cursor::new("\nstep 2\nbogus\nshift WS2\n\ns\nquit\nstep\n");

        drive(&mut session, &mut rng, &mut input, &target, 14, false).unwrap();

        // 1 + 2 refreshes on WS1, 1 on WS2; the trailing `step` is after quit
        assert_eq!(session.steps_taken(), 4);
        assert_eq!(session.log().len(), 4 * FLEET_SIZE);
        assert_eq!(session.shift_id(), "WS2");

        let csv = fs::read_to_string(dir.join("shift_report.csv")).unwrap();
        assert!(csv.contains(",WS2,"));
    }
}
