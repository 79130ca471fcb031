mod app;
mod help;
mod jumpto;
use crate::app::App;
use anyhow::Context;
use datepick::calendar::{
    AnchorMonth, CalendarDay, DateRange, English, Mode, PickerState, Selection,
};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct RunOptions {
    mode: Mode,
    month: Option<AnchorMonth>,
    selection: Selection,
    today: Option<CalendarDay>,
    log: Option<PathBuf>,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut mode = Mode::Single;
        let mut month = None;
        let mut selected = Vec::new();
        let mut today = None;
        let mut log = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('r') | Arg::Long("range") => mode = Mode::Range,
                Arg::Short('s') | Arg::Long("select") => {
                    selected.push(parser.value()?.parse::<CalendarDay>()?);
                }
                Arg::Long("today") => today = Some(parser.value()?.parse::<CalendarDay>()?),
                Arg::Long("log") => log = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if month.is_none() => {
                    month = Some(value.parse::<AnchorMonth>()?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        let selection = initial_selection(mode, &selected)?;
        Ok(Command::Run(RunOptions {
            mode,
            month,
            selection,
            today,
            log,
        }))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                let today = match opts.today {
                    Some(day) => day,
                    None => OffsetDateTime::now_local()
                        .context("failed to determine local date")?
                        .into(),
                };
                if let Some(path) = opts.log.as_deref() {
                    init_logging(path)?;
                }
                tracing::info!(%today, mode = %opts.mode, "Starting date picker");
                let mut picker = PickerState::new(today, opts.mode).with_selection(opts.selection);
                if let Some(month) = opts.month {
                    picker = picker.with_anchor(month);
                }
                let selection = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(picker, English)
                        .run(terminal)
                        .context("failed to run date picker")
                })?;
                tracing::info!(%selection, "Finished");
                if !selection.is_empty() {
                    println!("{selection}");
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: datepick [OPTIONS] [YYYY-MM]");
                println!();
                println!("Terminal month-grid date picker with single-day and date-range selection");
                println!();
                println!("The final selection is printed on exit.");
                println!();
                println!("Options:");
                println!("  -r, --range          Select a range of dates instead of a single date");
                println!("  -s, --select DATE    Start with DATE selected; give twice for a range");
                println!("      --today DATE     Treat DATE as today's date");
                println!("      --log FILE       Write debug logs to FILE");
                println!("  -h, --help           Display this help message and exit");
                println!("  -V, --version        Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn initial_selection(mode: Mode, selected: &[CalendarDay]) -> Result<Selection, lexopt::Error> {
    match (mode, selected) {
        (Mode::Single, _) => Ok(Selection::Single(selected.last().copied())),
        (Mode::Range, []) => Ok(Selection::empty(Mode::Range)),
        (Mode::Range, &[from]) => Ok(Selection::Range(DateRange::starting(from))),
        (Mode::Range, &[a, b]) => Ok(Selection::Range(DateRange::between(a, b))),
        (Mode::Range, _) => Err(lexopt::Error::Custom(
            "--select may be given at most twice in range mode".into(),
        )),
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            parse(&[]).unwrap(),
            Command::Run(RunOptions {
                mode: Mode::Single,
                month: None,
                selection: Selection::Single(None),
                today: None,
                log: None,
            })
        );
    }

    #[test]
    fn test_range_options() {
        let cmd = parse(&[
            "--range",
            "-s",
            "2024-02-10",
            "--select",
            "2024-02-05",
            "--today",
            "2024-02-14",
            "--log",
            "picker.log",
            "2024-03",
        ])
        .unwrap();
        assert_eq!(
            cmd,
            Command::Run(RunOptions {
                mode: Mode::Range,
                month: Some(AnchorMonth::new(2024, Month::March).unwrap()),
                selection: Selection::Range(DateRange::between(
                    CalendarDay::from(date!(2024 - 02 - 05)),
                    CalendarDay::from(date!(2024 - 02 - 10)),
                )),
                today: Some(CalendarDay::from(date!(2024 - 02 - 14))),
                log: Some(PathBuf::from("picker.log")),
            })
        );
    }

    #[test]
    fn test_single_uses_last_selection() {
        let Command::Run(opts) = parse(&["-s", "2024-02-10", "-s", "2024-02-05"]).unwrap() else {
            panic!("expected Command::Run");
        };
        assert_eq!(
            opts.selection,
            Selection::Single(Some(CalendarDay::from(date!(2024 - 02 - 05))))
        );
    }

    #[test]
    fn test_usage_errors() {
        assert!(parse(&["-r", "-s", "2024-01-01", "-s", "2024-01-02", "-s", "2024-01-03"]).is_err());
        assert!(parse(&["--select", "2024-02-30"]).is_err());
        assert!(parse(&["2024-13"]).is_err());
        assert!(parse(&["2024-01", "2024-02"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["--version"]).unwrap(), Command::Version);
    }
}
