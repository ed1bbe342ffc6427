mod app;
mod calendar;
mod events;
mod help;
mod locale;
mod source;
mod theme;
use crate::app::App;
use crate::calendar::MonthWindow;
use crate::locale::Locale;
use crate::source::{DemoSource, load_events};
use anyhow::Context;
use flexi_logger::{FileSpec, Logger};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{Date, OffsetDateTime, Weekday, format_description::FormatItem, macros::format_description};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

const DEFAULT_EVENT_COUNT: u32 = 10;

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "warn"
};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        locale: Option<String>,
        monday: bool,
        events: u32,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut locale = None;
        let mut monday = false;
        let mut events = DEFAULT_EVENT_COUNT;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Long("locale") => locale = Some(parser.value()?.string()?),
                Arg::Long("monday") => monday = true,
                Arg::Long("events") => events = parser.value()?.parse()?,
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            date,
            locale,
            monday,
            events,
            log_file,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                date,
                locale,
                monday,
                events,
                log_file,
            } => {
                init_logging(log_file).context("failed to initialize logging")?;
                let profile = match locale {
                    Some(tag) => Locale::resolve(&tag),
                    None => Locale::from_env(),
                }
                .profile();
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?;
                let week_start = if monday {
                    Weekday::Monday
                } else {
                    Weekday::Sunday
                };
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_time()
                    .build()
                    .context("failed to start async runtime")?;
                let source = DemoSource::new(events, today);
                let (book, load_failed) = runtime.block_on(load_events(&source));
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let mut window = MonthWindow::new(today.date(), week_start);
                    if let Some(date) = date {
                        window = window.start_month(date);
                    }
                    App::new(window, book, load_failed, profile).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: evcal [OPTIONS] [YYYY-MM-DD]");
                println!();
                println!("Terminal month calendar with localized labels and per-day event markers");
                println!();
                println!("Options:");
                println!("      --events <N>       Number of synthetic events to load [default: 10]");
                println!("      --locale <TAG>     Override the locale detected from the environment");
                println!("      --log-file <PATH>  Write log messages to this file");
                println!("      --monday           Start weeks on Monday instead of Sunday");
                println!("  -h, --help             Display this help message and exit");
                println!("  -V, --version          Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn init_logging(log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;
    if let Some(path) = log_file {
        logger = logger.log_to_file(FileSpec::try_from(path)?).print_message();
    }
    logger.start()?;
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

    #[test]
    fn test_parse_defaults() {
        let parser = Parser::from_args(Vec::<String>::new());
        assert_eq!(
            Command::from_parser(parser).unwrap(),
            Command::Run {
                date: None,
                locale: None,
                monday: false,
                events: 10,
                log_file: None,
            }
        );
    }

    #[test]
    fn test_parse_everything() {
        let parser = Parser::from_args([
            "--locale",
            "it-IT",
            "--monday",
            "--events",
            "3",
            "--log-file",
            "/tmp/evcal.log",
            "2023-02-01",
        ]);
        assert_eq!(
            Command::from_parser(parser).unwrap(),
            Command::Run {
                date: Some(date!(2023 - 02 - 01)),
                locale: Some(String::from("it-IT")),
                monday: true,
                events: 3,
                log_file: Some(PathBuf::from("/tmp/evcal.log")),
            }
        );
    }

    #[test]
    fn test_parse_bad_date() {
        let parser = Parser::from_args(["2023-02-30"]);
        assert!(Command::from_parser(parser).is_err());
    }

    #[test]
    fn test_parse_help_and_version() {
        assert_eq!(
            Command::from_parser(Parser::from_args(["--help"])).unwrap(),
            Command::Help
        );
        assert_eq!(
            Command::from_parser(Parser::from_args(["-V"])).unwrap(),
            Command::Version
        );
    }
}
