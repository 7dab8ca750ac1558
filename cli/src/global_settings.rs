use clap::{arg, Arg, ArgMatches};
use console::Term;
use log::LevelFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct GlobalSettings {
    pub format: OutputFormat,
    pub table: crate::tables::Settings,

    // Number of times --verbose was given
    pub verbosity: u8,

    // Width of the terminal, used to fit tables
    pub width: usize,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(-v --verbose ... "Show more logs (repeat for more details)")
                .global(true),
            arg!(--format [FORMAT] "How to display results")
                .value_parser(["text", "json"])
                .default_value("text")
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        let json = args
            .get_one::<String>("format")
            .is_some_and(|f| f == "json");
        GlobalSettings {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            verbosity: args.get_count("verbose"),
            width: Term::stdout().size().1 as usize,
            table: crate::tables::Settings::default(),
        }
    }

    /// Maximum level of logs to display.  RUST_LOG still takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(self.log_level())
            .parse_default_env()
            .init();
    }
}
