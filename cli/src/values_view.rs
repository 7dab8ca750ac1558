use crate::global_settings::{GlobalSettings, OutputFormat};
use anyhow::Result;
use clap::{arg, Arg, ArgMatches};
use crystalline_lib::ranges::Range;
use itertools::Itertools;

pub struct Settings {
    pub step: i32,

    // Print one value per line, rather than a comma-separated list
    pub one_per_line: bool,
}

impl Settings {
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(-s --step [STEP] "Increment between two values")
                .value_parser(clap::value_parser!(i32))
                .allow_negative_numbers(true)
                .default_value("1"),
            arg!(--"one-per-line" "Print each value on its own line"),
        ]
    }

    pub fn new(args: &ArgMatches) -> Self {
        Settings {
            step: args.get_one::<i32>("step").copied().unwrap_or(1),
            one_per_line: args.get_flag("one-per-line"),
        }
    }
}

pub fn values_view(
    range: &Range,
    settings: &Settings,
    globals: &GlobalSettings,
) -> Result<String> {
    let mut values = range.iter_step(settings.step)?;
    log::info!("{} values in {}", values.len(), range);

    Ok(match globals.format {
        OutputFormat::Json => serde_json::to_string(&values.collect_vec())?,
        OutputFormat::Text if settings.one_per_line => values.join("\n"),
        OutputFormat::Text => values.join(", "),
    })
}

#[cfg(test)]
mod test {
    use crate::global_settings::{GlobalSettings, OutputFormat};
    use crate::values_view::{values_view, Settings};
    use crystalline_lib::ranges::Range;
    use crystalline_lib::Error;

    fn globals(format: OutputFormat) -> GlobalSettings {
        GlobalSettings {
            format,
            table: crate::tables::Settings::default(),
            verbosity: 0,
            width: 80,
        }
    }

    #[test]
    fn test_values() {
        let range = Range::new(0, 9).unwrap();
        let settings = Settings {
            step: 3,
            one_per_line: false,
        };
        assert_eq!(
            values_view(&range, &settings, &globals(OutputFormat::Text))
                .unwrap(),
            "0, 3, 6"
        );
        assert_eq!(
            values_view(&range, &settings, &globals(OutputFormat::Json))
                .unwrap(),
            "[0,3,6]"
        );

        let settings = Settings {
            step: 1,
            one_per_line: true,
        };
        let range = Range::new(3, 6).unwrap();
        assert_eq!(
            values_view(&range, &settings, &globals(OutputFormat::Text))
                .unwrap(),
            "3\n4\n5"
        );
    }

    #[test]
    fn test_invalid_step() {
        let range = Range::new(0, 9).unwrap();
        let settings = Settings {
            step: 0,
            one_per_line: false,
        };
        let err = values_view(&range, &settings, &globals(OutputFormat::Text))
            .unwrap_err();
        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::InvalidStep(0)));
    }
}
