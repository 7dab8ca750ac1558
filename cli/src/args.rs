use crate::global_settings::GlobalSettings;
use clap::{arg, Arg, Command};
use crystalline_lib::ranges::Range;
use std::str::FromStr;

/// A positional argument holding a range, written `START..END` or
/// `[START, END)`.
fn range_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .help(help)
        .required(true)
        .allow_hyphen_values(true) // -4..2
        .value_parser(Range::from_str)
}

pub(crate) fn build_cli() -> Command {
    Command::new("crystalline")
        .version("0.1")
        .about("Query discrete ranges and integer rectangles")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("values")
                .about("List the values in a range")
                .arg(range_arg("RANGE", "Range of values, as START..END"))
                .args(crate::values_view::Settings::cli()),
        )
        .subcommand(
            Command::new("contains")
                .about("Check whether a value is in a range")
                .arg(range_arg("RANGE", "Range of values, as START..END"))
                .arg(
                    arg!(<VALUE> "The value to look for")
                        .value_parser(clap::value_parser!(i32))
                        .allow_negative_numbers(true),
                ),
        )
        .subcommand(
            Command::new("compare")
                .about("Show how two ranges relate to each other")
                .arg(range_arg("A", "First range"))
                .arg(range_arg("B", "Second range")),
        )
        .subcommand(
            Command::new("cells")
                .about("Build a rectangle from a range of columns and rows")
                .arg(range_arg("X", "Columns covered by the rectangle"))
                .arg(range_arg("Y", "Rows covered by the rectangle"))
                .args(crate::cells_view::Settings::cli()),
        )
        .subcommand(
            // Use    eval "$(crystalline completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}

#[cfg(test)]
mod test {
    use crate::args::build_cli;
    use crystalline_lib::ranges::Range;

    #[test]
    fn test_cli() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_range_args() {
        let args = build_cli()
            .try_get_matches_from(["crystalline", "compare", "-4..2", "[0, 9)"])
            .unwrap();
        let (name, sub) = args.subcommand().unwrap();
        assert_eq!(name, "compare");
        assert_eq!(sub.get_one::<Range>("A"), Range::new(-4, 2).ok().as_ref());
        assert_eq!(sub.get_one::<Range>("B"), Range::new(0, 9).ok().as_ref());

        let args = build_cli()
            .try_get_matches_from(["crystalline", "contains", "0..5", "-1"])
            .unwrap();
        let (_, sub) = args.subcommand().unwrap();
        assert_eq!(sub.get_one::<i32>("VALUE"), Some(&-1));

        // Invalid ranges are rejected while parsing
        assert!(build_cli()
            .try_get_matches_from(["crystalline", "values", "5..5"])
            .is_err());
        assert!(build_cli()
            .try_get_matches_from(["crystalline", "values", "five"])
            .is_err());
    }
}
