mod args;
mod cells_view;
mod compare_view;
mod global_settings;
mod tables;
mod values_view;

use crate::args::build_cli;
use crate::cells_view::cells_view;
use crate::compare_view::compare_view;
use crate::global_settings::{GlobalSettings, OutputFormat};
use crate::values_view::values_view;
use anyhow::Result;
use clap::ArgMatches;
use crystalline_lib::rects::Rect2I;
use crystalline_lib::Range;

/// Fetch a range that was validated while parsing the command line
fn range_arg(args: &ArgMatches, id: &str) -> Result<Range> {
    args.get_one::<Range>(id)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Missing argument {}", id))
}

fn main() -> Result<()> {
    let args = build_cli().get_matches();
    let globals = GlobalSettings::new(&args);
    globals.init_logger();

    let output = match args.subcommand() {
        Some(("values", sub)) => values_view(
            &range_arg(sub, "RANGE")?,
            &values_view::Settings::new(sub),
            &globals,
        )?,
        Some(("contains", sub)) => {
            let range = range_arg(sub, "RANGE")?;
            let value = sub
                .get_one::<i32>("VALUE")
                .copied()
                .ok_or_else(|| anyhow::anyhow!("Missing argument VALUE"))?;
            let inside = range.contains(value);
            match globals.format {
                OutputFormat::Json => serde_json::to_string(
                    &serde_json::json!({
                        "range": range,
                        "value": value,
                        "contains": inside,
                    }),
                )?,
                OutputFormat::Text => inside.to_string(),
            }
        }
        Some(("compare", sub)) => compare_view(
            &range_arg(sub, "A")?,
            &range_arg(sub, "B")?,
            &globals,
        )?,
        Some(("cells", sub)) => {
            let rect =
                Rect2I::from_ranges(range_arg(sub, "X")?, range_arg(sub, "Y")?);
            cells_view(&rect, &cells_view::Settings::new(sub), &globals)?
        }
        Some(("completions", sub)) => {
            if let Some(shell) =
                sub.get_one::<clap_complete_command::Shell>("shell").cloned()
            {
                shell.generate(&mut build_cli(), &mut std::io::stdout());
            }
            return Ok(());
        }
        Some((name, _)) => anyhow::bail!("Unknown command {}", name),
        None => anyhow::bail!("No command given"),
    };

    println!("{}", output.trim_end());
    Ok(())
}
