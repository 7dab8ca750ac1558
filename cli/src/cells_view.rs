use crate::global_settings::{GlobalSettings, OutputFormat};
use crate::tables::{Align, Column, Table};
use anyhow::Result;
use clap::{arg, Arg, ArgMatches};
use crystalline_lib::points::Point2I;
use crystalline_lib::primitives::Primitive;
use crystalline_lib::rects::Rect2I;
use crystalline_lib::Error;
use itertools::Itertools;

/// Parse a grid point written as `X,Y`
fn parse_point(s: &str) -> Result<Point2I, Error> {
    match s.split_once(',') {
        Some((x, y)) => {
            Ok(Point2I::new(x.trim().parse()?, y.trim().parse()?))
        }
        None => Err(Error::Parse(format!(
            "Invalid point '{}', expected X,Y",
            s
        ))),
    }
}

pub struct Settings {
    // Points to check against the rectangle
    pub points: Vec<Point2I>,

    pub list_cells: bool,
}

impl Settings {
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(-p --point <POINT> "Check whether X,Y is in the rectangle")
                .required(false)
                .action(clap::ArgAction::Append)
                .allow_hyphen_values(true)
                .value_parser(parse_point),
            arg!(--list "List all cells of the rectangle"),
        ]
    }

    pub fn new(args: &ArgMatches) -> Self {
        Settings {
            points: args
                .get_many::<Point2I>("point")
                .map(|p| p.copied().collect())
                .unwrap_or_default(),
            list_cells: args.get_flag("list"),
        }
    }
}

pub fn cells_view(
    rect: &Rect2I,
    settings: &Settings,
    globals: &GlobalSettings,
) -> Result<String> {
    let shape: Primitive = (*rect).into();
    let checks = settings
        .points
        .iter()
        .map(|p| Ok((*p, shape.contains(&(*p).into())?)))
        .collect::<Result<Vec<(Point2I, bool)>, Error>>()?;

    if globals.format == OutputFormat::Json {
        let contains = checks
            .iter()
            .map(|(p, inside)| {
                serde_json::json!({"point": p, "inside": inside})
            })
            .collect_vec();
        let mut value = serde_json::json!({
            "rect": rect,
            "width": rect.width(),
            "height": rect.height(),
            "area": rect.area(),
            "contains": contains,
        });
        if settings.list_cells {
            let cells = serde_json::to_value(rect.points().collect_vec())?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("cells".to_string(), cells);
            }
        }
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut rows = vec![
        ("Rect".to_string(), rect.to_string()),
        ("Width".to_string(), rect.width().to_string()),
        ("Height".to_string(), rect.height().to_string()),
        ("Area".to_string(), rect.area().to_string()),
    ];
    rows.extend(checks.iter().map(|(p, inside)| {
        (format!("Contains {}", p), inside.to_string())
    }));

    let name = |row: &(String, String)| row.0.clone();
    let value = |row: &(String, String)| row.1.clone();
    let columns = vec![
        Column::new("Property", &name),
        Column::new("Value", &value).with_align(Align::Right),
    ];
    let mut table = Table::new(columns, &globals.table).with_col_headers();
    table.add_rows(&rows);
    let mut out = table.to_string(globals.width);

    if settings.list_cells {
        let grid = rect.points().chunk_by(|p| p.y);
        for (_, row) in &grid {
            out.push_str(&row.map(|p| p.to_string()).join(" "));
            out.push('\n');
        }
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use crate::cells_view::{cells_view, parse_point, Settings};
    use crate::global_settings::{GlobalSettings, OutputFormat};
    use crystalline_lib::points::Point2I;
    use crystalline_lib::rects::Rect2I;

    fn globals(format: OutputFormat) -> GlobalSettings {
        GlobalSettings {
            format,
            table: crate::tables::Settings::default(),
            verbosity: 0,
            width: 80,
        }
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("3,4").unwrap(), Point2I::new(3, 4));
        assert_eq!(parse_point(" -1 , 2").unwrap(), Point2I::new(-1, 2));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn test_cells_text() {
        let rect = Rect2I::new(0, 0, 2, 3).unwrap();
        let settings = Settings {
            points: vec![Point2I::new(1, 2), Point2I::new(2, 2)],
            list_cells: true,
        };
        let out =
            cells_view(&rect, &settings, &globals(OutputFormat::Text)).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.first(), Some(&"   Property    │     Value     "));
        assert_eq!(lines.get(1), Some(&"───────────────│───────────────"));
        assert_eq!(lines.get(5), Some(&"Area           │              6"));
        assert_eq!(lines.get(6), Some(&"Contains (1, 2)│           true"));
        assert_eq!(lines.get(7), Some(&"Contains (2, 2)│          false"));
        assert_eq!(lines.get(8), Some(&"(0, 0) (1, 0)"));
        assert_eq!(lines.get(10), Some(&"(0, 2) (1, 2)"));
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_cells_json() {
        let rect = Rect2I::new(-1, -1, 3, 3).unwrap();
        let settings = Settings {
            points: vec![Point2I::ORIGIN],
            list_cells: false,
        };
        let out =
            cells_view(&rect, &settings, &globals(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.get("area"), Some(&serde_json::json!(9)));
        assert_eq!(
            value.pointer("/contains/0/inside"),
            Some(&serde_json::json!(true))
        );
        assert!(value.get("cells").is_none());
    }
}
