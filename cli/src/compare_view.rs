use crate::global_settings::{GlobalSettings, OutputFormat};
use crate::tables::{Align, Column, Table};
use anyhow::Result;
use crystalline_lib::ranges::Range;

fn opt_range(range: Option<Range>) -> String {
    range.map_or_else(|| "-".to_string(), |r| r.to_string())
}

/// Show how two ranges relate: relative position, containment and the
/// ranges that can be built from both.
pub fn compare_view(
    a: &Range,
    b: &Range,
    globals: &GlobalSettings,
) -> Result<String> {
    let relation = a.relation(b);
    log::debug!("{} and {} are {}", a, b, relation);

    if globals.format == OutputFormat::Json {
        let value = serde_json::json!({
            "a": a,
            "b": b,
            "relation": relation.to_string(),
            "equal": a == b,
            "a_contains_b": a.contains_range(b),
            "b_contains_a": b.contains_range(a),
            "overlaps": a.overlaps(b),
            "intersection": a.intersection(b),
            "convex_hull": a.convex_hull(b),
            "union": a.union(b),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let rows = [
        ("A", a.to_string()),
        ("B", b.to_string()),
        ("Relation", relation.to_string()),
        ("Equal", (a == b).to_string()),
        ("A contains B", a.contains_range(b).to_string()),
        ("B contains A", b.contains_range(a).to_string()),
        ("Overlaps", a.overlaps(b).to_string()),
        ("Intersection", opt_range(a.intersection(b))),
        ("Convex hull", a.convex_hull(b).to_string()),
        ("Union", opt_range(a.union(b))),
    ];

    let name = |row: &(&str, String)| row.0.to_string();
    let value = |row: &(&str, String)| row.1.clone();
    let columns = vec![
        Column::new("Property", &name),
        Column::new("Value", &value).with_align(Align::Right),
    ];
    let mut table = Table::new(columns, &globals.table).with_col_headers();
    table.add_rows(&rows);
    Ok(table.to_string(globals.width))
}

#[cfg(test)]
mod test {
    use crate::compare_view::compare_view;
    use crate::global_settings::{GlobalSettings, OutputFormat};
    use crystalline_lib::ranges::Range;
    use serde_json::json;

    fn globals(format: OutputFormat) -> GlobalSettings {
        GlobalSettings {
            format,
            table: crate::tables::Settings::default(),
            verbosity: 0,
            width: 80,
        }
    }

    #[test]
    fn test_compare_text() {
        let a = Range::new(0, 5).unwrap();
        let b = Range::new(5, 8).unwrap();
        let out = compare_view(&a, &b, &globals(OutputFormat::Text)).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines.first(), Some(&"  Property  │ Value  "));
        assert_eq!(lines.get(1), Some(&"────────────│────────"));
        assert_eq!(lines.get(2), Some(&"A           │  [0, 5)"));
        assert_eq!(lines.get(4), Some(&"Relation    │touching"));
        assert_eq!(lines.get(9), Some(&"Intersection│       -"));
        assert_eq!(lines.get(11), Some(&"Union       │  [0, 8)"));
    }

    #[test]
    fn test_compare_json() {
        let a = Range::new(0, 10).unwrap();
        let b = Range::new(2, 4).unwrap();
        let out = compare_view(&a, &b, &globals(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.get("relation"), Some(&json!("surrounding")));
        assert_eq!(value.get("a_contains_b"), Some(&json!(true)));
        assert_eq!(value.get("b_contains_a"), Some(&json!(false)));
        assert_eq!(value.get("equal"), Some(&json!(false)));
        assert_eq!(
            value.get("intersection"),
            Some(&json!({"start": 2, "end": 4}))
        );
    }
}
