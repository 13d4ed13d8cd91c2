use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(_) => {
            // Nested sections become dotted keys: `inventory.total_value`.
            let mut rows = Vec::new();
            flatten("", &value, &mut rows);
            Ok(table::render_entity_table(
                &["key", "value"],
                &rows,
                table_options(),
            ))
        }
        scalar => Ok(table::render_entity_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            table_options(),
        )),
    }
}

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<Vec<String>>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, rows);
            }
        }
        Value::Array(items) if !prefix.is_empty() && items.iter().all(Value::is_string) => {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            rows.push(vec![prefix.to_string(), joined]);
        }
        other => rows.push(vec![prefix.to_string(), value_to_cell(other)]),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use erpx_core::responses::{InventoryTotals, ResourceTotals, SystemStatus, TransactionTotals};
    use serde::Serialize;

    use super::{render, table::render_entity_table};
    use crate::cli::OutputFormat;

    fn status() -> SystemStatus {
        SystemStatus {
            company: "Acme".to_string(),
            resources: ResourceTotals {
                total: 3,
                available: 2,
            },
            inventory: InventoryTotals {
                total_items: 1,
                items_needing_reorder: 0,
                total_value: 12.5,
            },
            transactions: TransactionTotals {
                total: 0,
                pending: 0,
                completed: 0,
            },
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&status(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["company"], "Acme");
        assert_eq!(parsed["resources"]["available"], 2);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&status(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.starts_with('{'));
    }

    #[test]
    fn table_render_flattens_nested_sections() {
        let out = render(&status(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("inventory.total_value"));
        assert!(out.contains("resources.available"));
        assert!(out.contains("Acme"));
    }

    #[test]
    fn table_render_joins_string_lists() {
        #[derive(Serialize)]
        struct Report {
            errors: Vec<&'static str>,
        }
        let out = render(
            &Report {
                errors: vec!["/frontend: missing", "/backend: missing"],
            },
            OutputFormat::Table,
        )
        .unwrap();
        assert!(out.contains("/frontend: missing, /backend: missing"));
    }

    #[test]
    fn table_render_for_name_list() {
        let out = render(&vec!["erpx_stack", "resource"], OutputFormat::Table).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("erpx_stack"));
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["id", "status", "name"];
        let rows = vec![
            vec!["r1".to_string(), "available".to_string(), "Press".to_string()],
            vec![
                "r200".to_string(),
                "maintenance".to_string(),
                "a much longer machine name".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("status"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }
}
