//! Output formatting for human-readable and JSON modes.
//!
//! Human mode uses colored terminal output. Commands build their own JSON
//! objects; only errors and tables are rendered here in both modes, with
//! no ANSI escapes in JSON mode.

use colored::Colorize;

/// Prints a success message (human mode).
pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

/// Prints a single key-value pair (human mode).
pub fn print_kv(key: &str, value: &str) {
    println!("{}: {}", key.bold(), value);
}

/// Prints an error message to stderr.
pub fn print_error(msg: &str, json_mode: bool) {
    if json_mode {
        let obj = serde_json::json!({ "error": msg });
        eprintln!("{}", obj);
    } else {
        eprintln!("{} {}", "error:".red().bold(), msg);
    }
}

/// Prints a table of rows in human mode, JSON array in JSON mode.
pub fn print_table(headers: &[&str], rows: &[Vec<String>], json_mode: bool) {
    if json_mode {
        let arr: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| {
                let mut obj = serde_json::Map::new();
                for (i, h) in headers.iter().enumerate() {
                    let val = row.get(i).cloned().unwrap_or_default();
                    obj.insert(h.to_string(), serde_json::Value::String(val));
                }
                serde_json::Value::Object(obj)
            })
            .collect();
        println!("{}", serde_json::Value::Array(arr));
        return;
    }

    if rows.is_empty() {
        println!("{}", "(none)".dimmed());
        return;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| format!("{:<w$}", h.to_uppercase(), w = *w))
        .collect();
    println!("{}", header_line.join("  ").trim_end().bold());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}
