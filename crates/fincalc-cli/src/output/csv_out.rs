use serde_json::Value;
use std::io;

use super::display_value;

/// Write the result section as CSV to stdout.
///
/// Scalar fields become `field,value` rows; a single array field (such as
/// an amortization schedule) becomes a header row plus one row per entry.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Object(map) => {
            if let Some(Value::Array(rows)) = map.values().find(|v| v.is_array()) {
                write_rows(&mut wtr, rows);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    if !val.is_array() {
                        let _ = wtr.write_record([key.as_str(), &display_value(val)]);
                    }
                }
            }
        }
        Value::Array(rows) => write_rows(&mut wtr, rows),
        other => {
            let _ = wtr.write_record([display_value(other)]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            let _ = wtr.write_record([display_value(row)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(display_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}
