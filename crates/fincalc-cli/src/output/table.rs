use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::display_value;

/// Format the computation envelope as tables.
///
/// Scalar result fields go into one Field/Value table; any array field in
/// the result (such as an amortization schedule) is rendered as its own
/// table underneath, followed by warnings and the methodology line.
pub fn print_table(value: &Value) {
    let Some(envelope) = value.as_object() else {
        println!("{}", display_value(value));
        return;
    };

    match envelope.get("result") {
        Some(Value::Object(result)) => {
            let mut scalars = Builder::default();
            scalars.push_record(["Field", "Value"]);
            let mut nested: Vec<(&str, &Vec<Value>)> = Vec::new();
            for (key, val) in result {
                match val {
                    Value::Array(rows) => nested.push((key, rows)),
                    Value::Object(inner) => {
                        for (inner_key, inner_val) in inner {
                            let label = format!("{key}.{inner_key}");
                            scalars.push_record([label.as_str(), &display_value(inner_val)]);
                        }
                    }
                    _ => scalars.push_record([key.as_str(), &display_value(val)]),
                }
            }
            println!("{}", Table::from(scalars));

            for (key, rows) in nested {
                println!("\n{key}:");
                print_rows(rows);
            }
        }
        Some(other) => println!("{}", display_value(other)),
        None => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in envelope {
                builder.push_record([key.as_str(), &display_value(val)]);
            }
            println!("{}", Table::from(builder));
        }
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                println!("  - {}", display_value(w));
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {methodology}");
    }
}

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            println!("  {}", display_value(row));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(h).map(display_value).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }
    println!("{}", Table::from(builder));
}
