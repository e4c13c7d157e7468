use serde_json::Value;

use super::display_value;

/// The single headline figure for each calculator, in lookup order.
const HEADLINE_KEYS: &[&str] = &[
    "tax_payable",
    "future_value",
    "monthly_payment",
    "target_fund",
    "monthly_benefit",
    "required_distribution",
    "level",
];

/// Print just the headline answer from the output.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result {
        for key in HEADLINE_KEYS {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", display_value(val));
                    return;
                }
            }
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, display_value(val));
            return;
        }
    }

    println!("{}", display_value(result));
}
