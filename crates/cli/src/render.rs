#![forbid(unsafe_code)]

use ck_storage::CustomerRow;
use serde_json::{Value, json};
use std::fmt::Write as _;

/// Pipe-separated table with a header row and a dashed separator. NULL
/// columns render as empty cells.
pub fn render_table(rows: &[CustomerRow]) -> String {
    let header = CustomerRow::COLUMNS.join(" | ");
    let mut out = String::new();
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", "-".repeat(header.len()));

    for row in rows {
        let cells = [
            row.id.to_string(),
            row.name.clone(),
            row.birthday.clone().unwrap_or_default(),
            row.email.clone().unwrap_or_default(),
            row.phone_number.clone().unwrap_or_default(),
            row.address.clone().unwrap_or_default(),
            row.preferred_contact.clone().unwrap_or_default(),
        ];
        let _ = writeln!(out, "{}", cells.join(" | "));
    }

    if rows.is_empty() {
        let _ = writeln!(out, "(no customers)");
    }

    out
}

pub fn render_json(rows: &[CustomerRow]) -> Value {
    Value::Array(
        rows.iter()
            .map(|row| {
                json!({
                    "id": row.id,
                    "name": row.name,
                    "birthday": row.birthday,
                    "email": row.email,
                    "phone_number": row.phone_number,
                    "address": row.address,
                    "preferred_contact": row.preferred_contact,
                })
            })
            .collect(),
    )
}
