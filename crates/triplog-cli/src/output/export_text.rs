use std::io;

use serde_json::Value;

pub fn render_export(data: &Value) -> io::Result<String> {
    let path = data
        .get("path")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("export output requires a path"))?;
    let rows = data.get("rows").and_then(Value::as_i64).unwrap_or(0);
    let bytes = data.get("bytes").and_then(Value::as_i64).unwrap_or(0);

    Ok(format!("Exported {rows} trips to {path} ({bytes} bytes)."))
}
