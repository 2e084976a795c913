use std::io;

use serde::Serialize;
use serde_json::{Value, json};

use triplog_client::{ClientError, SuccessEnvelope};

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = match success.command.as_str() {
        // Trip lists are consumed as plain arrays; everything else keeps the
        // structured envelope.
        "trip list" => success
            .data
            .get("trips")
            .cloned()
            .unwrap_or(Value::Array(Vec::new())),
        "summary" => success.data.clone(),
        "trip add" | "trip clear" | "export" => json!({
            "ok": true,
            "version": JSON_VERSION,
            "data": success.data.clone()
        }),
        _ => {
            return Err(io::Error::other(format!(
                "JSON output is not supported for command `{}`",
                success.command
            )));
        }
    };

    serialize_json_pretty(&value)
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    let payload = json!({
        "error": {
            "code": error.code,
            "message": error.message,
            "recovery_steps": error.recovery_steps,
        }
    });
    serialize_json_pretty(&payload)
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use triplog_client::SuccessEnvelope;

    use super::{render_error_json, render_success_json};

    fn success(command: &str, data: Value) -> SuccessEnvelope {
        SuccessEnvelope {
            ok: true,
            command: command.to_string(),
            version: "0.1.0".to_string(),
            data,
        }
    }

    #[test]
    fn trip_list_json_returns_the_raw_trip_array() {
        let payload = success(
            "trip list",
            json!({
                "trips": [{"date": "2024-01-01", "amount": 200.0}],
                "totals": {"total_trips": 1, "total_earnings": 200.0}
            }),
        );

        let rendered = render_success_json(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert!(value.is_array());
                assert_eq!(value[0]["date"], Value::String("2024-01-01".to_string()));
            }
        }
    }

    #[test]
    fn trip_add_json_uses_the_structured_envelope() {
        let payload = success("trip add", json!({"trip": {"date": "2024-01-01"}}));

        let rendered = render_success_json(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(true));
                assert_eq!(value["version"], Value::String("v1".to_string()));
                assert_eq!(
                    value["data"]["trip"]["date"],
                    Value::String("2024-01-01".to_string())
                );
            }
        }
    }

    #[test]
    fn error_json_uses_the_universal_shape() {
        let error = triplog_client::ClientError::empty_export();
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(
                    value["error"]["code"],
                    Value::String("empty_export".to_string())
                );
                assert!(value.get("ok").is_none());
            }
        }
    }
}
