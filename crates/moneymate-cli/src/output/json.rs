use std::io;

use moneymate_client::{ClientError, SuccessEnvelope};
use serde::Serialize;
use serde_json::{Value, json};

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = match success.command.as_str() {
        "txn add" => render_envelope_json(&success.data),
        "txn list" => render_txn_list_json(&success.data),
        "txn remove" => render_envelope_json(&success.data),
        "dashboard" => render_envelope_json(&success.data),
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
    let mut body = json!({
        "code": error.code,
        "message": error.message,
        "recovery_steps": error.recovery_steps,
    });
    if let (Some(object), Some(data)) = (body.as_object_mut(), error.data.as_ref()) {
        object.insert("data".to_string(), data.clone());
    }
    serialize_json_pretty(&json!({ "error": body }))
}

fn render_envelope_json(data: &Value) -> Value {
    json!({
        "ok": true,
        "version": JSON_VERSION,
        "data": data.clone()
    })
}

// Scripts get the row array directly; the client already orders it
// newest ledger date first.
fn render_txn_list_json(data: &Value) -> Value {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    Value::Array(rows)
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use moneymate_client::SuccessEnvelope;
    use serde_json::{Value, json};

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
    fn txn_list_json_returns_raw_array() {
        let payload = success(
            "txn list",
            json!({
                "total": 1,
                "rows": [
                    {"txn_id": "txn_1", "description": "Salary", "amount": 2500.0}
                ]
            }),
        );

        let rendered = render_success_json(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert!(value.is_array());
                assert_eq!(value[0]["txn_id"], Value::String("txn_1".to_string()));
            }
        }
    }

    #[test]
    fn dashboard_json_uses_structured_envelope() {
        let payload = success(
            "dashboard",
            json!({
                "transaction_count": 0,
                "totals": {"balance": 0.0, "income": 0.0, "expense": 0.0}
            }),
        );

        let rendered = render_success_json(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(true));
                assert_eq!(value["version"], Value::String("v1".to_string()));
                assert_eq!(value["data"]["transaction_count"].as_i64(), Some(0));
            }
        }
    }

    #[test]
    fn runtime_error_json_uses_universal_shape() {
        let error = moneymate_client::ClientError::transaction_not_found("txn_missing");
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(
                    value["error"]["code"],
                    Value::String("transaction_not_found".to_string())
                );
                assert_eq!(
                    value["error"]["data"]["txn_id"],
                    Value::String("txn_missing".to_string())
                );
                assert!(value.get("ok").is_none());
            }
        }
    }

    #[test]
    fn errors_without_data_omit_the_data_field() {
        let error = moneymate_client::ClientError::new("ledger_locked", "busy", Vec::new());
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert!(value["error"].get("data").is_none());
            }
        }
    }
}
