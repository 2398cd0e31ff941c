use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::models::NewSubmission;

/// The recognised form fields, still untyped. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubmissionForm {
    pub firstname: Option<Value>,
    pub lastname: Option<Value>,
    pub email: Option<Value>,
    pub dob: Option<Value>,
    pub age: Option<Value>,
}

/// Decode a parsed request body into a typed submission.
///
/// Every field is optional. Absent, `null` and (for `dob`/`age`) empty-string
/// values decode to `None`. Values that cannot be coerced to the field's type
/// are rejected with a message naming the field.
pub fn decode(raw: &Value) -> Result<NewSubmission, String> {
    if !raw.is_object() {
        return Err("Expected an object of form fields".to_string());
    }
    let form = SubmissionForm::deserialize(raw).map_err(|e| format!("Invalid form: {e}"))?;

    Ok(NewSubmission {
        firstname: text_field(form.firstname, "firstname")?,
        lastname: text_field(form.lastname, "lastname")?,
        email: text_field(form.email, "email")?,
        dob: date_field(form.dob, "dob")?,
        age: number_field(form.age, "age")?,
    })
}

fn text_field(value: Option<Value>, name: &str) -> Result<Option<String>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(format!("Invalid value for {name}: expected text")),
    }
}

fn date_field(value: Option<Value>, name: &str) -> Result<Option<NaiveDate>, String> {
    let date = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => parse_date(s.trim()),
        Some(Value::Number(n)) => n.as_f64().and_then(date_from_millis),
        Some(_) => None,
    };

    date.map(Some)
        .ok_or_else(|| format!("Invalid value for {name}: expected a date"))
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp, keeping the date part.
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Numeric dates are milliseconds since the Unix epoch (UTC).
fn date_from_millis(millis: f64) -> Option<NaiveDate> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis.trunc() as i64).map(|dt| dt.date_naive())
}

fn number_field(value: Option<Value>, name: &str) -> Result<Option<f64>, String> {
    let number = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match number {
        Some(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(format!("Invalid value for {name}: expected a number")),
    }
}
