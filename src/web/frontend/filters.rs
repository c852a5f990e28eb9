use chrono::{NaiveDateTime, Utc};
use std::collections::HashMap;
use tera::Value;

/// Tera filter telling whether a date time (as serialized by chrono) is already behind us.
pub fn is_in_the_past(date: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let date: NaiveDateTime = serde::Deserialize::deserialize(date)?;
    let now = Utc::now().naive_utc();
    Ok(Value::Bool(date.cmp(&now).is_le()))
}
