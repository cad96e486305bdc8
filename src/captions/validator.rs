/*!
 * Schema validation for Granicus caption payloads.
 *
 * The payload is an array holding exactly one array of event objects:
 *
 * ```text
 * [ [ {"type": "text", "time": 352.332, "text": "Hello"},
 *     {"type": "meta", "time": 123.0, "text": "", "title": "Item 1", "guid": "..."} ] ]
 * ```
 *
 * Shape and type mismatches become `CaptionError::Schema` with the JSON path
 * of the offending value. Events that are well-typed but carry an unknown
 * `type` tag, a negative time, or lack the `title`/`guid` pair a meta event
 * needs become `CaptionError::MalformedEvent`.
 */

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::captions::CaptionEvent;
use crate::errors::CaptionError;

/// Validate a decoded payload and extract its events in input order
pub fn validate_payload(payload: &Value) -> Result<Vec<CaptionEvent>, CaptionError> {
    let outer = payload
        .as_array()
        .ok_or_else(|| CaptionError::schema("$", format!("expected array, found {}", kind_of(payload))))?;

    if outer.len() != 1 {
        return Err(CaptionError::schema(
            "$",
            format!("expected exactly one inner array, found {} elements", outer.len()),
        ));
    }

    let inner = outer[0]
        .as_array()
        .ok_or_else(|| CaptionError::schema("$[0]", format!("expected array, found {}", kind_of(&outer[0]))))?;

    let mut events = Vec::with_capacity(inner.len());
    let mut previous_time = 0.0_f64;

    for (index, raw) in inner.iter().enumerate() {
        let event = validate_event(index, raw)?;

        if event.time() < previous_time {
            warn!(
                "Event #{} at {:.3}s is earlier than the event before it ({:.3}s)",
                index,
                event.time(),
                previous_time
            );
        }
        previous_time = event.time();
        events.push(event);
    }

    if events.is_empty() {
        warn!("Caption payload contains no events");
    }
    debug!("Validated {} caption events", events.len());

    Ok(events)
}

// @validates: One event object at `$[0][index]`
fn validate_event(index: usize, raw: &Value) -> Result<CaptionEvent, CaptionError> {
    let path = format!("$[0][{}]", index);
    let object = raw
        .as_object()
        .ok_or_else(|| CaptionError::schema(&path, format!("expected object, found {}", kind_of(raw))))?;

    let kind = required_str(object, &path, "type")?;
    let time = object
        .get("time")
        .ok_or_else(|| CaptionError::schema(format!("{}.time", path), "missing required field"))?;
    let time = time.as_f64().ok_or_else(|| {
        CaptionError::schema(format!("{}.time", path), format!("expected number, found {}", kind_of(time)))
    })?;
    let text = required_str(object, &path, "text")?.to_string();

    if time < 0.0 {
        return Err(CaptionError::malformed(index, format!("negative time {}", time)));
    }

    match kind {
        "text" => Ok(CaptionEvent::Text { time, text }),
        "meta" => {
            let title = meta_str(object, index, &path, "title")?;
            let guid = meta_str(object, index, &path, "guid")?;
            Ok(CaptionEvent::Meta { time, text, title, guid })
        }
        other => Err(CaptionError::malformed(
            index,
            format!("unknown event type {:?}, expected \"text\" or \"meta\"", other),
        )),
    }
}

fn required_str<'a>(object: &'a Map<String, Value>, path: &str, field: &str) -> Result<&'a str, CaptionError> {
    let value = object
        .get(field)
        .ok_or_else(|| CaptionError::schema(format!("{}.{}", path, field), "missing required field"))?;

    value.as_str().ok_or_else(|| {
        CaptionError::schema(format!("{}.{}", path, field), format!("expected string, found {}", kind_of(value)))
    })
}

// Meta events must carry both a title and a guid
fn meta_str(object: &Map<String, Value>, index: usize, path: &str, field: &str) -> Result<String, CaptionError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(CaptionError::malformed(
            index,
            format!("meta event is missing \"{}\"", field),
        )),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(CaptionError::schema(
            format!("{}.{}", path, field),
            format!("expected string, found {}", kind_of(other)),
        )),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
