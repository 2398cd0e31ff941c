use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde_json::{Map, Value};

/// Parse a request body into a JSON object, dispatching on the Content-Type header.
pub async fn parse_request(headers: &HeaderMap, body: bytes::Bytes) -> Result<Value, String> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());

    if content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        parse_multipart(headers, body).await
    } else {
        parse_body(content_type, &body)
    }
}

/// Parse a non-multipart request body based on Content-Type header.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, String> {
    let ct = content_type.unwrap_or("application/json");

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
    } else if ct.contains("application/x-www-form-urlencoded") {
        Ok(parse_form_urlencoded(body))
    } else {
        // Try JSON first, then form-urlencoded
        Ok(serde_json::from_slice(body).unwrap_or_else(|_| parse_form_urlencoded(body)))
    }
}

/// Later occurrences of a key win. Invalid UTF-8 is replaced, never rejected.
fn parse_form_urlencoded(body: &[u8]) -> Value {
    Value::Object(
        form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
            .collect::<Map<_, _>>(),
    )
}

/// Parse multipart form data using multer.
pub async fn parse_multipart(headers: &HeaderMap, body: bytes::Bytes) -> Result<Value, String> {
    let boundary = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut map = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let name = field.name().unwrap_or("unknown").to_string();
        let value = field
            .text()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;
        map.insert(name, Value::String(value));
    }

    Ok(Value::Object(map))
}
