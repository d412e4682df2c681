use crate::foundation::error::{BoardError, BoardResult};
use crate::model::frame::{Frame, validate_animation};

/// Extract a frame sequence from free-form model output.
///
/// Accepts a bare JSON frame array, or an object carrying the array under `frames` or `data`.
/// Markdown code fences and surrounding prose are ignored; the outermost `[...]` or `{...}` span
/// is parsed.
pub fn parse_generated_frames(text: &str) -> BoardResult<Vec<Frame>> {
    let cleaned = text.replace("```json", "").replace("```", "");
    let json = outermost_json(cleaned.trim())
        .ok_or_else(|| BoardError::generator("model reply contains no JSON"))?;

    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| BoardError::generator(format!("model reply is not valid JSON: {e}")))?;
    let frames_value = match value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(mut obj) => obj
            .remove("frames")
            .or_else(|| obj.remove("data"))
            .ok_or_else(|| {
                BoardError::generator("model reply object has no `frames` or `data` field")
            })?,
        _ => return Err(BoardError::generator("model reply is not a frame list")),
    };

    let frames: Vec<Frame> = serde_json::from_value(frames_value)
        .map_err(|e| BoardError::generator(format!("model frames do not match schema: {e}")))?;
    validate_animation(&frames)
        .map_err(|e| BoardError::generator(format!("model frames rejected: {e}")))?;
    Ok(frames)
}

fn outermost_json(s: &str) -> Option<&str> {
    let open = s.find(['[', '{'])?;
    let close_char = if s[open..].starts_with('[') { ']' } else { '}' };
    let close = s.rfind(close_char)?;
    (close > open).then(|| &s[open..=close])
}

#[cfg(test)]
#[path = "../../tests/unit/generate/parse.rs"]
mod tests;
