use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum AnimatorError {
    InvalidConfig(String),
    UnknownPreset(String),
    ContextUnavailable,
    Js(String),
}

impl fmt::Display for AnimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimatorError::InvalidConfig(reason) => write!(f, "invalid field config: {}", reason),
            AnimatorError::UnknownPreset(name) => write!(f, "unknown preset '{}'", name),
            AnimatorError::ContextUnavailable => write!(f, "2d drawing context unavailable"),
            AnimatorError::Js(message) => write!(f, "javascript error: {}", message),
        }
    }
}

impl std::error::Error for AnimatorError {}

impl From<JsValue> for AnimatorError {
    fn from(value: JsValue) -> Self {
        AnimatorError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<AnimatorError> for JsValue {
    fn from(err: AnimatorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = AnimatorError::InvalidConfig("density must be positive".to_owned());
        assert_eq!(err.to_string(), "invalid field config: density must be positive");
        assert_eq!(
            AnimatorError::UnknownPreset("neon".to_owned()).to_string(),
            "unknown preset 'neon'"
        );
    }
}
