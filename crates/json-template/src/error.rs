use gstdoc_template_core::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonTemplateError {
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Template '{template}': {message}")]
    Compilation { template: String, message: String },

    #[error(transparent)]
    Definition(#[from] TemplateError),
}

impl From<JsonTemplateError> for TemplateError {
    fn from(err: JsonTemplateError) -> Self {
        match err {
            JsonTemplateError::JsonParse(e) => TemplateError::ParseError(e.to_string()),
            JsonTemplateError::Compilation { template, message } => {
                TemplateError::ParseError(format!("template '{}': {}", template, message))
            }
            JsonTemplateError::Definition(e) => e,
        }
    }
}
