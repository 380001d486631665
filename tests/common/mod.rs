pub mod fixtures;

use gstdoc::{InvoicePipeline, PipelineBuilder, PipelineError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A pipeline over the built-in catalog with default configuration.
pub fn builtin_pipeline() -> Result<InvoicePipeline, PipelineError> {
    init_logger();
    PipelineBuilder::new().with_builtin_templates().build()
}
