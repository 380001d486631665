use gstdoc_types::PaperSize;

/// How tax computation and validation are scheduled relative to each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Run validation, then tax computation, on the calling thread.
    Sequential,
    /// Run both concurrently with `rayon::join` (falls back to sequential
    /// without the `rayon-executor` feature).
    #[default]
    Parallel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Reject an invoice with any validation issue before assembly. When off,
    /// issues are logged as warnings and the document is still produced.
    pub strict_validation: bool,
    /// Resolve every template when the pipeline is built.
    pub preflight: bool,
    /// Paper size used when a request does not name one.
    pub default_paper: PaperSize,
    pub execution: ExecutionMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            strict_validation: true,
            preflight: true,
            default_paper: PaperSize::A4,
            execution: ExecutionMode::default(),
        }
    }
}
