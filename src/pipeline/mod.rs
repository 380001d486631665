//! Invoice pipeline orchestration.
//!
//! Template Registry → Inheritance Resolver → (Tax ∥ Validation) → Assembler.
//!
//! - [`PipelineBuilder`]: loads templates and configuration
//! - [`InvoicePipeline`]: renders invoices into [`ResolvedDocument`](gstdoc_core::ResolvedDocument)s
//!
//! # Example
//!
//! ```ignore
//! use gstdoc::{PipelineBuilder, TemplateSelector};
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_builtin_templates()
//!     .with_template_dir("templates")?
//!     .build()?;
//!
//! let document = pipeline.render(&TemplateSelector::Default, &input, None)?;
//! ```

mod builder;
pub mod config;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::{ExecutionMode, PipelineConfig};
pub use orchestrator::{InvoicePipeline, TemplateSelector};
