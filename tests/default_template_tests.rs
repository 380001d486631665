mod common;

use common::fixtures::{bolts, invoice};
use common::{TestResult, builtin_pipeline};
use gstdoc::registry::RegistryError;
use gstdoc::{PipelineError, TemplateId, TemplateSelector};
use std::sync::Arc;
use std::thread;

#[test]
fn test_exactly_one_default_listed() -> TestResult {
    let pipeline = builtin_pipeline()?;
    let entries = pipeline.list_templates();
    assert_eq!(entries.len(), 6);
    let defaults: Vec<_> = entries.iter().filter(|e| e.is_default).collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].definition.id.as_str(), "GST_TABULAR_A4A5_V1");
    Ok(())
}

#[test]
fn test_switching_default_changes_render() -> TestResult {
    let pipeline = builtin_pipeline()?;
    let input = invoice("27", vec![bolts()]);

    pipeline.set_default(&TemplateId::new("GST_DETAILED_A4_V1"))?;
    let doc = pipeline.render(&TemplateSelector::Default, &input, None)?;
    assert_eq!(doc.template.as_str(), "GST_DETAILED_A4_V1");

    let err = pipeline.set_default(&TemplateId::new("MISSING")).unwrap_err();
    assert!(matches!(err, PipelineError::Registry(RegistryError::NotFound(_))));
    assert_eq!(pipeline.template(&TemplateSelector::Default)?.id.as_str(), "GST_DETAILED_A4_V1");
    Ok(())
}

#[test]
fn test_concurrent_default_switching() -> TestResult {
    let pipeline = Arc::new(builtin_pipeline()?);
    let candidates = ["GST_DETAILED_A4_V1", "GST_SERVICES_A4_V1"];

    let handles: Vec<_> = candidates
        .iter()
        .map(|id| {
            let pipeline = Arc::clone(&pipeline);
            let id = TemplateId::new(*id);
            thread::spawn(move || {
                for _ in 0..200 {
                    pipeline.set_default(&id).expect("known template");
                    let current = pipeline.template(&TemplateSelector::Default).expect("default");
                    assert!(candidates.contains(&current.id.as_str()));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().map_err(|_| "worker panicked")?;
    }

    let defaults: Vec<_> = pipeline
        .list_templates()
        .into_iter()
        .filter(|e| e.is_default)
        .map(|e| e.definition.id.clone())
        .collect();
    assert_eq!(defaults.len(), 1);
    assert!(candidates.contains(&defaults[0].as_str()));
    Ok(())
}

#[test]
fn test_concurrent_renders_share_cache() -> TestResult {
    let pipeline = Arc::new(builtin_pipeline()?);
    let input = Arc::new(invoice("29", vec![bolts()]));
    let expected = pipeline.render(&TemplateSelector::Default, &input, None)?;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pipeline = Arc::clone(&pipeline);
            let input = Arc::clone(&input);
            thread::spawn(move || pipeline.render(&TemplateSelector::Default, &input, None))
        })
        .collect();
    for handle in handles {
        let doc = handle.join().map_err(|_| "worker panicked")??;
        assert_eq!(doc, expected);
    }
    Ok(())
}
