//! Auto-fill use case

use thiserror::Error;

use crate::domain::brief::ContentDescription;

use super::ports::{ContentPlan, ContentPlanner, PlanSource, PlannerError};

/// Errors from the auto-fill use case
#[derive(Debug, Error)]
pub enum AutofillError {
    #[error("Topic must not be empty")]
    EmptyTopic,

    #[error("Attached file is empty")]
    EmptyAttachment,

    #[error("Planning failed: {0}")]
    Planning(#[from] PlannerError),
}

/// One-shot content planning use case.
///
/// Validates the source, asks the planner for a content plan once, and
/// merges the plan over the prior description. On any failure the prior
/// description is left untouched.
pub struct AutofillUseCase<P: ContentPlanner> {
    planner: P,
}

impl<P: ContentPlanner> AutofillUseCase<P> {
    pub fn new(planner: P) -> Self {
        Self { planner }
    }

    /// Execute the auto-fill workflow
    pub async fn execute(
        &self,
        source: &PlanSource,
        base: &ContentDescription,
    ) -> Result<ContentDescription, AutofillError> {
        validate_source(source)?;
        let plan = self.planner.plan(source).await?;
        Ok(apply_plan(plan, base))
    }
}

/// Reject unusable sources before any network call
fn validate_source(source: &PlanSource) -> Result<(), AutofillError> {
    match source {
        PlanSource::Topic(topic) if topic.trim().is_empty() => Err(AutofillError::EmptyTopic),
        PlanSource::Pdf(data) | PlanSource::Image(data) if data.is_empty() => {
            Err(AutofillError::EmptyAttachment)
        }
        _ => Ok(()),
    }
}

/// Merge a plan over the prior description, field by field.
/// Blank or missing plan fields keep the prior value, except that
/// `purpose` and `sources` fall back to fixed defaults and
/// `enhanced_quality` always resets.
fn apply_plan(plan: ContentPlan, base: &ContentDescription) -> ContentDescription {
    let mut merged = base.clone();

    merged.title = nonblank_or(plan.title, &base.title);
    merged.subtitle = nonblank_or(plan.subtitle, &base.subtitle);
    merged.main_subject = nonblank_or(plan.main_subject, &base.main_subject);
    merged.main_attribute = nonblank_or(plan.main_attribute, &base.main_attribute);
    merged.purpose = nonblank_or(plan.purpose, "education");
    merged.sources = nonblank_or(plan.sources, "Rojudin");

    if let Some(sections) = plan.sections {
        if !sections.is_empty() {
            merged.sections = sections;
        }
    }
    if let Some(panels) = plan.side_panels {
        merged.side_panels = panels;
    }
    if let Some(high_accuracy) = plan.requires_high_accuracy {
        merged.high_accuracy = high_accuracy;
    }
    merged.enhanced_quality = false;

    merged.sanitize();
    merged
}

fn nonblank_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback.to_string(),
    }
}
