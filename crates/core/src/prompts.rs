//! Prompt catalog for fitness-progress transformations.
//!
//! Every [`Period`] maps to exactly one instruction string. The strings are
//! rendered once from a shared template when the catalog is built and are
//! never mutated afterwards; share the catalog behind an `Arc`.

use std::collections::HashMap;

use crate::period::Period;

/// Period-specific knobs substituted into the shared template.
struct ProgressProfile {
    body_fat_reduction: &'static str,
    definition: &'static str,
    focus: &'static str,
}

fn profile(period: Period) -> ProgressProfile {
    match period {
        Period::ThreeMonths => ProgressProfile {
            body_fat_reduction: "3-5%",
            definition: "subtle",
            focus: "slightly slimmer waist, more toned arms, improved posture",
        },
        Period::FourMonths => ProgressProfile {
            body_fat_reduction: "5-7%",
            definition: "moderate",
            focus: "noticeably slimmer waist, toned arms and shoulders, improved overall physique",
        },
        Period::SixMonths => ProgressProfile {
            body_fat_reduction: "7-10%",
            definition: "clear",
            focus: "significantly slimmer waist, well-defined arms and shoulders, \
                    visible core definition, improved overall body composition",
        },
    }
}

fn render(period: Period) -> String {
    let months = period.months();
    let ProgressProfile {
        body_fat_reduction,
        definition,
        focus,
    } = profile(period);

    format!(
        "This is a photo of a person at a personal training gym.
Please edit this image to show how this person would naturally look after {months} months of:
- Regular personal training (3 times per week)
- Balanced diet with proper nutrition
- Adequate sleep and recovery

Guidelines for the transformation:
- Reduce body fat by approximately {body_fat_reduction} visibly
- Show {definition} muscle definition improvement
- Keep the transformation realistic and achievable
- Maintain the same pose, clothing, background, and lighting
- The face and identity must remain exactly the same
- Do NOT make extreme changes - the result should be believable as a {months}-month progress
- Focus on: {focus}
"
    )
}

/// Immutable mapping from [`Period`] to its transformation prompt.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    prompts: HashMap<Period, String>,
}

impl PromptCatalog {
    /// Render the prompt for every supported period.
    pub fn new() -> Self {
        let prompts = Period::ALL
            .into_iter()
            .map(|period| (period, render(period)))
            .collect();
        Self { prompts }
    }

    /// Prompt for a known period.
    pub fn get(&self, period: Period) -> &str {
        // `new` renders every member of `Period::ALL`.
        &self.prompts[&period]
    }

    /// Prompt for a wire identifier; unknown or missing identifiers get the
    /// default period's prompt. Returns the period that was actually used.
    pub fn resolve(&self, id: Option<&str>) -> (Period, &str) {
        let period = Period::resolve(id);
        (period, self.get(period))
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::new()
    }
}
