//! Per-step validation for the campaign draft wizard.
//!
//! Each step's payload is validated independently; forward navigation is
//! gated on the current step only, while launch requires every required
//! step to pass. Validation errors are user-fixable, reported per field,
//! and never persisted or sent over the network.

use crate::{
    error::FieldError,
    models::{StepData, WizardStep},
};

/// Validation outcome for a single step.
pub type StepValidation = std::result::Result<(), Vec<FieldError>>;

/// Runs the validator for one step against the draft's step data.
///
/// The `review` step has no payload of its own; it passes exactly when
/// every other step passes.
pub fn validate_step(step: WizardStep, data: &StepData) -> StepValidation {
    match step {
        WizardStep::Basics => validate_basics(data),
        WizardStep::Media => validate_media(data),
        WizardStep::Financials => validate_financials(data),
        WizardStep::Team => validate_team(data),
        WizardStep::Risks => validate_risks(data),
        WizardStep::Review => match validate_all(data) {
            Ok(()) => Ok(()),
            Err(failures) => Err(failures.into_iter().flat_map(|(_, fields)| fields).collect()),
        },
    }
}

/// Validates every payload-bearing step, collecting failures per step.
pub fn validate_all(
    data: &StepData,
) -> std::result::Result<(), Vec<(WizardStep, Vec<FieldError>)>> {
    let mut failures = Vec::new();

    for step in [
        WizardStep::Basics,
        WizardStep::Media,
        WizardStep::Financials,
        WizardStep::Team,
        WizardStep::Risks,
    ] {
        if let Err(fields) = validate_step(step, data) {
            failures.push((step, fields));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}

fn require_text(errors: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    }
}

fn finish(errors: Vec<FieldError>) -> StepValidation {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_basics(data: &StepData) -> StepValidation {
    let basics = &data.basics;
    let mut errors = Vec::new();

    require_text(&mut errors, "basics.title", &basics.title);
    require_text(&mut errors, "basics.description", &basics.description);
    require_text(&mut errors, "basics.category", &basics.category);
    require_text(&mut errors, "basics.location", &basics.location);
    require_text(&mut errors, "basics.problem", &basics.problem);
    require_text(&mut errors, "basics.solution", &basics.solution);

    finish(errors)
}

fn validate_media(data: &StepData) -> StepValidation {
    let mut errors = Vec::new();

    if data.media.is_empty() {
        errors.push(FieldError::new("media", "at least one media item is required"));
    }
    for (i, item) in data.media.iter().enumerate() {
        require_text(&mut errors, &format!("media[{i}].url"), &item.url);
    }

    finish(errors)
}

fn validate_financials(data: &StepData) -> StepValidation {
    let financials = &data.financials;
    let mut errors = Vec::new();

    if financials.funding_target == 0 {
        errors.push(FieldError::new(
            "financials.funding_target",
            "must be greater than zero",
        ));
    }
    if financials.milestones.is_empty() {
        errors.push(FieldError::new(
            "financials.milestones",
            "at least one milestone is required",
        ));
    }
    for (i, milestone) in financials.milestones.iter().enumerate() {
        require_text(
            &mut errors,
            &format!("financials.milestones[{i}].title"),
            &milestone.title,
        );
        if milestone.amount == 0 {
            errors.push(FieldError::new(
                format!("financials.milestones[{i}].amount"),
                "must be greater than zero",
            ));
        }
    }

    finish(errors)
}

fn validate_team(data: &StepData) -> StepValidation {
    let mut errors = Vec::new();

    if data.team.is_empty() {
        errors.push(FieldError::new("team", "at least one team member is required"));
    }
    for (i, member) in data.team.iter().enumerate() {
        require_text(&mut errors, &format!("team[{i}].name"), &member.name);
        require_text(&mut errors, &format!("team[{i}].role"), &member.role);
        require_text(&mut errors, &format!("team[{i}].bio"), &member.bio);
    }

    finish(errors)
}

fn validate_risks(data: &StepData) -> StepValidation {
    let mut errors = Vec::new();

    if data.risks.is_empty() {
        errors.push(FieldError::new("risks", "at least one risk is required"));
    }
    for (i, risk) in data.risks.iter().enumerate() {
        require_text(&mut errors, &format!("risks[{i}].category"), &risk.category);
        require_text(
            &mut errors,
            &format!("risks[{i}].description"),
            &risk.description,
        );
        require_text(
            &mut errors,
            &format!("risks[{i}].mitigation"),
            &risk.mitigation,
        );
    }

    finish(errors)
}
