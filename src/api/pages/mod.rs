//! Form page handlers
//!
//! `GET /` renders the empty form. `POST /` is the single submit action: it
//! runs the whole recommendation and renders the form again with the outcome
//! below it, so a failed submission can be corrected and resubmitted.

mod render;

pub use render::{escape_html, render_page, Outcome};

use std::collections::HashMap;

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form,
};
use tracing::warn;

use crate::api::state::AppState;
use crate::api::types::status_for;
use crate::domain::{RecommendationInput, NUMERIC_FIELDS};

/// GET /
pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    let input = state.recommender.default_input();

    Html(render_page(&state.form_options(), &input, None))
}

/// POST /
pub async fn submit_form(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let options = state.form_options();
    let defaults = state.recommender.default_input();

    let (input, problems) = match form {
        Ok(Form(fields)) => read_submission(&fields, defaults),
        Err(rejection) => (defaults, vec![rejection.body_text()]),
    };

    if !problems.is_empty() {
        let message = problems.join("; ");
        warn!(error = %message, "Rejected malformed form submission");

        let outcome = Outcome::Failure(format!("Invalid form submission: {}", message));
        let page = render_page(&options, &input, Some(&outcome));

        return (StatusCode::BAD_REQUEST, Html(page));
    }

    let (status, outcome) = match state.recommend(&input) {
        Ok(recommendation) => (StatusCode::OK, Outcome::Success(recommendation)),
        Err(err) => (status_for(&err), Outcome::Failure(err.to_string())),
    };

    (status, Html(render_page(&options, &input, Some(&outcome))))
}

/// Reads the posted fields over `input`. Missing or unparseable fields keep
/// their default and are listed in the returned problems.
fn read_submission(
    fields: &HashMap<String, String>,
    mut input: RecommendationInput,
) -> (RecommendationInput, Vec<String>) {
    let mut problems = Vec::new();

    for (name, target) in [
        ("soil_color", &mut input.soil_color),
        ("crop", &mut input.crop),
    ] {
        match fields.get(name) {
            Some(value) => *target = value.clone(),
            None => problems.push(format!("missing field `{}`", name)),
        }
    }

    for field in NUMERIC_FIELDS {
        let Some(raw) = fields.get(field.name) else {
            problems.push(format!("missing field `{}`", field.name));
            continue;
        };

        match raw.trim().parse::<f64>() {
            Ok(value) => {
                if let Some(slot) = input.numeric_mut(field.name) {
                    *slot = value;
                }
            }
            Err(_) => problems.push(format!("{} is not a number: '{}'", field.label, raw)),
        }
    }

    (input, problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn defaults() -> RecommendationInput {
        RecommendationInput::with_defaults("Black", "Cotton")
    }

    #[test]
    fn test_complete_submission_parses() {
        let (input, problems) = read_submission(
            &fields(&[
                ("soil_color", "Red"),
                ("nitrogen", "80"),
                ("phosphorus", "40"),
                ("potassium", "40"),
                ("ph", "6.5"),
                ("rainfall", "200.0"),
                ("temperature", "-5"),
                ("crop", "Wheat"),
            ]),
            defaults(),
        );

        assert!(problems.is_empty());
        assert_eq!(input.soil_color, "Red");
        assert_eq!(input.nitrogen, 80.0);
        assert_eq!(input.temperature, -5.0);
        assert_eq!(input.crop, "Wheat");
    }

    #[test]
    fn test_bad_number_keeps_entered_values() {
        let (input, problems) = read_submission(
            &fields(&[
                ("soil_color", "Red"),
                ("nitrogen", "lots"),
                ("phosphorus", "40"),
                ("potassium", "40"),
                ("ph", "6.5"),
                ("rainfall", "200.0"),
                ("temperature", "25"),
                ("crop", "Wheat"),
            ]),
            defaults(),
        );

        assert_eq!(problems, vec!["Nitrogen (ppm) is not a number: 'lots'".to_string()]);
        assert_eq!(input.soil_color, "Red");
        assert_eq!(input.nitrogen, 0.0);
        assert_eq!(input.ph, 6.5);
        assert_eq!(input.crop, "Wheat");
    }

    #[test]
    fn test_missing_fields_reported() {
        let (input, problems) = read_submission(&fields(&[("ph", "7")]), defaults());

        assert_eq!(problems.len(), 7);
        assert!(problems.contains(&"missing field `crop`".to_string()));
        assert_eq!(input.ph, 7.0);
        assert_eq!(input.soil_color, "Black");
    }
}
