//! HTML form page routes
//!
//! The display mode comes from the request (query string or hidden form
//! field) and falls back to the configured default.

use crate::error::ApiError;
use crate::render::{render_page, DisplayMode, Outcome, PageView};
use crate::services::CalculatorService;
use crate::state::AppState;
use axum::{
    extract::{rejection::FormRejection, Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use calorie_advisor_shared::{ActivityLevel, CalculateRequest, Gender, Goal};
use serde::Deserialize;
use tracing::info;

/// Query parameters for the page
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub mode: Option<DisplayMode>,
}

/// Submitted form fields
///
/// Spelled out rather than flattening `CalculateRequest`: flattened
/// url-encoded fields lose their numeric types.
#[derive(Debug, Deserialize)]
pub struct CalculatorForm {
    pub gender: Gender,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub mode: Option<DisplayMode>,
}

impl CalculatorForm {
    fn to_request(&self) -> CalculateRequest {
        CalculateRequest {
            gender: self.gender,
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            activity_level: self.activity_level,
            goal: self.goal,
        }
    }
}

/// GET / - Empty calculator form
pub async fn show_form(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    let ui = &state.config().ui;
    let mode = query.mode.unwrap_or(ui.default_display_mode);

    Html(render_page(&PageView {
        title: &ui.page_title,
        mode,
        form: None,
        outcome: Outcome::Prompt,
    }))
}

/// POST / - Calculate from the submitted form and re-render the page
///
/// Values that don't even parse (negative or fractional ages, empty
/// fields) get the same invalid-input page as out-of-range numbers.
pub async fn submit_form(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    payload: Result<Form<CalculatorForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let ui = &state.config().ui;

    let form = match payload {
        Ok(Form(form)) => form,
        Err(rejection) => {
            info!(reason = %rejection.body_text(), "Rejected unparseable form submission");
            let html = render_page(&PageView {
                title: &ui.page_title,
                mode: query.mode.unwrap_or(ui.default_display_mode),
                form: None,
                outcome: Outcome::Invalid { field: None },
            });
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(html));
        }
    };

    let mode = form.mode.or(query.mode).unwrap_or(ui.default_display_mode);
    let request = form.to_request();

    match CalculatorService::calculate(request.clone()) {
        Ok(response) => {
            let html = render_page(&PageView {
                title: &ui.page_title,
                mode,
                form: Some(&request),
                outcome: Outcome::Results(&response),
            });
            (StatusCode::OK, Html(html))
        }
        Err(err) => {
            let field = match &err {
                ApiError::Validation(e) => Some(e.field()),
                ApiError::BadRequest(_) => None,
            };
            let html = render_page(&PageView {
                title: &ui.page_title,
                mode,
                form: Some(&request),
                outcome: Outcome::Invalid { field },
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Html(html))
        }
    }
}
