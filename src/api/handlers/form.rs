//! Browser form handlers.
//!
//! Every post applies the submitted fields and the pressed button, then
//! redirects back to the page.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{Html, Redirect},
};

use crate::api::state::AppState;
use crate::api::view::render_page;
use crate::domain::ActionForm;
use crate::error::{AppError, Result};

/// Render the ID generator page.
///
/// # Errors
///
/// Returns an error if the page cannot be rendered.
pub async fn page(State(state): State<AppState>) -> Result<Html<String>> {
    let (snapshot, ids) = state.generator.view();
    let html = render_page(&snapshot, &ids, state.config.assets.enabled)
        .map_err(|err| AppError::Internal(format!("page rendering failed: {err}")))?;
    Ok(Html(html))
}

/// Apply a form submission.
///
/// # Errors
///
/// Returns an error if the body is not a valid form or the counter cannot advance.
pub async fn submit_action(
    State(state): State<AppState>,
    form: std::result::Result<Form<ActionForm>, FormRejection>,
) -> Result<Redirect> {
    let Form(submission) = form?;
    state.generator.submit_action(submission)?;
    Ok(Redirect::to("/"))
}
