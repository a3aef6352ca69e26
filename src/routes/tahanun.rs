//! The classification endpoint.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use tahanun_core::dates;

use crate::routes::bad_request;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(classify))
}

#[derive(Deserialize)]
struct ClassifyParams {
    date: Option<String>,
}

/// GET /?date=yyyy-mm-dd - classify a date (defaults to today, UTC).
///
/// The engine never errors: converter failures come back as a degraded
/// classification carrying only the date, which still serializes fine.
async fn classify(
    State(state): State<AppState>,
    Query(params): Query<ClassifyParams>,
) -> Response {
    let date = match params.date {
        Some(raw) => match dates::parse_gregorian(&raw) {
            Ok(d) => d,
            Err(_) => return bad_request("Date must be in the format yyyy-mm-dd"),
        },
        None => Utc::now().date_naive(),
    };

    let classification = state.engine.classify(date).await;
    if classification.tahanun.is_none() {
        eprintln!(
            "classify: converter lookup failed around {}; returning degraded result",
            classification.date
        );
    }

    Json(classification).into_response()
}
