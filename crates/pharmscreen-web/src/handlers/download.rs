//! Report download endpoint.

use crate::state::SharedState;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

pub async fn download_report(State(state): State<SharedState>) -> Response {
    match tokio::fs::read(state.report_path()).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"output.csv\"",
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Html("<h1>output.csv not found</h1><p>Run an analysis first.</p>"),
        )
            .into_response(),
    }
}
