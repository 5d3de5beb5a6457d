use axum::{
    extract::State,
    response::Html,
    Form, Json,
};
use std::sync::Arc;

use super::HealthResponse;
use crate::api::routes::AppState;
use crate::demo::{self, DemoOutput, SynthesisParams};
use crate::error::AppError;
use crate::ui;

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(ui::render_page(
        state.config.title,
        state.hero.as_ref(),
        &SynthesisParams::default(),
        None,
    ))
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(params): Form<SynthesisParams>,
) -> Result<Html<String>, AppError> {
    params.validate()?;

    let output = demo::run(&params);

    Ok(Html(ui::render_page(
        state.config.title,
        state.hero.as_ref(),
        &params,
        Some(&output),
    )))
}

pub async fn run(Json(params): Json<SynthesisParams>) -> Result<Json<DemoOutput>, AppError> {
    params.validate()?;
    Ok(Json(demo::run(&params)))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
