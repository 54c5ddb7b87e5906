pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::render::handlers as export_handlers;
use crate::state::AppState;
use crate::suggestions::handlers as suggestion_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pagination preview — the same page structure every export consumes
        .route(
            "/api/v1/documents/paginate",
            post(export_handlers::handle_paginate),
        )
        // Export formats
        .route(
            "/api/v1/export/html",
            post(export_handlers::handle_export_html),
        )
        .route(
            "/api/v1/export/word",
            post(export_handlers::handle_export_word),
        )
        .route(
            "/api/v1/export/csv",
            post(export_handlers::handle_export_csv),
        )
        // LLM suggestions
        .route(
            "/api/v1/suggestions/item-description",
            post(suggestion_handlers::handle_item_description),
        )
        .route(
            "/api/v1/suggestions/terms",
            post(suggestion_handlers::handle_terms_suggestion),
        )
        .route(
            "/api/v1/suggestions/calculator",
            post(suggestion_handlers::handle_calculator),
        )
        .with_state(state)
}
