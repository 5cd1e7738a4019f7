use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/gift/open", post(handlers::open_gift_page))
        .route("/menu/reset-calendar", post(handlers::reset_calendar_page))
        .route("/menu/reset-day", post(handlers::reset_day_page))
        .route("/menu/used", get(handlers::used_page))
        .route("/api/today", get(handlers::get_today))
        .route("/api/open", post(handlers::open_gift))
        .route("/api/reset-calendar", post(handlers::reset_calendar))
        .route("/api/reset-day", post(handlers::reset_day))
        .route("/api/used", get(handlers::get_used))
        .route("/api/test/reset-advent", post(handlers::reset_advent))
        .with_state(state)
}
