use crate::controller::{CalendarController, Reveal, ResetOutcome, UsedListing, View};
use crate::date_key::DateKey;
use crate::errors::{AppError, CalendarError};
use crate::models::{ConfirmRequest, ResetResponse, UsedResponse};
use crate::state::AppState;
use crate::storage::persist_store;
use crate::store::StoreData;
use crate::ui::render_index;
use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut store = state.store.lock().await;
    let controller = CalendarController::init(&mut *store, DateKey::today());
    Html(render_index(controller.view()))
}

pub async fn get_today(State(state): State<AppState>) -> Json<View> {
    let mut store = state.store.lock().await;
    Json(CalendarController::init(&mut *store, DateKey::today()).into_view())
}

pub async fn open_gift_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (view, _) = apply_open(&state).await?;
    Ok(Html(render_index(&view)))
}

pub async fn open_gift(State(state): State<AppState>) -> Result<(StatusCode, Json<View>), AppError> {
    let (view, result) = apply_open(&state).await?;
    let status = match result {
        Ok(_) => StatusCode::OK,
        Err(err) => AppError::from(err).status,
    };
    Ok((status, Json(view)))
}

pub async fn reset_calendar_page(
    State(state): State<AppState>,
    Form(payload): Form<ConfirmRequest>,
) -> Result<Redirect, AppError> {
    apply_reset_calendar(&state, payload.confirm).await?;
    Ok(Redirect::to("/"))
}

pub async fn reset_calendar(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmRequest>,
) -> Result<Json<ResetResponse>, AppError> {
    let outcome = apply_reset_calendar(&state, payload.confirm).await?;
    Ok(Json(ResetResponse { outcome, alert: None }))
}

pub async fn reset_day_page(
    State(state): State<AppState>,
    Form(payload): Form<ConfirmRequest>,
) -> Result<Response, AppError> {
    let (outcome, view) = apply_reset_day(&state, payload.confirm).await?;
    if outcome == ResetOutcome::NothingToReset {
        return Ok(Html(render_index(&view)).into_response());
    }
    Ok(Redirect::to("/").into_response())
}

pub async fn reset_day(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmRequest>,
) -> Result<Json<ResetResponse>, AppError> {
    let (outcome, view) = apply_reset_day(&state, payload.confirm).await?;
    Ok(Json(ResetResponse {
        outcome,
        alert: view.alert,
    }))
}

pub async fn used_page(State(state): State<AppState>) -> Html<String> {
    let (_, view) = apply_list_used(&state).await;
    Html(render_index(&view))
}

pub async fn get_used(State(state): State<AppState>) -> Result<Json<UsedResponse>, AppError> {
    let (listing, _) = apply_list_used(&state).await;
    let text = listing.alert_text();
    let sentences = match listing {
        UsedListing::Empty => Vec::new(),
        UsedListing::Entries(entries) => entries,
        UsedListing::Unavailable => {
            return Err(AppError {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: text,
            });
        }
    };
    Ok(Json(UsedResponse { sentences, text }))
}

/// Hook for automated tests: forgets today's reveal but keeps the used indices.
pub async fn reset_advent(State(state): State<AppState>) -> Result<Json<View>, AppError> {
    let mut store = state.store.lock().await;
    let mut next = store.clone();
    let mut controller = CalendarController::init(&mut next, DateKey::today());
    controller.reset_today_state();
    let view = controller.into_view();
    commit(&state, &mut store, next).await?;
    Ok(Json(view))
}

async fn apply_open(state: &AppState) -> Result<(View, Result<Reveal, CalendarError>), AppError> {
    let mut store = state.store.lock().await;
    let mut next = store.clone();
    let mut rng = StdRng::from_entropy();
    let mut controller = CalendarController::init(&mut next, DateKey::today());
    let result = controller.open_gift(&state.sentences, &mut rng).await;
    let view = controller.into_view();
    commit(state, &mut store, next).await?;
    Ok((view, result))
}

async fn apply_reset_calendar(state: &AppState, confirmed: bool) -> Result<ResetOutcome, AppError> {
    let mut store = state.store.lock().await;
    let mut next = store.clone();
    let outcome = CalendarController::init(&mut next, DateKey::today()).reset_calendar(confirmed);
    commit(state, &mut store, next).await?;
    Ok(outcome)
}

async fn apply_reset_day(state: &AppState, confirmed: bool) -> Result<(ResetOutcome, View), AppError> {
    let mut store = state.store.lock().await;
    let mut next = store.clone();
    let mut controller = CalendarController::init(&mut next, DateKey::today());
    let outcome = controller.reset_today(confirmed)?;
    let view = controller.into_view();
    commit(state, &mut store, next).await?;
    Ok((outcome, view))
}

async fn apply_list_used(state: &AppState) -> (UsedListing, View) {
    let mut store = state.store.lock().await;
    let mut controller = CalendarController::init(&mut *store, DateKey::today());
    let listing = controller.list_used(&state.sentences).await;
    (listing, controller.into_view())
}

/// Writes `next` to disk and only then swaps it in, so a failed write leaves
/// memory matching the file.
async fn commit(state: &AppState, store: &mut StoreData, next: StoreData) -> Result<(), AppError> {
    if *store == next {
        return Ok(());
    }
    persist_store(&state.store_path, &next).await?;
    *store = next;
    Ok(())
}
