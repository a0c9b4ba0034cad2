use axum::{extract::State, response::IntoResponse};

use crate::web::server::AppState;

use super::templates::DashboardTemplate;

pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let refresh_ms = state.refresh.as_millis() as u64;
    DashboardTemplate {
        satellite: state.satellite.clone(),
        refresh_ms,
        // Older than three missed refreshes counts as stale.
        stale_after_ms: refresh_ms * 3,
    }
}
