use crate::models::{ServiceRecord, ServiceSummary};
use crate::store::StoreExt;
use tauri::AppHandle;

/// Record a serving delta for a dish: adjusts its daily count, appends a
/// service record and draws down ingredient stock. Negative deltas reverse
/// a mis-recorded serving. Unknown dishes yield `None`.
#[tauri::command]
#[allow(non_snake_case)]
pub fn record_servings(
    app: AppHandle,
    dishId: String,
    periodId: String,
    servings: i32,
) -> Result<Option<ServiceRecord>, String> {
    app.store()
        .record_servings(&dishId, &periodId, servings)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_service_records(app: AppHandle) -> Result<Vec<ServiceRecord>, String> {
    app.store().service_records().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_service_summary(app: AppHandle) -> Result<ServiceSummary, String> {
    app.store().service_summary().map_err(|e| e.to_string())
}

/// Zero the daily counters. Called by whoever decides the day is over;
/// the store itself never resets on a clock.
#[tauri::command]
pub fn reset_daily_tracking(app: AppHandle) -> Result<(), String> {
    app.store().reset_daily_tracking().map_err(|e| e.to_string())
}
