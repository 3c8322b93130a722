use crate::models::{NewServicePeriod, ServicePeriod};
use crate::store::StoreExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_service_periods(app: AppHandle) -> Result<Vec<ServicePeriod>, String> {
    app.store().service_periods().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn add_service_period(
    app: AppHandle,
    period: NewServicePeriod,
) -> Result<ServicePeriod, String> {
    app.store()
        .add_service_period(period)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_service_period(app: AppHandle, id: String) -> Result<(), String> {
    app.store()
        .delete_service_period(&id)
        .map_err(|e| e.to_string())
}

/// The period whose window contains the current time of day, if any.
#[tauri::command]
pub fn get_current_period(app: AppHandle) -> Result<Option<ServicePeriod>, String> {
    app.store().current_period().map_err(|e| e.to_string())
}
