use crate::models::{Ingredient, IngredientPatch, NewIngredient};
use crate::store::StoreExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_ingredients(app: AppHandle) -> Result<Vec<Ingredient>, String> {
    app.store().ingredients().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn add_ingredient(app: AppHandle, ingredient: NewIngredient) -> Result<Ingredient, String> {
    app.store()
        .add_ingredient(ingredient)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn update_ingredient(
    app: AppHandle,
    id: String,
    patch: IngredientPatch,
) -> Result<Option<Ingredient>, String> {
    app.store()
        .update_ingredient(&id, patch)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_ingredient(app: AppHandle, id: String) -> Result<(), String> {
    app.store().delete_ingredient(&id).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_low_stock(app: AppHandle) -> Result<Vec<Ingredient>, String> {
    app.store()
        .low_stock_ingredients()
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_expiring(app: AppHandle) -> Result<Vec<Ingredient>, String> {
    app.store()
        .expiring_ingredients()
        .map_err(|e| e.to_string())
}
