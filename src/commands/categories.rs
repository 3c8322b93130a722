use crate::models::IngredientCategory;
use crate::store::default_categories;
use tauri::AppHandle;

// Categories are seed data; there is nothing to create or delete.
#[tauri::command]
pub fn get_categories(_app: AppHandle) -> Result<Vec<IngredientCategory>, String> {
    Ok(default_categories())
}
