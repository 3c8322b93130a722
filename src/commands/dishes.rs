use crate::models::{Dish, NewDish};
use crate::store::StoreExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_dishes(app: AppHandle) -> Result<Vec<Dish>, String> {
    app.store().dishes().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn add_dish(app: AppHandle, dish: NewDish) -> Result<Dish, String> {
    app.store().add_dish(dish).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_dish(app: AppHandle, id: String) -> Result<(), String> {
    app.store().delete_dish(&id).map_err(|e| e.to_string())
}

/// Per-serving cost of a dish's recipe; unknown dishes cost zero.
#[tauri::command]
#[allow(non_snake_case)]
pub fn get_recipe_cost(app: AppHandle, dishId: String) -> Result<f64, String> {
    app.store().recipe_cost(&dishId).map_err(|e| e.to_string())
}
