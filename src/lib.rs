mod commands;
mod error;
mod models;
mod storage;
mod store;


use commands::{categories, dishes, ingredients, periods, service};
use storage::KvStorage;
use store::InventoryStore;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .setup(|app| {
            let app_dir = app
                .path()
                .app_data_dir()
                .expect("Failed to get app data dir");

            std::fs::create_dir_all(&app_dir).expect("Failed to create app data directory");

            let storage = KvStorage::open(app_dir.join("kitchen_tracker.db"))
                .expect("Failed to open inventory storage");
            let store = InventoryStore::new(storage).expect("Failed to load inventory store");
            app.manage(store);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Categories
            categories::get_categories,
            // Ingredients
            ingredients::get_ingredients,
            ingredients::add_ingredient,
            ingredients::update_ingredient,
            ingredients::delete_ingredient,
            ingredients::get_low_stock,
            ingredients::get_expiring,
            // Dishes
            dishes::get_dishes,
            dishes::add_dish,
            dishes::delete_dish,
            dishes::get_recipe_cost,
            // Service periods
            periods::get_service_periods,
            periods::add_service_period,
            periods::delete_service_period,
            periods::get_current_period,
            // Service tracking
            service::record_servings,
            service::get_service_records,
            service::get_service_summary,
            service::reset_daily_tracking,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
