use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCategory {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
    pub min_threshold: f64,
    pub last_updated: DateTime<Utc>,
    pub consumed_today: f64,
    pub expiry_date: NaiveDate,
    pub cost: f64,
    pub supplier: String,
    pub lot_number: String,
}

/// Creation payload; the store assigns id, lastUpdated and consumedToday.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
    pub min_threshold: f64,
    pub expiry_date: NaiveDate,
    pub cost: f64,
    pub supplier: String,
    pub lot_number: String,
}

/// Partial update; only present fields are merged. lastUpdated is always
/// refreshed by the store.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct IngredientPatch {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub min_threshold: Option<f64>,
    pub expiry_date: Option<NaiveDate>,
    pub cost: Option<f64>,
    pub supplier: Option<String>,
    pub lot_number: Option<String>,
}

/// One recipe line: quantity of an ingredient per serving. Also used as the
/// consumption snapshot on service records, where quantity is the total
/// consumed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishIngredient {
    pub ingredient_id: String,
    pub quantity: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<DishIngredient>,
    pub price: f64,
    pub category: String,
    pub servings_today: u32,
    pub last_served: DateTime<Utc>,
    pub cost_per_serving: f64,
    pub profit_margin: f64,
}

/// Creation payload; the store assigns id, lastServed and servingsToday.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewDish {
    pub name: String,
    pub ingredients: Vec<DishIngredient>,
    pub price: f64,
    pub category: String,
    pub cost_per_serving: f64,
    pub profit_margin: f64,
}

/// A named time-of-day window; times are "HH:mm" strings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServicePeriod {
    pub id: String,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewServicePeriod {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

/// One serving event. Append-only: records are never updated or deleted,
/// and they keep referencing dishes that have since been removed. Quantity
/// and revenue are negative for corrections of mis-recorded servings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub period_id: String,
    pub dish_id: String,
    pub quantity: i32,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    pub ingredients_used: Vec<DishIngredient>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DishTally {
    pub name: String,
    pub servings: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionTally {
    pub name: String,
    pub consumed: f64,
    pub unit: String,
}

/// Daily roll-up: revenue over today's records plus the busiest dishes and
/// most-consumed ingredients.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    pub date: NaiveDate,
    pub total_revenue: f64,
    pub top_dishes: Vec<DishTally>,
    pub top_consumed: Vec<ConsumptionTally>,
}
