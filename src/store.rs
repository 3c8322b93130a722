use std::cmp::Ordering;
use std::sync::{Mutex, MutexGuard};

use chrono::{Local, NaiveDate, NaiveTime, Utc};
use tauri::{AppHandle, Manager};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{
    ConsumptionTally, Dish, DishIngredient, DishTally, Ingredient, IngredientCategory,
    IngredientPatch, NewDish, NewIngredient, NewServicePeriod, ServicePeriod, ServiceRecord,
    ServiceSummary,
};
use crate::storage::{KvStorage, DISHES_KEY, INGREDIENTS_KEY, SERVICE_RECORDS_KEY};

/// Ingredients expiring within this many days count as "expiring soon".
const EXPIRY_WINDOW_DAYS: i64 = 7;

/// Entries shown in each service summary ranking.
const SUMMARY_TOP_N: usize = 5;

/// The fixed category set; categories are seed data, not user-editable.
pub fn default_categories() -> Vec<IngredientCategory> {
    ["Vegetables", "Meat", "Dairy", "Dry Goods", "Spices"]
        .iter()
        .enumerate()
        .map(|(i, name)| IngredientCategory {
            id: (i + 1).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

/// Default service periods seeded at startup. Periods live in memory only,
/// so these come back after every restart.
pub fn default_service_periods() -> Vec<ServicePeriod> {
    vec![
        ServicePeriod {
            id: "1".to_string(),
            name: "Breakfast".to_string(),
            start_time: "06:00".to_string(),
            end_time: "11:00".to_string(),
        },
        ServicePeriod {
            id: "2".to_string(),
            name: "Lunch".to_string(),
            start_time: "11:00".to_string(),
            end_time: "15:00".to_string(),
        },
        ServicePeriod {
            id: "3".to_string(),
            name: "Dinner".to_string(),
            start_time: "17:00".to_string(),
            end_time: "23:00".to_string(),
        },
    ]
}

struct StoreInner {
    storage: KvStorage,
    ingredients: Vec<Ingredient>,
    dishes: Vec<Dish>,
    service_periods: Vec<ServicePeriod>,
    service_records: Vec<ServiceRecord>,
}

impl StoreInner {
    fn save_ingredients(&self) -> Result<(), StoreError> {
        self.storage.save(INGREDIENTS_KEY, &self.ingredients)
    }

    fn save_dishes(&self) -> Result<(), StoreError> {
        self.storage.save(DISHES_KEY, &self.dishes)
    }

    fn save_records(&self) -> Result<(), StoreError> {
        self.storage.save(SERVICE_RECORDS_KEY, &self.service_records)
    }
}

/// All mutable restaurant state. Holds the collections in memory, persists
/// every change through [`KvStorage`], and answers the derived queries
/// (current period, low stock, expiring soon, recipe cost, daily summary).
///
/// Each operation takes the inner lock exactly once, so multi-collection
/// mutations like [`InventoryStore::record_servings`] are never partially
/// visible to readers.
pub struct InventoryStore {
    inner: Mutex<StoreInner>,
}

impl InventoryStore {
    /// Load persisted state. Malformed stored collections come back empty
    /// (see [`KvStorage::load`]); service periods are re-seeded with the
    /// defaults.
    pub fn new(storage: KvStorage) -> Result<Self, StoreError> {
        storage.initialize()?;

        let ingredients = storage.load(INGREDIENTS_KEY);
        let dishes = storage.load(DISHES_KEY);
        let service_records = storage.load(SERVICE_RECORDS_KEY);

        Ok(InventoryStore {
            inner: Mutex::new(StoreInner {
                storage,
                ingredients,
                dishes,
                service_periods: default_service_periods(),
                service_records,
            }),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::Poisoned)
    }

    // ----- reads -----

    pub fn ingredients(&self) -> Result<Vec<Ingredient>, StoreError> {
        Ok(self.lock()?.ingredients.clone())
    }

    pub fn dishes(&self) -> Result<Vec<Dish>, StoreError> {
        Ok(self.lock()?.dishes.clone())
    }

    pub fn service_periods(&self) -> Result<Vec<ServicePeriod>, StoreError> {
        Ok(self.lock()?.service_periods.clone())
    }

    pub fn service_records(&self) -> Result<Vec<ServiceRecord>, StoreError> {
        Ok(self.lock()?.service_records.clone())
    }

    // ----- ingredients -----

    /// Append a new ingredient with a fresh id and zeroed daily consumption.
    /// Duplicate names are allowed.
    pub fn add_ingredient(&self, new: NewIngredient) -> Result<Ingredient, StoreError> {
        let mut inner = self.lock()?;

        let ingredient = Ingredient {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            quantity: new.quantity,
            unit: new.unit,
            category: new.category,
            min_threshold: new.min_threshold,
            last_updated: Utc::now(),
            consumed_today: 0.0,
            expiry_date: new.expiry_date,
            cost: new.cost,
            supplier: new.supplier,
            lot_number: new.lot_number,
        };

        inner.ingredients.push(ingredient.clone());
        inner.save_ingredients()?;
        Ok(ingredient)
    }

    /// Merge patch fields into the matching ingredient and refresh its
    /// lastUpdated stamp. An unknown id is a no-op returning `None`.
    pub fn update_ingredient(
        &self,
        id: &str,
        patch: IngredientPatch,
    ) -> Result<Option<Ingredient>, StoreError> {
        let mut inner = self.lock()?;

        let Some(ing) = inner.ingredients.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            ing.name = name;
        }
        if let Some(quantity) = patch.quantity {
            ing.quantity = quantity;
        }
        if let Some(unit) = patch.unit {
            ing.unit = unit;
        }
        if let Some(category) = patch.category {
            ing.category = category;
        }
        if let Some(min_threshold) = patch.min_threshold {
            ing.min_threshold = min_threshold;
        }
        if let Some(expiry_date) = patch.expiry_date {
            ing.expiry_date = expiry_date;
        }
        if let Some(cost) = patch.cost {
            ing.cost = cost;
        }
        if let Some(supplier) = patch.supplier {
            ing.supplier = supplier;
        }
        if let Some(lot_number) = patch.lot_number {
            ing.lot_number = lot_number;
        }
        ing.last_updated = Utc::now();
        let updated = ing.clone();

        inner.save_ingredients()?;
        Ok(Some(updated))
    }

    /// Hard delete. Dishes referencing the ingredient keep their recipe
    /// lines; those lines are skipped during consumption and cost queries.
    pub fn delete_ingredient(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.ingredients.retain(|i| i.id != id);
        inner.save_ingredients()
    }

    // ----- dishes -----

    /// Append a new dish with a fresh id and zeroed daily servings. The
    /// store accepts empty recipes; the form layer is what rejects them.
    pub fn add_dish(&self, new: NewDish) -> Result<Dish, StoreError> {
        let mut inner = self.lock()?;

        let dish = Dish {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            ingredients: new.ingredients,
            price: new.price,
            category: new.category,
            servings_today: 0,
            last_served: Utc::now(),
            cost_per_serving: new.cost_per_serving,
            profit_margin: new.profit_margin,
        };

        inner.dishes.push(dish.clone());
        inner.save_dishes()?;
        Ok(dish)
    }

    /// Hard delete. Service records referencing the dish remain; they are
    /// an append-only ledger.
    pub fn delete_dish(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.dishes.retain(|d| d.id != id);
        inner.save_dishes()
    }

    /// Record a serving delta for a dish during a period: adjust the dish's
    /// daily count, append one service record with a consumption snapshot,
    /// and draw down stock for every recipe ingredient still in inventory.
    /// A negative delta reverses a mis-recorded serving: stock is restored,
    /// the daily counters come back down, and the record carries a negative
    /// quantity and revenue.
    ///
    /// servingsToday and consumedToday are clamped at zero, as is stock on
    /// the way down; consumedToday otherwise accrues the full recipe amount,
    /// so it can exceed what was actually on hand. Recipe lines whose
    /// ingredient has been deleted are skipped, but they still appear in the
    /// record's snapshot. Unknown dish: no-op, `None`.
    pub fn record_servings(
        &self,
        dish_id: &str,
        period_id: &str,
        servings: i32,
    ) -> Result<Option<ServiceRecord>, StoreError> {
        let mut guard = self.lock()?;
        let inner = &mut *guard;
        let now = Utc::now();

        let Some(dish) = inner.dishes.iter_mut().find(|d| d.id == dish_id) else {
            return Ok(None);
        };

        dish.servings_today = dish.servings_today.saturating_add_signed(servings);
        dish.last_served = now;
        let price = dish.price;
        let recipe = dish.ingredients.clone();

        let unit_cost: f64 = recipe
            .iter()
            .filter_map(|line| {
                inner
                    .ingredients
                    .iter()
                    .find(|i| i.id == line.ingredient_id)
                    .map(|i| i.cost * line.quantity)
            })
            .sum();

        let revenue = price * f64::from(servings);
        let cost = unit_cost * f64::from(servings);

        let record = ServiceRecord {
            id: Uuid::new_v4().to_string(),
            date: now,
            period_id: period_id.to_string(),
            dish_id: dish_id.to_string(),
            quantity: servings,
            revenue,
            cost,
            profit: revenue - cost,
            ingredients_used: recipe
                .iter()
                .map(|line| DishIngredient {
                    ingredient_id: line.ingredient_id.clone(),
                    quantity: line.quantity * f64::from(servings),
                })
                .collect(),
        };
        inner.service_records.push(record.clone());

        for line in &recipe {
            if let Some(ing) = inner
                .ingredients
                .iter_mut()
                .find(|i| i.id == line.ingredient_id)
            {
                let consumed = line.quantity * f64::from(servings);
                ing.quantity = (ing.quantity - consumed).max(0.0);
                ing.consumed_today = (ing.consumed_today + consumed).max(0.0);
                ing.last_updated = now;
            }
        }

        inner.save_dishes()?;
        inner.save_records()?;
        inner.save_ingredients()?;
        Ok(Some(record))
    }

    // ----- service periods -----

    /// Periods are memory-only: they are not persisted and overlapping
    /// windows are not validated.
    pub fn add_service_period(&self, new: NewServicePeriod) -> Result<ServicePeriod, StoreError> {
        let mut inner = self.lock()?;

        let period = ServicePeriod {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            start_time: new.start_time,
            end_time: new.end_time,
        };

        inner.service_periods.push(period.clone());
        Ok(period)
    }

    pub fn delete_service_period(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.service_periods.retain(|p| p.id != id);
        Ok(())
    }

    pub fn current_period(&self) -> Result<Option<ServicePeriod>, StoreError> {
        self.current_period_at(Local::now().time())
    }

    /// The first period in stored order whose [start, end) window contains
    /// the given time-of-day. Stored order is the deterministic tie-break
    /// for overlapping windows. Periods with unparseable times are skipped,
    /// and windows do not wrap midnight: a period whose end precedes its
    /// start never matches.
    pub fn current_period_at(&self, time: NaiveTime) -> Result<Option<ServicePeriod>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .service_periods
            .iter()
            .find(|p| period_contains(p, time))
            .cloned())
    }

    // ----- daily tracking -----

    /// Zero every dish's servingsToday and every ingredient's consumedToday.
    /// The caller decides when a "day" ends; the store has no clock of its
    /// own for this.
    pub fn reset_daily_tracking(&self) -> Result<(), StoreError> {
        let mut inner = self.lock()?;

        for dish in &mut inner.dishes {
            dish.servings_today = 0;
        }
        for ing in &mut inner.ingredients {
            ing.consumed_today = 0.0;
        }

        inner.save_dishes()?;
        inner.save_ingredients()
    }

    // ----- derived queries -----

    /// Ingredients at or below their minimum threshold, in collection order.
    pub fn low_stock_ingredients(&self) -> Result<Vec<Ingredient>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .ingredients
            .iter()
            .filter(|i| i.quantity <= i.min_threshold)
            .cloned()
            .collect())
    }

    pub fn expiring_ingredients(&self) -> Result<Vec<Ingredient>, StoreError> {
        self.expiring_ingredients_on(Local::now().date_naive())
    }

    /// Ingredients expiring within [`EXPIRY_WINDOW_DAYS`] of `today`
    /// (already-expired included), sorted soonest first.
    pub fn expiring_ingredients_on(&self, today: NaiveDate) -> Result<Vec<Ingredient>, StoreError> {
        let inner = self.lock()?;

        let mut expiring: Vec<Ingredient> = inner
            .ingredients
            .iter()
            .filter(|i| days_until_expiry(i, today) <= EXPIRY_WINDOW_DAYS)
            .cloned()
            .collect();
        expiring.sort_by_key(|i| days_until_expiry(i, today));
        Ok(expiring)
    }

    /// Cost of one serving: sum of ingredient cost times recipe quantity
    /// over the lines whose ingredient still exists. Missing lines count as
    /// zero; an unknown dish costs zero.
    pub fn recipe_cost(&self, dish_id: &str) -> Result<f64, StoreError> {
        let inner = self.lock()?;

        let Some(dish) = inner.dishes.iter().find(|d| d.id == dish_id) else {
            return Ok(0.0);
        };

        Ok(dish
            .ingredients
            .iter()
            .filter_map(|line| {
                inner
                    .ingredients
                    .iter()
                    .find(|i| i.id == line.ingredient_id)
                    .map(|i| i.cost * line.quantity)
            })
            .sum())
    }

    pub fn service_summary(&self) -> Result<ServiceSummary, StoreError> {
        // Records are stamped in UTC, so "today" is the UTC date.
        self.service_summary_on(Utc::now().date_naive())
    }

    /// Revenue over records dated `today` plus the top dishes and top
    /// consumed ingredients by their daily counters.
    pub fn service_summary_on(&self, today: NaiveDate) -> Result<ServiceSummary, StoreError> {
        let inner = self.lock()?;

        let total_revenue = inner
            .service_records
            .iter()
            .filter(|r| r.date.date_naive() == today)
            .map(|r| r.revenue)
            .sum();

        let mut top_dishes: Vec<DishTally> = inner
            .dishes
            .iter()
            .map(|d| DishTally {
                name: d.name.clone(),
                servings: d.servings_today,
            })
            .collect();
        top_dishes.sort_by(|a, b| b.servings.cmp(&a.servings));
        top_dishes.truncate(SUMMARY_TOP_N);

        let mut top_consumed: Vec<ConsumptionTally> = inner
            .ingredients
            .iter()
            .map(|i| ConsumptionTally {
                name: i.name.clone(),
                consumed: i.consumed_today,
                unit: i.unit.clone(),
            })
            .collect();
        top_consumed.sort_by(|a, b| {
            b.consumed
                .partial_cmp(&a.consumed)
                .unwrap_or(Ordering::Equal)
        });
        top_consumed.truncate(SUMMARY_TOP_N);

        Ok(ServiceSummary {
            date: today,
            total_revenue,
            top_dishes,
            top_consumed,
        })
    }
}

fn period_contains(period: &ServicePeriod, time: NaiveTime) -> bool {
    let Ok(start) = NaiveTime::parse_from_str(&period.start_time, "%H:%M") else {
        return false;
    };
    let Ok(end) = NaiveTime::parse_from_str(&period.end_time, "%H:%M") else {
        return false;
    };
    start <= time && time < end
}

fn days_until_expiry(ingredient: &Ingredient, today: NaiveDate) -> i64 {
    ingredient.expiry_date.signed_duration_since(today).num_days()
}

pub trait StoreExt {
    fn store(&self) -> &InventoryStore;
}

impl StoreExt for AppHandle {
    /// Panics if the store has not been placed in managed state yet; there
    /// is no sensible default outside `setup`.
    fn store(&self) -> &InventoryStore {
        self.state::<InventoryStore>().inner()
    }
}
