use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Weight above which an item counts as heavy, in kilograms.
pub const HEAVY_ITEM_THRESHOLD_KG: f64 = 15.0;

/// One catalog entry: the physical data quoting needs for a removal item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSpec {
    pub item_id: String,
    pub name: String,
    pub room: String,
    pub weight_kg: f64,
    pub volume_m3: f64,
}

/// Requested item count, as collected by the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCount {
    pub item_id: String,
    pub quantity: i64,
}

/// Lookup table of removal items the engine can size and weigh.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    items: HashMap<String, ItemSpec>,
}

impl ItemCatalog {
    /// The built-in catalog of common household items.
    pub fn standard() -> Self {
        Self::from_items(standard_items())
    }

    pub fn from_items(items: Vec<ItemSpec>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.item_id.clone(), item))
            .collect();
        Self { items }
    }

    pub fn get(&self, item_id: &str) -> Option<&ItemSpec> {
        self.items.get(item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Per-line totals for one analyzed inventory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLine {
    pub item_id: String,
    pub name: String,
    pub quantity: i64,
    pub weight_kg: f64,
    pub volume_m3: f64,
    pub total_weight: f64,
    pub total_volume: f64,
    pub is_heavy: bool,
}

/// Inventory rollup feeding the quote engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAnalysis {
    pub total_volume: f64,
    pub num_heavy_items: u32,
    pub total_items: u32,
    pub item_breakdown: Vec<InventoryLine>,
}

/// Roll requested quantities up against the catalog. Zero and negative
/// quantities are skipped; unknown ids are logged and skipped. Heavy items
/// count per unit, not per line.
pub fn analyze_inventory(items: &[ItemCount], catalog: &ItemCatalog) -> InventoryAnalysis {
    let mut total_volume = 0.0;
    let mut num_heavy_items = 0u32;
    let mut total_items = 0u32;
    let mut item_breakdown = Vec::new();

    for entry in items {
        if entry.quantity <= 0 {
            continue;
        }
        let Some(spec) = catalog.get(&entry.item_id) else {
            warn!(item_id = %entry.item_id, "inventory item missing from catalog, skipping");
            continue;
        };

        let quantity = entry.quantity;
        let line_weight = spec.weight_kg * quantity as f64;
        let line_volume = spec.volume_m3 * quantity as f64;
        let is_heavy = spec.weight_kg > HEAVY_ITEM_THRESHOLD_KG;

        total_volume += line_volume;
        if is_heavy {
            num_heavy_items += quantity as u32;
        }
        total_items += quantity as u32;

        item_breakdown.push(InventoryLine {
            item_id: entry.item_id.clone(),
            name: spec.name.clone(),
            quantity,
            weight_kg: spec.weight_kg,
            volume_m3: spec.volume_m3,
            total_weight: line_weight,
            total_volume: line_volume,
            is_heavy,
        });
    }

    // Volume totals hold three decimal places.
    total_volume = (total_volume * 1000.0).round() / 1000.0;

    InventoryAnalysis {
        total_volume,
        num_heavy_items,
        total_items,
        item_breakdown,
    }
}

fn item(item_id: &str, name: &str, room: &str, weight_kg: f64, volume_m3: f64) -> ItemSpec {
    ItemSpec {
        item_id: item_id.to_string(),
        name: name.to_string(),
        room: room.to_string(),
        weight_kg,
        volume_m3,
    }
}

fn standard_items() -> Vec<ItemSpec> {
    vec![
        item("sofa-3seat", "Three-Seater Sofa", "living-room", 55.0, 1.5),
        item("sofa-2seat", "Two-Seater Sofa", "living-room", 45.0, 1.2),
        item("armchair", "Armchair", "living-room", 25.0, 0.8),
        item("coffee-table", "Coffee Table", "living-room", 12.0, 0.35),
        item("tv-unit", "TV Unit", "living-room", 22.0, 0.5),
        item("television", "Television", "living-room", 12.0, 0.3),
        item("bookcase", "Bookcase", "living-room", 28.0, 0.8),
        item("lamp", "Floor Lamp", "living-room", 3.0, 0.1),
        item("rug", "Rug (rolled)", "living-room", 8.0, 0.3),
        item("mirror", "Wall Mirror", "living-room", 7.0, 0.15),
        item("dining-table", "Dining Table", "dining-room", 32.0, 1.2),
        item("dining-chair", "Dining Chair", "dining-room", 5.0, 0.25),
        item("sideboard", "Sideboard", "dining-room", 35.0, 0.9),
        item("bed-double", "Double Bed Frame", "bedroom", 34.0, 1.2),
        item("bed-single", "Single Bed Frame", "bedroom", 22.0, 0.8),
        item("mattress-double", "Double Mattress", "bedroom", 28.0, 1.0),
        item("mattress-single", "Single Mattress", "bedroom", 14.0, 0.7),
        item("wardrobe-double", "Double Wardrobe", "bedroom", 48.0, 1.8),
        item("chest-of-drawers", "Chest of Drawers", "bedroom", 26.0, 0.9),
        item("bedside-table", "Bedside Table", "bedroom", 9.0, 0.25),
        item("desk", "Desk", "office", 24.0, 0.9),
        item("office-chair", "Office Chair", "office", 11.0, 0.45),
        item("washing-machine", "Washing Machine", "kitchen", 72.0, 0.6),
        item("fridge-freezer", "Fridge Freezer", "kitchen", 68.0, 1.3),
        item("dishwasher", "Dishwasher", "kitchen", 42.0, 0.6),
        item("oven", "Freestanding Oven", "kitchen", 52.0, 0.7),
        item("microwave", "Microwave", "kitchen", 12.0, 0.1),
        item("bike", "Bicycle", "garage", 13.0, 0.5),
    ]
}
