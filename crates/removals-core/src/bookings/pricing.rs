//! Deterministic quote calculator. Same inputs, same breakdown: no clock, no
//! storage, no I/O. The constants below are the published tariff.

use std::collections::HashSet;

use super::domain::{AddressDetails, CostBreakdown, FurnitureItem, PackingMaterial, PricingInput};

/// Charge per unit for furniture added after the initial inventory.
const NEW_ITEM_RATE: i64 = 15;
/// Charge per unit above the initial quantity of an already listed item.
const EXTRA_QUANTITY_RATE: i64 = 10;
/// Flat charge when the customer books the all-inclusive packing service.
const ALL_INCLUSIVE_PACKING_CHARGE: i64 = 99;
/// Flat charge for the dismantle and reassemble package.
const DISMANTLE_CHARGE: i64 = 49;
/// Per-floor charge at an address without a lift.
const FLOOR_RATE: i64 = 15;
/// Base price applied when the home size is not in the table.
const FALLBACK_BASE_PRICE: i64 = 399;
/// Unit price applied to packing materials missing from the table.
const FALLBACK_MATERIAL_PRICE: i64 = 5;

fn base_price(home_size: &str) -> i64 {
    match home_size {
        "1-bedroom" => 299,
        "2-bedrooms" => 449,
        "3-bedrooms" => 599,
        "4-bedrooms" => 799,
        _ => FALLBACK_BASE_PRICE,
    }
}

fn material_unit_price(material_id: &str) -> i64 {
    match material_id {
        "small-boxes" => 2,
        "large-boxes" => 4,
        "wardrobe-boxes" => 8,
        "tape" => 3,
        "bubble-wrap" => 10,
        "paper-pack" => 5,
        "stretch-wrap" => 8,
        _ => FALLBACK_MATERIAL_PRICE,
    }
}

/// Items not present in the initial inventory charge at the new-item rate.
/// Items already listed charge only for quantity above the initial baseline;
/// equal or lower quantities are free, never refunded.
fn furniture_charge(current: &[FurnitureItem], initial: &[FurnitureItem]) -> i64 {
    let initial_ids: HashSet<&str> = initial.iter().map(|item| item.item_id.as_str()).collect();

    current
        .iter()
        .map(|item| {
            if !initial_ids.contains(item.item_id.as_str()) {
                return item.quantity * NEW_ITEM_RATE;
            }
            let baseline = initial
                .iter()
                .find(|candidate| candidate.item_id == item.item_id)
                .map(|candidate| candidate.quantity)
                .unwrap_or(0);
            if item.quantity > baseline {
                (item.quantity - baseline) * EXTRA_QUANTITY_RATE
            } else {
                0
            }
        })
        .sum()
}

/// All-inclusive service is a flat fee and ignores the itemized materials.
fn packing_charge(packing_service: &str, materials: &[PackingMaterial], dismantle: bool) -> i64 {
    let mut charge = if packing_service == "all-inclusive" {
        ALL_INCLUSIVE_PACKING_CHARGE
    } else {
        materials
            .iter()
            .map(|material| material.quantity * material_unit_price(&material.material_id))
            .sum()
    };
    if dismantle {
        charge += DISMANTLE_CHARGE;
    }
    charge
}

/// Lenient floor parse: the leading run of ASCII digits, so "6+" reads as 6
/// and "ground" or anything non-numeric reads as 0.
pub(crate) fn parse_floor(raw: &str) -> i64 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

fn floor_surcharge(address: Option<&AddressDetails>) -> i64 {
    let Some(address) = address else {
        return 0;
    };
    let floor = parse_floor(&address.floor);
    if floor > 0 && !address.has_lift {
        floor * FLOOR_RATE
    } else {
        0
    }
}

/// Price a booking. Total over its whole input domain: unknown home sizes and
/// material ids fall back to table defaults, missing addresses contribute
/// nothing, and quantities are taken as given.
pub fn quote(input: &PricingInput) -> CostBreakdown {
    let base_price = base_price(&input.home_size);
    let furniture_charge = furniture_charge(&input.furniture_items, &input.initial_furniture_items);
    let packing_materials_charge = packing_charge(
        &input.packing_service,
        &input.packing_materials,
        input.dismantle_package,
    );
    let floor_surcharge = floor_surcharge(input.collection_address.as_ref())
        + floor_surcharge(input.delivery_address.as_ref());
    // Mileage pricing has no tariff yet; the component stays in the breakdown
    // at zero so stored quotes keep their shape when it lands.
    let distance_surcharge = 0;

    CostBreakdown::new(
        base_price,
        furniture_charge,
        packing_materials_charge,
        distance_surcharge,
        floor_surcharge,
    )
}
