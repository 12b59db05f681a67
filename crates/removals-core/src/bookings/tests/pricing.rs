use super::common::{collection_address, delivery_address, submission};
use crate::bookings::domain::{
    AddressDetails, CostBreakdown, FurnitureItem, PackingMaterial, PricingInput,
};
use crate::bookings::pricing;

fn input_for_home(home_size: &str) -> PricingInput {
    PricingInput {
        home_size: home_size.to_string(),
        ..PricingInput::default()
    }
}

fn item(item_id: &str, quantity: i64) -> FurnitureItem {
    FurnitureItem {
        item_id: item_id.to_string(),
        name: item_id.to_string(),
        quantity,
        category: None,
    }
}

fn material(material_id: &str, quantity: i64) -> PackingMaterial {
    PackingMaterial {
        material_id: material_id.to_string(),
        name: material_id.to_string(),
        quantity,
    }
}

#[test]
fn base_price_matches_published_table() {
    for (home_size, expected) in [
        ("1-bedroom", 299),
        ("2-bedrooms", 449),
        ("3-bedrooms", 599),
        ("4-bedrooms", 799),
    ] {
        let breakdown = pricing::quote(&input_for_home(home_size));
        assert_eq!(breakdown.base_price, expected, "{home_size}");
        assert_eq!(breakdown.total, expected, "{home_size}");
    }
}

#[test]
fn unrecognized_home_sizes_fall_back_to_default_base() {
    for home_size in ["studio", "5-bedrooms", "2-Bedrooms", ""] {
        let breakdown = pricing::quote(&input_for_home(home_size));
        assert_eq!(breakdown.base_price, 399, "{home_size:?}");
    }
}

#[test]
fn new_items_charge_fifteen_per_unit() {
    let mut input = input_for_home("1-bedroom");
    input.furniture_items = vec![item("lamp", 2), item("rug", 1)];

    let breakdown = pricing::quote(&input);
    assert_eq!(breakdown.furniture_charge, 45);
}

#[test]
fn increased_quantities_charge_ten_per_extra_unit() {
    let mut input = input_for_home("1-bedroom");
    input.initial_furniture_items = vec![item("dining-chair", 4)];
    input.furniture_items = vec![item("dining-chair", 7)];

    let breakdown = pricing::quote(&input);
    assert_eq!(breakdown.furniture_charge, 30);
}

#[test]
fn equal_or_reduced_quantities_charge_nothing() {
    let mut input = input_for_home("1-bedroom");
    input.initial_furniture_items = vec![item("bookcase", 3), item("desk", 2)];
    input.furniture_items = vec![item("bookcase", 3), item("desk", 1)];

    let breakdown = pricing::quote(&input);
    assert_eq!(breakdown.furniture_charge, 0);
}

#[test]
fn negative_quantities_flow_through_the_arithmetic() {
    // Not rejected anywhere; a negative count on a new item subtracts.
    let mut input = input_for_home("1-bedroom");
    input.furniture_items = vec![item("lamp", -2)];

    let breakdown = pricing::quote(&input);
    assert_eq!(breakdown.furniture_charge, -30);
    assert_eq!(breakdown.total, 299 - 30);
}

#[test]
fn all_inclusive_packing_is_flat_and_ignores_materials() {
    let mut input = input_for_home("2-bedrooms");
    input.packing_service = "all-inclusive".to_string();
    input.packing_materials = vec![material("wardrobe-boxes", 40), material("tape", 100)];

    let breakdown = pricing::quote(&input);
    assert_eq!(breakdown.packing_materials_charge, 99);
}

#[test]
fn itemized_materials_price_from_the_table() {
    let mut input = input_for_home("2-bedrooms");
    input.packing_service = "self-pack".to_string();
    input.packing_materials = vec![
        material("small-boxes", 3),
        material("wardrobe-boxes", 2),
        material("bubble-wrap", 1),
    ];

    let breakdown = pricing::quote(&input);
    assert_eq!(breakdown.packing_materials_charge, 6 + 16 + 10);
}

#[test]
fn unknown_materials_price_at_the_fallback_rate() {
    let mut input = input_for_home("1-bedroom");
    input.packing_materials = vec![material("velvet-sleeves", 2)];

    let breakdown = pricing::quote(&input);
    assert_eq!(breakdown.packing_materials_charge, 10);
}

#[test]
fn dismantle_package_adds_flat_charge_in_both_packing_branches() {
    let mut itemized = input_for_home("1-bedroom");
    itemized.dismantle_package = true;
    itemized.packing_materials = vec![material("tape", 1)];
    assert_eq!(pricing::quote(&itemized).packing_materials_charge, 3 + 49);

    let mut all_inclusive = input_for_home("1-bedroom");
    all_inclusive.dismantle_package = true;
    all_inclusive.packing_service = "all-inclusive".to_string();
    assert_eq!(pricing::quote(&all_inclusive).packing_materials_charge, 99 + 49);
}

#[test]
fn walk_up_floors_without_lift_charge_per_floor() {
    let mut input = input_for_home("1-bedroom");
    input.collection_address = Some(collection_address());

    let breakdown = pricing::quote(&input);
    assert_eq!(breakdown.floor_surcharge, 45);
}

#[test]
fn lift_waives_the_floor_surcharge() {
    let mut address = collection_address();
    address.has_lift = true;

    let mut input = input_for_home("1-bedroom");
    input.collection_address = Some(address);

    let breakdown = pricing::quote(&input);
    assert_eq!(breakdown.floor_surcharge, 0);
}

#[test]
fn ground_floor_and_missing_addresses_charge_nothing() {
    let mut ground = input_for_home("1-bedroom");
    ground.collection_address = Some(delivery_address());
    assert_eq!(pricing::quote(&ground).floor_surcharge, 0);

    let absent = input_for_home("1-bedroom");
    assert_eq!(pricing::quote(&absent).floor_surcharge, 0);
}

#[test]
fn floor_labels_parse_by_leading_digits() {
    let mut address = collection_address();
    address.floor = "6+".to_string();

    let mut input = input_for_home("1-bedroom");
    input.collection_address = Some(address);
    assert_eq!(pricing::quote(&input).floor_surcharge, 90);

    let mut worded = collection_address();
    worded.floor = "ground".to_string();
    let mut input = input_for_home("1-bedroom");
    input.collection_address = Some(worded);
    assert_eq!(pricing::quote(&input).floor_surcharge, 0);
}

#[test]
fn both_addresses_contribute_to_the_floor_surcharge() {
    let mut delivery = delivery_address();
    delivery.floor = "2".to_string();
    delivery.has_lift = false;

    let mut input = input_for_home("1-bedroom");
    input.collection_address = Some(collection_address());
    input.delivery_address = Some(delivery);

    let breakdown = pricing::quote(&input);
    assert_eq!(breakdown.floor_surcharge, 45 + 30);
}

#[test]
fn distance_surcharge_stays_zero() {
    let input = submission().pricing_input();
    assert_eq!(pricing::quote(&input).distance_surcharge, 0);
}

#[test]
fn total_is_the_exact_component_sum() {
    let breakdown = pricing::quote(&submission().pricing_input());
    assert_eq!(
        breakdown,
        CostBreakdown::new(449, 50, 16, 0, 45),
        "hand-priced reference move"
    );
    assert_eq!(
        breakdown.total,
        breakdown.base_price
            + breakdown.furniture_charge
            + breakdown.packing_materials_charge
            + breakdown.distance_surcharge
            + breakdown.floor_surcharge
    );
}

#[test]
fn quote_is_deterministic_for_identical_inputs() {
    let input = submission().pricing_input();
    assert_eq!(pricing::quote(&input), pricing::quote(&input));
}

#[test]
fn address_details_do_not_affect_other_components() {
    let mut with_address = input_for_home("3-bedrooms");
    with_address.collection_address = Some(AddressDetails {
        postcode: "SW1A 1AA".to_string(),
        address: "1 Parliament Street".to_string(),
        floor: "4".to_string(),
        has_parking: false,
        has_lift: false,
    });

    let breakdown = pricing::quote(&with_address);
    assert_eq!(breakdown.base_price, 599);
    assert_eq!(breakdown.furniture_charge, 0);
    assert_eq!(breakdown.floor_surcharge, 60);
    assert_eq!(breakdown.total, 659);
}
