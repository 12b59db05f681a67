//! Decision logic: zone, occupancy, the vehicle priority chain, crew sizing,
//! time estimation, and pricing. Branch order in the priority chain is
//! load-bearing; reordering it changes quotes.

use super::domain::{
    MoveZone, Occupancy, PriceBreakdown, QuoteInputs, QuotePricing, QuoteRecommendation,
    TimeEstimate, VehicleRecommendation, VehicleType, VolumeCategory,
};
use super::tables;

/// Distance at or under which a move prices as local, in miles.
pub const LOCAL_THRESHOLD_MILES: f64 = 2.0;

/// Round minutes to the nearest half hour, returned as whole minutes.
pub fn round_to_nearest_half_hour(minutes: f64) -> u32 {
    let hours_rounded = (minutes / 30.0).round() * 0.5;
    (hours_rounded * 60.0).floor() as u32
}

/// Distance band for a move. Nationwide is never inferred from distance; it
/// is reserved for explicitly nationwide work.
pub fn move_zone(distance_miles: f64) -> MoveZone {
    if distance_miles <= LOCAL_THRESHOLD_MILES {
        MoveZone::Local
    } else {
        MoveZone::NonLocal
    }
}

/// Occupancy bracket of a volume in a vehicle. Exactly half counts as
/// greater-or-equal.
pub fn occupancy(volume: f64, vehicle_type: VehicleType) -> Occupancy {
    if volume / vehicle_type.max_capacity_m3() < 0.5 {
        Occupancy::LessThanHalf
    } else {
        Occupancy::GreaterThanOrEqualHalf
    }
}

/// Volume bracket; boundaries sit exactly on the fleet capacities.
pub fn volume_category(volume: f64) -> VolumeCategory {
    if volume <= 6.2 {
        VolumeCategory::Small
    } else if volume <= 13.19 {
        VolumeCategory::Medium
    } else if volume <= 25.0 {
        VolumeCategory::Large
    } else {
        VolumeCategory::ExtraLarge
    }
}

/// Complexity multiplier reported alongside quotes.
pub fn complexity_factor(volume: f64, num_heavy_items: u32, crew_size: u32) -> f64 {
    let mut factor = 1.0;
    if num_heavy_items > 0 {
        factor += 0.2;
    }
    if crew_size > 2 {
        factor += 0.15;
    }
    if volume > 20.0 {
        factor += 0.1;
    }
    factor
}

/// Crew for a vehicle given heavy items, customer assistance, and access.
pub fn crew_size(
    vehicle_type: VehicleType,
    num_heavy_items: u32,
    customer_assistance: bool,
    difficult_access: bool,
) -> u32 {
    let has_heavy_items = num_heavy_items > 0;

    match vehicle_type {
        VehicleType::TransitCustom => 1,
        VehicleType::Transit350 => {
            if !has_heavy_items || customer_assistance {
                1
            } else {
                2
            }
        }
        VehicleType::LutonLowLoader => {
            if difficult_access {
                3
            } else {
                2
            }
        }
    }
}

fn heavy_phrase(num_heavy_items: u32) -> String {
    let suffix = if num_heavy_items > 1 { "s" } else { "" };
    format!("{num_heavy_items} heavy item{suffix}")
}

/// Pick a vehicle and crew. The priorities, in order: bedroom count, studio
/// suitability for the Custom, studio volume overflow, studio heavy items,
/// one-bedroom sizing, then pure volume fallbacks.
pub fn recommend_vehicle_and_crew(
    volume: f64,
    num_heavy_items: u32,
    customer_assistance: bool,
    num_rooms: u32,
    difficult_access: bool,
) -> VehicleRecommendation {
    let has_heavy_items = num_heavy_items > 0;

    if num_rooms >= 2 {
        let vehicle_type = VehicleType::LutonLowLoader;
        let mut reasoning = format!("{num_rooms}-bed house requires Luton Low Loader");
        if has_heavy_items {
            reasoning.push_str(&format!(" with {}", heavy_phrase(num_heavy_items)));
        }
        return VehicleRecommendation {
            vehicle_type,
            crew_size: crew_size(
                vehicle_type,
                num_heavy_items,
                customer_assistance,
                difficult_access,
            ),
            minimum_hours: "2 Hours (2 - 4 Hours)".to_string(),
            reasoning,
        };
    }

    if num_rooms == 0 && (!has_heavy_items || customer_assistance) {
        let vehicle_type = VehicleType::TransitCustom;
        let mut reasoning = "Studio flat, suitable for Ford Transit Custom".to_string();
        if has_heavy_items && customer_assistance {
            reasoning.push_str(&format!(
                " with customer assistance for {}",
                heavy_phrase(num_heavy_items)
            ));
        }
        return VehicleRecommendation {
            vehicle_type,
            crew_size: crew_size(
                vehicle_type,
                num_heavy_items,
                customer_assistance,
                difficult_access,
            ),
            minimum_hours: "1 Hour".to_string(),
            reasoning,
        };
    }

    if num_rooms == 0 && volume > 13.19 {
        let vehicle_type = VehicleType::LutonLowLoader;
        let mut reasoning =
            format!("Studio flat with large volume ({volume}m³) requires Luton Low Loader");
        if has_heavy_items {
            reasoning.push_str(&format!(" with {}", heavy_phrase(num_heavy_items)));
        }
        return VehicleRecommendation {
            vehicle_type,
            crew_size: crew_size(
                vehicle_type,
                num_heavy_items,
                customer_assistance,
                difficult_access,
            ),
            minimum_hours: "2 Hours (2 - 4 Hours)".to_string(),
            reasoning,
        };
    }

    if num_rooms == 0 && has_heavy_items && !customer_assistance {
        let vehicle_type = VehicleType::Transit350;
        return VehicleRecommendation {
            vehicle_type,
            crew_size: crew_size(
                vehicle_type,
                num_heavy_items,
                customer_assistance,
                difficult_access,
            ),
            minimum_hours: "1 Hour (1-2)".to_string(),
            reasoning: format!(
                "Studio flat but {} require Ford Transit 350",
                heavy_phrase(num_heavy_items)
            ),
        };
    }

    if num_rooms == 1 {
        let vehicle_type = VehicleType::Transit350;
        let mut reasoning = "1-bed house requires Ford Transit 350".to_string();
        if has_heavy_items {
            reasoning.push_str(&format!(" with {}", heavy_phrase(num_heavy_items)));
        }
        return VehicleRecommendation {
            vehicle_type,
            crew_size: crew_size(
                vehicle_type,
                num_heavy_items,
                customer_assistance,
                difficult_access,
            ),
            minimum_hours: "1 Hour (1-2)".to_string(),
            reasoning,
        };
    }

    if volume >= 18.0 {
        let vehicle_type = VehicleType::LutonLowLoader;
        let mut reasoning = format!("Large volume ({volume}m³) requires Luton Low Loader");
        if has_heavy_items {
            reasoning.push_str(&format!(" with {}", heavy_phrase(num_heavy_items)));
        } else {
            reasoning.push_str(" for standard items");
        }
        return VehicleRecommendation {
            vehicle_type,
            crew_size: crew_size(
                vehicle_type,
                num_heavy_items,
                customer_assistance,
                difficult_access,
            ),
            minimum_hours: "2 Hours (2 - 4 Hours)".to_string(),
            reasoning,
        };
    }

    if volume > 13.19 {
        let vehicle_type = VehicleType::LutonLowLoader;
        return VehicleRecommendation {
            vehicle_type,
            crew_size: crew_size(
                vehicle_type,
                num_heavy_items,
                customer_assistance,
                difficult_access,
            ),
            minimum_hours: "2 Hours (2 - 4 Hours)".to_string(),
            reasoning: format!(
                "Volume ({volume}m³) exceeds Ford Transit 350 capacity, requires Luton Low Loader"
            ),
        };
    }

    let vehicle_type = VehicleType::Transit350;
    let mut reasoning = format!("Medium volume ({volume}m³) requires Ford Transit 350");
    if has_heavy_items {
        reasoning.push_str(&format!(" with {}", heavy_phrase(num_heavy_items)));
    } else {
        reasoning.push_str(" for light items");
    }
    VehicleRecommendation {
        vehicle_type,
        crew_size: crew_size(
            vehicle_type,
            num_heavy_items,
            customer_assistance,
            difficult_access,
        ),
        minimum_hours: "1 Hour (1-2)".to_string(),
        reasoning,
    }
}

/// Time estimate: base hours by vehicle and occupancy, half-hour add-ons for
/// parking and lift problems, rounded driving time. Driving counts toward the
/// total but never toward add-on pricing.
pub fn estimate_time(inputs: &QuoteInputs, vehicle_type: VehicleType) -> TimeEstimate {
    let driving_minutes = round_to_nearest_half_hour(inputs.driving_minutes);
    let mut notes = Vec::new();

    let base_hours;
    if vehicle_type == VehicleType::LutonLowLoader {
        let occupancy = occupancy(inputs.total_volume, vehicle_type);
        base_hours = tables::base_hours(vehicle_type, occupancy);
        match occupancy {
            Occupancy::LessThanHalf => {
                notes.push("Base time: 2 hours (volume < 50% capacity)".to_string());
            }
            Occupancy::GreaterThanOrEqualHalf => {
                notes.push("Base time: 3 hours (volume ≥ 50% capacity)".to_string());
            }
        }
    } else {
        base_hours = tables::base_hours(vehicle_type, Occupancy::LessThanHalf);
        let suffix = if (base_hours - 1.0).abs() > f64::EPSILON {
            "s"
        } else {
            ""
        };
        notes.push(format!("Base time: {base_hours} hour{suffix}"));
    }

    let mut add_on_minutes = 0u32;
    if inputs.no_parking {
        add_on_minutes += 30;
        notes.push("Add-on: +30 mins (no parking)".to_string());
    }
    if inputs.no_lift {
        add_on_minutes += 30;
        notes.push("Add-on: +30 mins (no lift)".to_string());
    }

    if driving_minutes > 0 {
        notes.push(format!("Driving time: {driving_minutes} mins"));
    }

    let total_hours =
        base_hours + f64::from(add_on_minutes) / 60.0 + f64::from(driving_minutes) / 60.0;

    TimeEstimate {
        base_hours,
        add_on_minutes,
        driving_minutes,
        total_hours,
        notes,
    }
}

/// Hourly pricing for local and non-local moves.
pub fn compute_pricing(
    vehicle_type: VehicleType,
    crew_size: u32,
    zone: MoveZone,
    time: &TimeEstimate,
) -> PriceBreakdown {
    let rate = tables::hourly_rate(vehicle_type, crew_size, zone);

    let mut base_cost = rate.hourly_rate * time.base_hours;
    if rate.rate_is_per_mover {
        base_cost *= f64::from(crew_size);
    }

    // Add-on minutes price in half-hour blocks; driving time never does.
    let extra_half_hours = if time.add_on_minutes > 0 {
        time.add_on_minutes.div_ceil(30)
    } else {
        0
    };
    let mut extra_cost = f64::from(extra_half_hours) * rate.extra_30min_rate;
    if rate.rate_is_per_mover {
        extra_cost *= f64::from(crew_size);
    }

    let total_cost = base_cost + extra_cost;

    let rate_desc = if rate.rate_is_per_mover {
        format!("per mover (×{crew_size})")
    } else {
        "per crew".to_string()
    };
    let mut notes = vec![format!(
        "Base: £{} {} × {}h = £{:.2}",
        rate.hourly_rate, rate_desc, time.base_hours, base_cost
    )];
    if extra_half_hours > 0 {
        notes.push(format!(
            "Extra: £{} {} × {} × 30min = £{:.2}",
            rate.extra_30min_rate, rate_desc, extra_half_hours, extra_cost
        ));
    }
    notes.push(format!("Zone: {}", zone.label()));

    PriceBreakdown {
        zone,
        rate_is_per_mover: rate.rate_is_per_mover,
        crew_size,
        total_cost,
        notes,
        hourly_rate: Some(rate.hourly_rate),
        base_hours: Some(time.base_hours),
        extra_30min_rate: Some(rate.extra_30min_rate),
        extra_half_hours: Some(extra_half_hours),
        base_cost: Some(base_cost),
        extra_cost: Some(extra_cost),
        price_per_mile: None,
        distance_miles: None,
    }
}

/// Mileage pricing for nationwide moves.
pub fn compute_pricing_national(
    vehicle_type: VehicleType,
    crew_size: u32,
    distance_miles: f64,
) -> PriceBreakdown {
    let rate = tables::mile_rate(vehicle_type, crew_size);
    let total_cost = distance_miles * rate.price_per_mile;

    let notes = vec![
        format!(
            "Nationwide pricing: £{}/mile × {} miles = £{:.2}",
            rate.price_per_mile, distance_miles, total_cost
        ),
        "Zone: Nation Wide".to_string(),
    ];

    PriceBreakdown {
        zone: MoveZone::NationWide,
        rate_is_per_mover: false,
        crew_size,
        total_cost,
        notes,
        hourly_rate: None,
        base_hours: None,
        extra_30min_rate: None,
        extra_half_hours: None,
        base_cost: None,
        extra_cost: None,
        price_per_mile: Some(rate.price_per_mile),
        distance_miles: Some(distance_miles),
    }
}

/// Bedroom count the engine expects for each home-size bracket. Unknown
/// brackets read as studio.
pub fn rooms_for_home_size(home_size: &str) -> u32 {
    match home_size {
        "studio" | "mini-move" => 0,
        "1-bedroom" => 1,
        "2-bedrooms" => 2,
        "3-bedrooms" => 3,
        "4-bedrooms" => 4,
        _ => 0,
    }
}

/// Primary entry point: vehicle, crew, time, and price for one move.
pub fn recommendation(inputs: &QuoteInputs) -> QuoteRecommendation {
    let recommended = recommend_vehicle_and_crew(
        inputs.total_volume,
        inputs.num_heavy_items,
        inputs.customer_assistance,
        inputs.num_rooms,
        inputs.difficult_access,
    );
    let vehicle_type = recommended.vehicle_type;
    let crew = recommended.crew_size;

    let zone = move_zone(inputs.distance_miles);
    let occupancy = occupancy(inputs.total_volume, vehicle_type);
    let time_estimate = estimate_time(inputs, vehicle_type);

    let breakdown = match zone {
        MoveZone::NationWide => compute_pricing_national(vehicle_type, crew, inputs.distance_miles),
        hourly_zone => compute_pricing(vehicle_type, crew, hourly_zone, &time_estimate),
    };

    let pricing = QuotePricing {
        zone,
        rate_is_per_mover: breakdown.rate_is_per_mover,
        total_cost: breakdown.total_cost,
        pricing_notes: breakdown.notes,
        hourly_rate: breakdown.hourly_rate,
        base_cost: breakdown.base_cost,
        extra_cost: breakdown.extra_cost,
        price_per_mile: breakdown.price_per_mile,
        distance_miles: breakdown.distance_miles,
    };

    let reasoning = format!(
        "{} | Zone: {} | MoveZone: {}",
        recommended.reasoning,
        zone.label(),
        zone.token()
    );

    QuoteRecommendation {
        vehicle_type,
        crew_size: crew,
        reasoning,
        time_estimate,
        pricing,
        occupancy,
        volume_category: volume_category(inputs.total_volume),
        complexity_factor: complexity_factor(inputs.total_volume, inputs.num_heavy_items, crew),
        suitable_for_single_trip: inputs.total_volume <= vehicle_type.max_capacity_m3(),
        total_volume: inputs.total_volume,
        num_heavy_items: inputs.num_heavy_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(total_volume: f64, num_heavy_items: u32, num_rooms: u32) -> QuoteInputs {
        QuoteInputs {
            total_volume,
            num_heavy_items,
            customer_assistance: false,
            num_rooms,
            difficult_access: false,
            distance_miles: 0.0,
            no_parking: false,
            no_lift: false,
            driving_minutes: 0.0,
        }
    }

    #[test]
    fn rounds_minutes_to_nearest_half_hour() {
        assert_eq!(round_to_nearest_half_hour(0.0), 0);
        assert_eq!(round_to_nearest_half_hour(10.0), 0);
        assert_eq!(round_to_nearest_half_hour(15.0), 30);
        assert_eq!(round_to_nearest_half_hour(29.0), 30);
        assert_eq!(round_to_nearest_half_hour(44.0), 30);
        assert_eq!(round_to_nearest_half_hour(46.0), 60);
        assert_eq!(round_to_nearest_half_hour(75.0), 90);
    }

    #[test]
    fn zone_boundary_sits_at_two_miles() {
        assert_eq!(move_zone(0.0), MoveZone::Local);
        assert_eq!(move_zone(2.0), MoveZone::Local);
        assert_eq!(move_zone(2.01), MoveZone::NonLocal);
    }

    #[test]
    fn occupancy_boundary_counts_half_as_gte() {
        assert_eq!(
            occupancy(12.4, VehicleType::LutonLowLoader),
            Occupancy::LessThanHalf
        );
        assert_eq!(
            occupancy(12.5, VehicleType::LutonLowLoader),
            Occupancy::GreaterThanOrEqualHalf
        );
    }

    #[test]
    fn volume_categories_align_with_fleet_capacities() {
        assert_eq!(volume_category(6.2), VolumeCategory::Small);
        assert_eq!(volume_category(6.21), VolumeCategory::Medium);
        assert_eq!(volume_category(13.19), VolumeCategory::Medium);
        assert_eq!(volume_category(13.2), VolumeCategory::Large);
        assert_eq!(volume_category(25.0), VolumeCategory::Large);
        assert_eq!(volume_category(25.01), VolumeCategory::ExtraLarge);
    }

    #[test]
    fn complexity_stacks_heavy_crew_and_volume() {
        assert!((complexity_factor(10.0, 0, 1) - 1.0).abs() < 1e-9);
        assert!((complexity_factor(10.0, 2, 2) - 1.2).abs() < 1e-9);
        assert!((complexity_factor(21.0, 2, 3) - 1.45).abs() < 1e-9);
    }

    #[test]
    fn two_bed_house_takes_luton_with_two_movers() {
        let rec = recommend_vehicle_and_crew(15.0, 0, false, 2, false);
        assert_eq!(rec.vehicle_type, VehicleType::LutonLowLoader);
        assert_eq!(rec.crew_size, 2);
        assert_eq!(rec.minimum_hours, "2 Hours (2 - 4 Hours)");
        assert_eq!(rec.reasoning, "2-bed house requires Luton Low Loader");
    }

    #[test]
    fn difficult_access_luton_takes_three_movers() {
        let rec = recommend_vehicle_and_crew(15.0, 3, false, 3, true);
        assert_eq!(rec.vehicle_type, VehicleType::LutonLowLoader);
        assert_eq!(rec.crew_size, 3);
        assert_eq!(rec.reasoning, "3-bed house requires Luton Low Loader with 3 heavy items");
    }

    #[test]
    fn light_studio_takes_transit_custom_solo() {
        let rec = recommend_vehicle_and_crew(5.0, 0, false, 0, false);
        assert_eq!(rec.vehicle_type, VehicleType::TransitCustom);
        assert_eq!(rec.crew_size, 1);
        assert_eq!(rec.minimum_hours, "1 Hour");
        assert_eq!(rec.reasoning, "Studio flat, suitable for Ford Transit Custom");
    }

    #[test]
    fn assisted_heavy_studio_still_takes_transit_custom() {
        let rec = recommend_vehicle_and_crew(5.0, 1, true, 0, false);
        assert_eq!(rec.vehicle_type, VehicleType::TransitCustom);
        assert_eq!(rec.crew_size, 1);
        assert_eq!(
            rec.reasoning,
            "Studio flat, suitable for Ford Transit Custom with customer assistance for 1 heavy item"
        );
    }

    #[test]
    fn bulky_heavy_studio_overflows_to_luton() {
        let rec = recommend_vehicle_and_crew(14.0, 2, false, 0, false);
        assert_eq!(rec.vehicle_type, VehicleType::LutonLowLoader);
        assert_eq!(rec.crew_size, 2);
        assert_eq!(
            rec.reasoning,
            "Studio flat with large volume (14m³) requires Luton Low Loader with 2 heavy items"
        );
    }

    #[test]
    fn unassisted_heavy_studio_takes_transit_350_pair() {
        let rec = recommend_vehicle_and_crew(8.0, 1, false, 0, false);
        assert_eq!(rec.vehicle_type, VehicleType::Transit350);
        assert_eq!(rec.crew_size, 2);
        assert_eq!(rec.minimum_hours, "1 Hour (1-2)");
        assert_eq!(
            rec.reasoning,
            "Studio flat but 1 heavy item require Ford Transit 350"
        );
    }

    #[test]
    fn one_bed_takes_transit_350() {
        let rec = recommend_vehicle_and_crew(9.0, 0, false, 1, false);
        assert_eq!(rec.vehicle_type, VehicleType::Transit350);
        assert_eq!(rec.crew_size, 1);
        assert_eq!(rec.reasoning, "1-bed house requires Ford Transit 350");
    }

    #[test]
    fn luton_time_scales_with_occupancy() {
        let light = estimate_time(&inputs(10.0, 0, 2), VehicleType::LutonLowLoader);
        assert!((light.base_hours - 2.0).abs() < 1e-9);
        assert_eq!(light.notes[0], "Base time: 2 hours (volume < 50% capacity)");

        let full = estimate_time(&inputs(20.0, 0, 2), VehicleType::LutonLowLoader);
        assert!((full.base_hours - 3.0).abs() < 1e-9);
        assert_eq!(full.notes[0], "Base time: 3 hours (volume ≥ 50% capacity)");
    }

    #[test]
    fn add_ons_and_driving_extend_total_hours() {
        let mut quote_inputs = inputs(10.0, 0, 2);
        quote_inputs.no_parking = true;
        quote_inputs.no_lift = true;
        quote_inputs.driving_minutes = 29.0;

        let time = estimate_time(&quote_inputs, VehicleType::LutonLowLoader);
        assert_eq!(time.add_on_minutes, 60);
        assert_eq!(time.driving_minutes, 30);
        assert!((time.total_hours - 3.5).abs() < 1e-9);
        assert!(time.notes.contains(&"Add-on: +30 mins (no parking)".to_string()));
        assert!(time.notes.contains(&"Add-on: +30 mins (no lift)".to_string()));
        assert!(time.notes.contains(&"Driving time: 30 mins".to_string()));
    }

    #[test]
    fn per_mover_pricing_multiplies_by_crew() {
        let quote_inputs = inputs(5.0, 0, 0);
        let time = estimate_time(&quote_inputs, VehicleType::TransitCustom);
        let pricing = compute_pricing(VehicleType::TransitCustom, 1, MoveZone::Local, &time);

        assert!((pricing.total_cost - 45.0).abs() < 1e-9);
        assert_eq!(pricing.hourly_rate, Some(45.0));
        assert!(pricing.rate_is_per_mover);
        assert_eq!(
            pricing.notes[0],
            "Base: £45 per mover (×1) × 1h = £45.00"
        );
        assert_eq!(pricing.notes.last().map(String::as_str), Some("Zone: Local"));
    }

    #[test]
    fn add_on_blocks_price_at_the_extra_rate() {
        let mut quote_inputs = inputs(10.0, 0, 2);
        quote_inputs.no_parking = true;
        quote_inputs.no_lift = true;

        let time = estimate_time(&quote_inputs, VehicleType::LutonLowLoader);
        let pricing = compute_pricing(VehicleType::LutonLowLoader, 2, MoveZone::NonLocal, &time);

        // 95 * 2h base, plus 2 half-hour blocks at 42.
        assert_eq!(pricing.base_cost, Some(190.0));
        assert_eq!(pricing.extra_half_hours, Some(2));
        assert_eq!(pricing.extra_cost, Some(84.0));
        assert!((pricing.total_cost - 274.0).abs() < 1e-9);
        assert!(pricing
            .notes
            .contains(&"Extra: £42 per crew × 2 × 30min = £84.00".to_string()));
    }

    #[test]
    fn nationwide_pricing_is_pure_mileage() {
        let pricing = compute_pricing_national(VehicleType::LutonLowLoader, 2, 120.0);
        assert_eq!(pricing.zone, MoveZone::NationWide);
        assert_eq!(pricing.price_per_mile, Some(3.0));
        assert!((pricing.total_cost - 360.0).abs() < 1e-9);
        assert_eq!(
            pricing.notes[0],
            "Nationwide pricing: £3/mile × 120 miles = £360.00"
        );
        assert_eq!(pricing.hourly_rate, None);
    }

    #[test]
    fn recommendation_reports_zone_in_reasoning() {
        let mut quote_inputs = inputs(15.0, 0, 2);
        quote_inputs.distance_miles = 1.2;

        let quote = recommendation(&quote_inputs);
        assert_eq!(quote.vehicle_type, VehicleType::LutonLowLoader);
        assert_eq!(quote.crew_size, 2);
        assert!(quote.reasoning.ends_with("| Zone: Local | MoveZone: LOCAL"));
        assert_eq!(quote.pricing.zone, MoveZone::Local);
        assert_eq!(quote.pricing.hourly_rate, Some(95.0));
        assert_eq!(quote.pricing.price_per_mile, None);
        assert_eq!(quote.volume_category, VolumeCategory::Large);
        assert_eq!(quote.occupancy, Occupancy::GreaterThanOrEqualHalf);
        assert!(quote.suitable_for_single_trip);
    }

    #[test]
    fn recommendation_marks_overflow_loads_unsuitable_for_single_trip() {
        let quote = recommendation(&inputs(26.0, 0, 3));
        assert_eq!(quote.vehicle_type, VehicleType::LutonLowLoader);
        assert!(!quote.suitable_for_single_trip);
        assert_eq!(quote.volume_category, VolumeCategory::ExtraLarge);
    }

    #[test]
    fn non_local_distance_prices_hourly_not_mileage() {
        let mut quote_inputs = inputs(5.0, 0, 0);
        quote_inputs.distance_miles = 40.0;

        let quote = recommendation(&quote_inputs);
        assert_eq!(quote.pricing.zone, MoveZone::NonLocal);
        assert_eq!(quote.pricing.hourly_rate, Some(50.0));
        assert_eq!(quote.pricing.price_per_mile, None);
        assert!(quote.reasoning.ends_with("| Zone: Non Local | MoveZone: NON_LOCAL"));
    }

    #[test]
    fn maps_home_sizes_to_rooms() {
        assert_eq!(rooms_for_home_size("studio"), 0);
        assert_eq!(rooms_for_home_size("mini-move"), 0);
        assert_eq!(rooms_for_home_size("1-bedroom"), 1);
        assert_eq!(rooms_for_home_size("4-bedrooms"), 4);
        assert_eq!(rooms_for_home_size("castle"), 0);
    }
}
