//! Rate cards for the fleet. Crew sizes outside the published tiers clamp to
//! the nearest tier rather than faulting; the engine only ever produces
//! published combinations.

use super::domain::{MoveZone, Occupancy, VehicleType};

pub(crate) struct HourlyRate {
    pub hourly_rate: f64,
    pub extra_30min_rate: f64,
    pub rate_is_per_mover: bool,
}

pub(crate) struct MileRate {
    pub price_per_mile: f64,
}

/// Hourly rate for a vehicle, crew, and zone. Only the Transit Custom prices
/// local and non-local differently.
pub(crate) fn hourly_rate(vehicle: VehicleType, crew_size: u32, zone: MoveZone) -> HourlyRate {
    match vehicle {
        VehicleType::TransitCustom => match zone {
            MoveZone::Local => HourlyRate {
                hourly_rate: 45.0,
                extra_30min_rate: 19.0,
                rate_is_per_mover: true,
            },
            MoveZone::NonLocal | MoveZone::NationWide => HourlyRate {
                hourly_rate: 50.0,
                extra_30min_rate: 22.0,
                rate_is_per_mover: true,
            },
        },
        VehicleType::Transit350 => {
            if crew_size <= 1 {
                HourlyRate {
                    hourly_rate: 70.0,
                    extra_30min_rate: 32.50,
                    rate_is_per_mover: false,
                }
            } else {
                HourlyRate {
                    hourly_rate: 85.0,
                    extra_30min_rate: 38.0,
                    rate_is_per_mover: false,
                }
            }
        }
        VehicleType::LutonLowLoader => {
            if crew_size >= 3 {
                HourlyRate {
                    hourly_rate: 115.0,
                    extra_30min_rate: 52.50,
                    rate_is_per_mover: false,
                }
            } else {
                HourlyRate {
                    hourly_rate: 95.0,
                    extra_30min_rate: 42.0,
                    rate_is_per_mover: false,
                }
            }
        }
    }
}

/// Nationwide mileage rate for a vehicle and crew.
pub(crate) fn mile_rate(vehicle: VehicleType, crew_size: u32) -> MileRate {
    let price_per_mile = match vehicle {
        VehicleType::TransitCustom => 1.70,
        VehicleType::Transit350 => {
            if crew_size <= 1 {
                1.85
            } else {
                2.85
            }
        }
        VehicleType::LutonLowLoader => match crew_size {
            0 | 1 => 2.00,
            2 => 3.00,
            _ => 4.00,
        },
    };
    MileRate { price_per_mile }
}

/// Base labour hours. The Luton scales with occupancy; the Transits always
/// start at one hour.
pub(crate) fn base_hours(vehicle: VehicleType, occupancy: Occupancy) -> f64 {
    match vehicle {
        VehicleType::TransitCustom | VehicleType::Transit350 => 1.0,
        VehicleType::LutonLowLoader => match occupancy {
            Occupancy::LessThanHalf => 2.0,
            Occupancy::GreaterThanOrEqualHalf => 3.0,
        },
    }
}
