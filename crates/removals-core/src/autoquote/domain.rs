use serde::{Deserialize, Serialize};

/// The fleet the engine can recommend. Serialized values are the public
/// vehicle names quoted to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "Ford Transit Custom")]
    TransitCustom,
    #[serde(rename = "Ford Transit 350 L3H3")]
    Transit350,
    #[serde(rename = "Luton Low Loader")]
    LutonLowLoader,
}

impl VehicleType {
    pub const fn label(self) -> &'static str {
        match self {
            VehicleType::TransitCustom => "Ford Transit Custom",
            VehicleType::Transit350 => "Ford Transit 350 L3H3",
            VehicleType::LutonLowLoader => "Luton Low Loader",
        }
    }

    /// Load space in cubic metres.
    pub const fn max_capacity_m3(self) -> f64 {
        match self {
            VehicleType::TransitCustom => 6.2,
            VehicleType::Transit350 => 13.19,
            VehicleType::LutonLowLoader => 25.0,
        }
    }
}

/// Distance band a move prices under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveZone {
    Local,
    NonLocal,
    NationWide,
}

impl MoveZone {
    /// Title-cased form used in customer-facing notes.
    pub const fn label(self) -> &'static str {
        match self {
            MoveZone::Local => "Local",
            MoveZone::NonLocal => "Non Local",
            MoveZone::NationWide => "Nation Wide",
        }
    }

    /// Uppercase token appended to reasoning strings.
    pub const fn token(self) -> &'static str {
        match self {
            MoveZone::Local => "LOCAL",
            MoveZone::NonLocal => "NON_LOCAL",
            MoveZone::NationWide => "NATION_WIDE",
        }
    }
}

/// How full the recommended vehicle would be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupancy {
    LessThanHalf,
    GreaterThanOrEqualHalf,
}

/// Volume bracket aligned with the fleet capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeCategory {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

/// Normalized inputs the engine decides from. Distance and driving time are
/// supplied by the caller; volume and heavy-item counts come from inventory
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInputs {
    pub total_volume: f64,
    pub num_heavy_items: u32,
    pub customer_assistance: bool,
    pub num_rooms: u32,
    pub difficult_access: bool,
    pub distance_miles: f64,
    pub no_parking: bool,
    pub no_lift: bool,
    pub driving_minutes: f64,
}

/// Time estimate for the move. Driving minutes are already rounded to the
/// nearest half hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEstimate {
    pub base_hours: f64,
    pub add_on_minutes: u32,
    pub driving_minutes: u32,
    pub total_hours: f64,
    pub notes: Vec<String>,
}

/// Full pricing computation. Hourly fields are `None` for nationwide moves
/// and mileage fields are `None` for hourly moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub zone: MoveZone,
    pub rate_is_per_mover: bool,
    pub crew_size: u32,
    pub total_cost: f64,
    pub notes: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub base_hours: Option<f64>,
    pub extra_30min_rate: Option<f64>,
    pub extra_half_hours: Option<u32>,
    pub base_cost: Option<f64>,
    pub extra_cost: Option<f64>,
    pub price_per_mile: Option<f64>,
    pub distance_miles: Option<f64>,
}

/// Pricing block as exposed on the wire; absent fields are omitted entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePricing {
    pub zone: MoveZone,
    pub rate_is_per_mover: bool,
    pub total_cost: f64,
    pub pricing_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_mile: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
}

/// Intermediate vehicle and crew pick with the reasoning that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecommendation {
    pub vehicle_type: VehicleType,
    pub crew_size: u32,
    pub minimum_hours: String,
    pub reasoning: String,
}

/// Everything the auto-quote returns for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecommendation {
    pub vehicle_type: VehicleType,
    pub crew_size: u32,
    pub reasoning: String,
    pub time_estimate: TimeEstimate,
    pub pricing: QuotePricing,
    pub occupancy: Occupancy,
    pub volume_category: VolumeCategory,
    pub complexity_factor: f64,
    pub suitable_for_single_trip: bool,
    pub total_volume: f64,
    pub num_heavy_items: u32,
}
