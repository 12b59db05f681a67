//! Vehicle and crew recommendation engine.
//!
//! Turns an itemised inventory into a vehicle choice, crew size, time
//! estimate, and price. Pure throughout: the engine owns no state and
//! performs no I/O.

pub mod domain;
pub(crate) mod engine;
pub mod inventory;
pub(crate) mod tables;

pub use domain::{
    MoveZone, Occupancy, PriceBreakdown, QuoteInputs, QuotePricing, QuoteRecommendation,
    TimeEstimate, VehicleRecommendation, VehicleType, VolumeCategory,
};
pub use engine::{
    complexity_factor, compute_pricing, compute_pricing_national, crew_size, estimate_time,
    move_zone, occupancy, recommend_vehicle_and_crew, recommendation, rooms_for_home_size,
    round_to_nearest_half_hour, volume_category, LOCAL_THRESHOLD_MILES,
};
pub use inventory::{
    analyze_inventory, InventoryAnalysis, InventoryLine, ItemCatalog, ItemCount, ItemSpec,
    HEAVY_ITEM_THRESHOLD_KG,
};
