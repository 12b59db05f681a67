use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::autoquote::ItemCount;

/// Identifier wrapper for stored jobs. Generated ids are v4 UUID strings;
/// lookups treat any string as a plain key, so a malformed id simply misses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl JobId {
    /// Fresh random identifier for a new booking.
    pub fn generate() -> Self {
        JobId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Review status tracked on every stored job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Confirmed => "confirmed",
            JobStatus::InProgress => "in-progress",
            JobStatus::Completed => "completed",
        }
    }

    /// Statuses in workflow order, for review pickers and the demo walkthrough.
    pub const fn ordered() -> [JobStatus; 4] {
        [
            JobStatus::Pending,
            JobStatus::Confirmed,
            JobStatus::InProgress,
            JobStatus::Completed,
        ]
    }
}

/// One furniture line on a booking: a catalog item and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureItem {
    pub item_id: String,
    pub name: String,
    /// Signed on purpose: the calculator is total over its inputs, and a
    /// negative quantity mechanically reduces the charge.
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Packing material line. Charging uses the fixed price table keyed by
/// `material_id`; the name is display text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingMaterial {
    pub material_id: String,
    pub name: String,
    pub quantity: i64,
}

/// Collection or delivery address captured on the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetails {
    pub postcode: String,
    pub address: String,
    /// Free text ("ground", "3", "6+"); pricing parses the leading digits.
    pub floor: String,
    pub has_parking: bool,
    pub has_lift: bool,
}

/// Scheduled slot for a collection or a materials delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateDetails {
    pub date: String,
    pub time_slot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_type: Option<String>,
}

/// Customer contact block collected on the final booking step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country_code: String,
    pub phone: String,
    pub has_promo_code: bool,
    pub promo_code: String,
    pub sign_up_for_news: bool,
    pub agree_to_terms: bool,
}

/// Itemized quote. `total` is always the exact sum of the five components;
/// it is computed in the constructor and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub base_price: i64,
    pub furniture_charge: i64,
    pub packing_materials_charge: i64,
    /// Mileage pricing is not wired in; always zero today.
    pub distance_surcharge: i64,
    pub floor_surcharge: i64,
    pub total: i64,
}

impl CostBreakdown {
    pub fn new(
        base_price: i64,
        furniture_charge: i64,
        packing_materials_charge: i64,
        distance_surcharge: i64,
        floor_surcharge: i64,
    ) -> Self {
        CostBreakdown {
            base_price,
            furniture_charge,
            packing_materials_charge,
            distance_surcharge,
            floor_surcharge,
            total: base_price
                + furniture_charge
                + packing_materials_charge
                + distance_surcharge
                + floor_surcharge,
        }
    }
}

/// Everything the quote calculator looks at. Booking submissions carry a
/// superset of these fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    pub home_size: String,
    #[serde(default)]
    pub furniture_items: Vec<FurnitureItem>,
    #[serde(default)]
    pub initial_furniture_items: Vec<FurnitureItem>,
    #[serde(default)]
    pub packing_service: String,
    #[serde(default)]
    pub packing_materials: Vec<PackingMaterial>,
    #[serde(default)]
    pub dismantle_package: bool,
    #[serde(default)]
    pub collection_address: Option<AddressDetails>,
    #[serde(default)]
    pub delivery_address: Option<AddressDetails>,
}

/// A booking as accepted at the boundary, before screening and pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub business_ref: String,
    pub home_size: String,
    pub furniture_items: Vec<FurnitureItem>,
    #[serde(default)]
    pub initial_furniture_items: Vec<FurnitureItem>,
    #[serde(default)]
    pub packing_service: String,
    #[serde(default)]
    pub packing_materials: Vec<PackingMaterial>,
    #[serde(default)]
    pub dismantle_package: bool,
    #[serde(default)]
    pub collection_address: Option<AddressDetails>,
    #[serde(default)]
    pub delivery_address: Option<AddressDetails>,
    #[serde(default)]
    pub collection_date: Option<DateDetails>,
    #[serde(default)]
    pub materials_delivery_date: Option<DateDetails>,
    #[serde(default)]
    pub contact: ContactDetails,
}

impl BookingSubmission {
    /// The pricing-relevant slice of the submission.
    pub fn pricing_input(&self) -> PricingInput {
        PricingInput {
            home_size: self.home_size.clone(),
            furniture_items: self.furniture_items.clone(),
            initial_furniture_items: self.initial_furniture_items.clone(),
            packing_service: self.packing_service.clone(),
            packing_materials: self.packing_materials.clone(),
            dismantle_package: self.dismantle_package,
            collection_address: self.collection_address.clone(),
            delivery_address: self.delivery_address.clone(),
        }
    }
}

/// Auto-quote request: what the engine needs to size a vehicle and crew and
/// price the move. Distance and driving time come from the caller; the core
/// does not geocode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecommendationRequest {
    pub business_ref: String,
    pub home_size: String,
    pub furniture_items: Vec<ItemCount>,
    #[serde(default)]
    pub distance_miles: f64,
    #[serde(default)]
    pub driving_minutes: f64,
    #[serde(default)]
    pub no_parking: bool,
    #[serde(default)]
    pub no_lift: bool,
    #[serde(default)]
    pub customer_assistance: bool,
    #[serde(default)]
    pub difficult_access: bool,
}

/// Short human reference derived from a job id: the first eight characters,
/// uppercased.
pub fn short_job_ref(job_id: &JobId) -> String {
    job_id.0.chars().take(8).collect::<String>().to_uppercase()
}

/// Human-facing label for a job. An assigned display id wins verbatim;
/// otherwise the label is derived from the generated id.
pub fn format_display_id(job_id: &JobId, display_job_id: Option<&str>) -> String {
    match display_job_id {
        Some(display) if !display.is_empty() => display.to_string(),
        _ => format!("JOB-{}", short_job_ref(job_id)),
    }
}

/// Components of an assigned display id such as "DEMO-00042".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayJobId {
    pub business_ref: String,
    pub sequence: u32,
}

/// Split an assigned display id into its business reference and sequence.
/// The accepted shape is four uppercase letters, a dash, five digits.
pub fn parse_display_job_id(value: &str) -> Option<DisplayJobId> {
    let (prefix, digits) = value.split_once('-')?;
    if prefix.len() != 4 || !prefix.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    if digits.len() != 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let sequence = digits.parse().ok()?;
    Some(DisplayJobId {
        business_ref: prefix.to_string(),
        sequence,
    })
}
