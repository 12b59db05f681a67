use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::bookings::domain::{
    AddressDetails, BookingSubmission, ContactDetails, DateDetails, FurnitureItem, JobId,
    PackingMaterial,
};
use crate::bookings::notify::{
    BookingConfirmation, MessageReceipt, NotificationChannel, NotificationSink,
};
use crate::bookings::pricing;
use crate::bookings::repository::{JobRecord, JobRepository, RepositoryError};
use crate::bookings::router::booking_router;
use crate::bookings::service::BookingService;
use crate::bookings::{InMemoryJobRepository, JobStatus};
use crate::business::BusinessDirectory;

pub(super) fn contact() -> ContactDetails {
    ContactDetails {
        first_name: "Amelia".to_string(),
        last_name: "Burrows".to_string(),
        email: "amelia.burrows@example.com".to_string(),
        country_code: "+44".to_string(),
        phone: "07700 900123".to_string(),
        has_promo_code: false,
        promo_code: String::new(),
        sign_up_for_news: false,
        agree_to_terms: true,
    }
}

pub(super) fn collection_address() -> AddressDetails {
    AddressDetails {
        postcode: "N1 9GU".to_string(),
        address: "12 Chapel Market, London".to_string(),
        floor: "3".to_string(),
        has_parking: true,
        has_lift: false,
    }
}

pub(super) fn delivery_address() -> AddressDetails {
    AddressDetails {
        postcode: "E8 3RL".to_string(),
        address: "48 Broadway Market, London".to_string(),
        floor: "0".to_string(),
        has_parking: false,
        has_lift: true,
    }
}

fn initial_furniture() -> Vec<FurnitureItem> {
    vec![
        FurnitureItem {
            item_id: "sofa-3seat".to_string(),
            name: "3 Seater Sofa".to_string(),
            quantity: 1,
            category: Some("Living".to_string()),
        },
        FurnitureItem {
            item_id: "bookcase".to_string(),
            name: "Bookcase".to_string(),
            quantity: 3,
            category: Some("Living".to_string()),
        },
    ]
}

fn submitted_furniture() -> Vec<FurnitureItem> {
    vec![
        FurnitureItem {
            item_id: "sofa-3seat".to_string(),
            name: "3 Seater Sofa".to_string(),
            quantity: 3,
            category: Some("Living".to_string()),
        },
        FurnitureItem {
            item_id: "bookcase".to_string(),
            name: "Bookcase".to_string(),
            quantity: 3,
            category: Some("Living".to_string()),
        },
        FurnitureItem {
            item_id: "lamp".to_string(),
            name: "Table Lamp".to_string(),
            quantity: 2,
            category: None,
        },
    ]
}

fn packing_materials() -> Vec<PackingMaterial> {
    vec![
        PackingMaterial {
            material_id: "small-boxes".to_string(),
            name: "Small Boxes".to_string(),
            quantity: 5,
        },
        PackingMaterial {
            material_id: "tape".to_string(),
            name: "Packing Tape".to_string(),
            quantity: 2,
        },
    ]
}

/// Two-bed move with a furniture delta, itemized materials, and a third-floor
/// walk-up collection. Priced by hand: 449 + 50 + 16 + 0 + 45 = 560.
pub(super) fn submission() -> BookingSubmission {
    BookingSubmission {
        business_ref: "DEMO".to_string(),
        home_size: "2-bedrooms".to_string(),
        furniture_items: submitted_furniture(),
        initial_furniture_items: initial_furniture(),
        packing_service: "self-pack".to_string(),
        packing_materials: packing_materials(),
        dismantle_package: false,
        collection_address: Some(collection_address()),
        delivery_address: Some(delivery_address()),
        collection_date: Some(DateDetails {
            date: "2026-09-14".to_string(),
            time_slot: "9:00 - 15:00".to_string(),
            interval_type: Some("6hours".to_string()),
        }),
        materials_delivery_date: Some(DateDetails {
            date: "2026-09-10".to_string(),
            time_slot: "9:00 - 15:00".to_string(),
            interval_type: None,
        }),
        contact: contact(),
    }
}

pub(super) fn record_created_at(created_at: DateTime<Utc>) -> JobRecord {
    let submission = submission();
    let breakdown = pricing::quote(&submission.pricing_input());
    JobRecord::from_submission(JobId::generate(), created_at, submission, breakdown)
}

#[derive(Default, Clone)]
pub(super) struct RecordingSink {
    confirmations: Arc<Mutex<Vec<BookingConfirmation>>>,
}

impl RecordingSink {
    pub(super) fn confirmations(&self) -> Vec<BookingConfirmation> {
        self.confirmations
            .lock()
            .expect("sink mutex poisoned")
            .clone()
    }
}

impl NotificationSink for RecordingSink {
    fn send(&self, confirmation: &BookingConfirmation) -> Vec<MessageReceipt> {
        self.confirmations
            .lock()
            .expect("sink mutex poisoned")
            .push(confirmation.clone());
        vec![
            MessageReceipt::delivered(
                NotificationChannel::Email,
                format!("email-{}", confirmation.job_id),
            ),
            MessageReceipt::delivered(
                NotificationChannel::WhatsApp,
                format!("wa-{}", confirmation.job_id),
            ),
        ]
    }
}

/// Sink whose deliveries always fail; submissions must survive it.
pub(super) struct FailingSink;

impl NotificationSink for FailingSink {
    fn send(&self, _confirmation: &BookingConfirmation) -> Vec<MessageReceipt> {
        vec![
            MessageReceipt::failed(NotificationChannel::Email, "smtp relay rejected sender"),
            MessageReceipt::failed(NotificationChannel::WhatsApp, "template not approved"),
        ]
    }
}

pub(super) struct ConflictRepository;

impl JobRepository for ConflictRepository {
    fn insert(&self, _record: JobRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &JobId) -> Result<Option<JobRecord>, RepositoryError> {
        Ok(None)
    }

    fn list_all(&self) -> Result<Vec<JobRecord>, RepositoryError> {
        Ok(Vec::new())
    }

    fn update_status(&self, _id: &JobId, _status: JobStatus) -> Result<bool, RepositoryError> {
        Ok(false)
    }

    fn update_notes(&self, _id: &JobId, _notes: &str) -> Result<bool, RepositoryError> {
        Ok(false)
    }
}

pub(super) struct UnavailableRepository;

impl JobRepository for UnavailableRepository {
    fn insert(&self, _record: JobRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &JobId) -> Result<Option<JobRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_all(&self) -> Result<Vec<JobRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_status(&self, _id: &JobId, _status: JobStatus) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_notes(&self, _id: &JobId, _notes: &str) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    BookingService<InMemoryJobRepository, RecordingSink>,
    Arc<InMemoryJobRepository>,
    Arc<RecordingSink>,
) {
    let repository = Arc::new(InMemoryJobRepository::default());
    let sink = Arc::new(RecordingSink::default());
    let service = BookingService::new(
        Arc::new(BusinessDirectory::standard()),
        repository.clone(),
        sink.clone(),
    );
    (service, repository, sink)
}

pub(super) fn booking_router_with_service(
    service: BookingService<InMemoryJobRepository, RecordingSink>,
) -> axum::Router {
    booking_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
