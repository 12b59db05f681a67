use serde::{Deserialize, Serialize};

use super::domain::JobId;
use super::repository::JobRecord;

/// Outbound channels a confirmation can go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    Email,
    #[serde(rename = "whatsapp")]
    WhatsApp,
}

impl NotificationChannel {
    pub const fn label(self) -> &'static str {
        match self {
            NotificationChannel::Email => "email",
            NotificationChannel::WhatsApp => "whatsapp",
        }
    }
}

/// Customer-facing confirmation payload assembled once a booking is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub job_id: JobId,
    pub display_reference: String,
    pub business_ref: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub country_code: String,
    pub home_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
}

impl BookingConfirmation {
    pub fn for_record(record: &JobRecord) -> Self {
        BookingConfirmation {
            job_id: record.job_id.clone(),
            display_reference: record.display_reference(),
            business_ref: record.business_ref.clone(),
            customer_name: record.customer_name(),
            customer_email: record.contact.email.clone(),
            customer_phone: record.contact.phone.clone(),
            country_code: record.contact.country_code.clone(),
            home_size: record.home_size.clone(),
            collection_date: record
                .collection_date
                .as_ref()
                .map(|slot| slot.date.clone()),
            collection_address: record
                .collection_address
                .as_ref()
                .map(|address| address.address.clone()),
            delivery_address: record
                .delivery_address
                .as_ref()
                .map(|address| address.address.clone()),
        }
    }
}

/// Delivery result for one channel attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReceipt {
    pub channel: NotificationChannel,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageReceipt {
    pub fn delivered(channel: NotificationChannel, message_id: impl Into<String>) -> Self {
        MessageReceipt {
            channel,
            success: true,
            message_id: Some(message_id.into()),
            error: None,
        }
    }

    pub fn failed(channel: NotificationChannel, error: impl Into<String>) -> Self {
        MessageReceipt {
            channel,
            success: false,
            message_id: None,
            error: Some(error.into()),
        }
    }
}

/// Outbound confirmation port. Implementations return one receipt per channel
/// they attempted; delivery failures live in the receipts, never in an `Err`.
pub trait NotificationSink: Send + Sync {
    fn send(&self, confirmation: &BookingConfirmation) -> Vec<MessageReceipt>;
}
