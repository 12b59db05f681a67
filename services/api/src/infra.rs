use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use removals_core::bookings::{
    BookingConfirmation, MessageReceipt, NotificationChannel, NotificationSink,
};
use removals_core::config::MessagingConfig;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Confirmation sink for the service binary, driven by the messaging config.
/// A disabled channel is skipped. An enabled channel in mock mode logs the
/// confirmation and reports success; outside mock mode the receipt fails
/// because this binary wires no live transport.
pub(crate) struct LoggingNotificationSink {
    config: MessagingConfig,
}

impl LoggingNotificationSink {
    pub(crate) fn from_config(config: &MessagingConfig) -> Self {
        Self { config: *config }
    }

    fn dispatch(
        &self,
        channel: NotificationChannel,
        confirmation: &BookingConfirmation,
    ) -> MessageReceipt {
        if self.config.mock_mode {
            info!(
                channel = channel.label(),
                job_id = %confirmation.job_id,
                reference = %confirmation.display_reference,
                customer = %confirmation.customer_name,
                "mock booking confirmation"
            );
            MessageReceipt::delivered(
                channel,
                format!("mock-{}-{}", channel.label(), confirmation.job_id),
            )
        } else {
            MessageReceipt::failed(channel, "no live transport configured")
        }
    }
}

impl NotificationSink for LoggingNotificationSink {
    fn send(&self, confirmation: &BookingConfirmation) -> Vec<MessageReceipt> {
        let mut receipts = Vec::new();
        if self.config.email_enabled {
            receipts.push(self.dispatch(NotificationChannel::Email, confirmation));
        }
        if self.config.whatsapp_enabled {
            receipts.push(self.dispatch(NotificationChannel::WhatsApp, confirmation));
        }
        receipts
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryConfirmationSink {
    confirmations: Arc<Mutex<Vec<BookingConfirmation>>>,
}

impl NotificationSink for InMemoryConfirmationSink {
    fn send(&self, confirmation: &BookingConfirmation) -> Vec<MessageReceipt> {
        let mut guard = self.confirmations.lock().expect("confirmation mutex poisoned");
        guard.push(confirmation.clone());
        vec![MessageReceipt::delivered(
            NotificationChannel::Email,
            format!("demo-{}", confirmation.job_id),
        )]
    }
}

impl InMemoryConfirmationSink {
    pub(crate) fn confirmations(&self) -> Vec<BookingConfirmation> {
        self.confirmations
            .lock()
            .expect("confirmation mutex poisoned")
            .clone()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use removals_core::bookings::JobId;

    fn confirmation() -> BookingConfirmation {
        BookingConfirmation {
            job_id: JobId("11112222-3333-4444-8555-666677778888".to_string()),
            display_reference: "JOB-11112222".to_string(),
            business_ref: "DEMO".to_string(),
            customer_name: "Test Customer".to_string(),
            customer_email: "customer@example.com".to_string(),
            customer_phone: "07700 900000".to_string(),
            country_code: "+44".to_string(),
            home_size: "2-bedrooms".to_string(),
            collection_date: None,
            collection_address: None,
            delivery_address: None,
        }
    }

    #[test]
    fn disabled_channels_produce_no_receipts() {
        let sink = LoggingNotificationSink::from_config(&MessagingConfig::default());
        assert!(sink.send(&confirmation()).is_empty());
    }

    #[test]
    fn mock_mode_reports_delivery_per_enabled_channel() {
        let sink = LoggingNotificationSink::from_config(&MessagingConfig {
            mock_mode: true,
            email_enabled: true,
            whatsapp_enabled: true,
        });

        let receipts = sink.send(&confirmation());
        assert_eq!(receipts.len(), 2);
        assert!(receipts.iter().all(|receipt| receipt.success));
        assert_eq!(receipts[0].channel, NotificationChannel::Email);
        assert_eq!(receipts[1].channel, NotificationChannel::WhatsApp);
        assert_eq!(
            receipts[0].message_id.as_deref(),
            Some("mock-email-11112222-3333-4444-8555-666677778888")
        );
    }

    #[test]
    fn live_channels_fail_without_a_transport() {
        let sink = LoggingNotificationSink::from_config(&MessagingConfig {
            mock_mode: false,
            email_enabled: true,
            whatsapp_enabled: false,
        });

        let receipts = sink.send(&confirmation());
        assert_eq!(receipts.len(), 1);
        assert!(!receipts[0].success);
        assert_eq!(
            receipts[0].error.as_deref(),
            Some("no live transport configured")
        );
    }
}
