use std::sync::Arc;

use crate::business::BusinessDirectory;

use super::domain::BookingSubmission;

/// Validation errors raised before a submission reaches pricing or storage.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("unknown business reference: {0:?}")]
    UnknownBusiness(String),
    #[error("home size must be a non-empty string")]
    MissingHomeSize,
    #[error("contact requires both a first and a last name")]
    IncompleteContactName,
    #[error("contact email is not plausible: {0:?}")]
    InvalidEmail(String),
}

/// Guard screening submissions against the tenant directory and the booking
/// form's contact rules.
#[derive(Debug, Clone)]
pub struct IntakeGuard {
    directory: Arc<BusinessDirectory>,
}

impl IntakeGuard {
    pub fn new(directory: Arc<BusinessDirectory>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &BusinessDirectory {
        &self.directory
    }

    /// Check a submission before it is priced and stored. Pricing fields are
    /// deliberately not screened here; the calculator is total over them.
    pub fn screen(&self, submission: &BookingSubmission) -> Result<(), IntakeError> {
        self.screen_business(&submission.business_ref)?;

        if submission.home_size.trim().is_empty() {
            return Err(IntakeError::MissingHomeSize);
        }

        let contact = &submission.contact;
        if contact.first_name.trim().is_empty() || contact.last_name.trim().is_empty() {
            return Err(IntakeError::IncompleteContactName);
        }
        if !looks_like_email(&contact.email) {
            return Err(IntakeError::InvalidEmail(contact.email.clone()));
        }

        Ok(())
    }

    /// Check only the business reference, for requests carrying no contact.
    pub fn screen_business(&self, business_ref: &str) -> Result<(), IntakeError> {
        if self.directory.lookup(business_ref).is_none() {
            return Err(IntakeError::UnknownBusiness(business_ref.to_string()));
        }
        Ok(())
    }
}

/// The booking form's email shape: non-empty local part, one '@', a dot
/// inside the domain with non-empty segments around it, no whitespace.
fn looks_like_email(raw: &str) -> bool {
    if raw.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
