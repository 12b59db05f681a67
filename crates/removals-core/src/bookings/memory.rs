use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::{JobId, JobStatus};
use super::repository::{JobRecord, JobRepository, RepositoryError};

/// Process-local job store backing development, the demo, and the tests.
#[derive(Clone, Default)]
pub struct InMemoryJobRepository {
    records: Arc<Mutex<HashMap<JobId, JobRecord>>>,
}

impl JobRepository for InMemoryJobRepository {
    fn insert(&self, record: JobRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().expect("job store mutex poisoned");
        if records.contains_key(&record.job_id) {
            return Err(RepositoryError::Conflict);
        }
        records.insert(record.job_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &JobId) -> Result<Option<JobRecord>, RepositoryError> {
        let records = self.records.lock().expect("job store mutex poisoned");
        Ok(records.get(id).cloned())
    }

    fn list_all(&self) -> Result<Vec<JobRecord>, RepositoryError> {
        let records = self.records.lock().expect("job store mutex poisoned");
        let mut all: Vec<JobRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    fn update_status(&self, id: &JobId, status: JobStatus) -> Result<bool, RepositoryError> {
        let mut records = self.records.lock().expect("job store mutex poisoned");
        match records.get_mut(id) {
            Some(record) => {
                record.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn update_notes(&self, id: &JobId, notes: &str) -> Result<bool, RepositoryError> {
        let mut records = self.records.lock().expect("job store mutex poisoned");
        match records.get_mut(id) {
            Some(record) => {
                record.internal_notes = notes.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
