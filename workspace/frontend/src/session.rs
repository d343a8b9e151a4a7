use common::{DONOR_ID_STORAGE_KEY, DonorSession};

use crate::browser;

/// Session established by the login flow, if any.
///
/// Read once at start-up and handed down through context so the dashboard
/// never reaches into storage itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionContext {
    pub session: Option<DonorSession>,
}

impl SessionContext {
    pub fn from_storage() -> Self {
        match DonorSession::from_stored(browser::local_storage_item(DONOR_ID_STORAGE_KEY)) {
            Ok(session) => {
                log::debug!("Donor session found for ID: {}", session.donor_id());
                Self {
                    session: Some(session),
                }
            }
            Err(e) => {
                log::warn!("No donor session: {}", e);
                Self::default()
            }
        }
    }
}
