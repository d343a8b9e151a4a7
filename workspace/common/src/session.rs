use thiserror::Error;

/// localStorage key the login flow writes the donor identifier to.
pub const DONOR_ID_STORAGE_KEY: &str = "donor_id";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No donor ID found. Please log in again.")]
    MissingDonorId,
}

/// The signed-in donor, handed to the dashboard instead of being looked up inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorSession {
    donor_id: String,
}

impl DonorSession {
    /// Builds a session from whatever storage held. Blank ids count as missing.
    pub fn from_stored(stored: Option<String>) -> Result<Self, SessionError> {
        match stored.map(|id| id.trim().to_string()) {
            Some(donor_id) if !donor_id.is_empty() => Ok(Self { donor_id }),
            _ => Err(SessionError::MissingDonorId),
        }
    }

    pub fn donor_id(&self) -> &str {
        &self.donor_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_stored_id() {
        let session = DonorSession::from_stored(Some(" d-42 ".to_string())).expect("valid id");
        assert_eq!(session.donor_id(), "d-42");
    }

    #[test]
    fn test_missing_or_blank_id() {
        assert_eq!(DonorSession::from_stored(None), Err(SessionError::MissingDonorId));
        assert_eq!(
            DonorSession::from_stored(Some("   ".to_string())),
            Err(SessionError::MissingDonorId)
        );
    }
}
