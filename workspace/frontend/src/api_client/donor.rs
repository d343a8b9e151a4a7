use common::{DonorSession, DonorSummary};

use crate::api_client::{self, ApiError};

pub async fn get_donor_details(session: &DonorSession) -> Result<DonorSummary, ApiError> {
    log::trace!("Fetching donor details for donor ID: {}", session.donor_id());
    let result = api_client::get::<DonorSummary>(
        "/donordetails",
        &[("donor_id", session.donor_id())],
    )
    .await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch donor details: {}", e);
    } else {
        log::info!("Successfully fetched donor details for donor ID: {}", session.donor_id());
    }

    result
}
