//! Browser-independent pieces of the donor dashboard.
//! Everything here is pure so it can be exercised by native unit tests; the
//! frontend crate wires these types to the DOM, fetch and geolocation APIs.

mod donor;
mod history;
mod location;
mod session;
mod view;

pub use donor::{DonorSummary, LastDonation, RecentDonation, format_date_fallback};
pub use history::{ChartPoint, generate_synthetic_history, peak_items};
pub use location::{
    GeoPosition, LocationError, LocationEvent, LocationPhase, LocationRequestOptions,
    format_coordinates,
};
pub use session::{DONOR_ID_STORAGE_KEY, DonorSession, SessionError};
pub use view::{
    DECORATIVE_BAR_COUNT, DashboardState, DashboardView, StatCell, decorative_bar_heights,
    derive_view,
};
