use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Marker the donor service sends when the donor has never donated.
const NOT_AVAILABLE: &str = "N/A";

/// Donor profile and aggregate statistics as returned by `/donordetails`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorSummary {
    pub full_name: String,
    #[serde(rename = "totalDonations")]
    pub total_donations: f64,
    #[serde(rename = "itemsDonated")]
    pub items_donated: f64,
    #[serde(rename = "lastDonation", default)]
    pub last_donation: Option<String>,
    #[serde(rename = "impactScore")]
    pub impact_score: f64,
    #[serde(rename = "recentDonations", default)]
    pub recent_donations: Vec<RecentDonation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentDonation {
    pub month: String,
    pub items: f64,
}

/// Parsed form of the `lastDonation` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastDonation {
    NotAvailable,
    On(NaiveDate),
    /// Anything the service sent that is neither a date nor "N/A"; shown as-is.
    Unparsed(String),
}

impl LastDonation {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::NotAvailable;
        };
        if raw.is_empty() || raw == NOT_AVAILABLE {
            return Self::NotAvailable;
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Self::On(date);
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Self::On(timestamp.date_naive());
        }
        tracing::warn!("Unrecognised lastDonation value: {}", raw);
        Self::Unparsed(raw.to_string())
    }

    /// Renders the value, delegating real dates to `format_date`.
    pub fn display_with<F>(&self, format_date: F) -> String
    where
        F: Fn(NaiveDate) -> String,
    {
        match self {
            Self::NotAvailable => NOT_AVAILABLE.to_string(),
            Self::On(date) => format_date(*date),
            Self::Unparsed(raw) => raw.clone(),
        }
    }
}

impl DonorSummary {
    pub fn last_donation(&self) -> LastDonation {
        LastDonation::parse(self.last_donation.as_deref())
    }
}

/// Locale-free date rendering (month/day/year) for targets without `Intl`.
pub fn format_date_fallback(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Whole numbers without a fractional part, everything else with one decimal.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "full_name": "Ada Lovelace",
        "totalDonations": 12,
        "itemsDonated": 48,
        "lastDonation": "2024-03-01",
        "impactScore": 87.5,
        "recentDonations": [{"month": "Feb", "items": 4}]
    }"#;

    #[test]
    fn test_deserialize_donor_summary() {
        let summary: DonorSummary = serde_json::from_str(SAMPLE).expect("valid summary");

        assert_eq!(summary.full_name, "Ada Lovelace");
        assert_eq!(summary.total_donations, 12.0);
        assert_eq!(summary.items_donated, 48.0);
        assert_eq!(summary.impact_score, 87.5);
        assert_eq!(summary.recent_donations.len(), 1);
        assert_eq!(summary.recent_donations[0].month, "Feb");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"full_name": "B", "totalDonations": 0, "itemsDonated": 0, "impactScore": 0}"#;
        let summary: DonorSummary = serde_json::from_str(json).expect("valid summary");

        assert!(summary.recent_donations.is_empty());
        assert_eq!(summary.last_donation(), LastDonation::NotAvailable);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"{"totalDonations": 1, "itemsDonated": 1, "impactScore": 1}"#;
        assert!(serde_json::from_str::<DonorSummary>(json).is_err());
    }

    #[test]
    fn test_not_available_is_rendered_literally() {
        let last = LastDonation::parse(Some("N/A"));
        assert_eq!(last, LastDonation::NotAvailable);
        assert_eq!(last.display_with(|_| panic!("no date parsing expected")), "N/A");
    }

    #[test]
    fn test_iso_date_goes_through_formatter() {
        let last = LastDonation::parse(Some("2024-03-01"));
        assert_eq!(last, LastDonation::On(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));

        let rendered = last.display_with(format_date_fallback);
        assert_eq!(rendered, "03/01/2024");
        assert_ne!(rendered, "2024-03-01");
    }

    #[test]
    fn test_rfc3339_timestamp_uses_date_part() {
        let last = LastDonation::parse(Some("2024-03-01T18:30:00+00:00"));
        assert_eq!(last, LastDonation::On(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[test]
    fn test_garbage_is_kept_raw() {
        let last = LastDonation::parse(Some("last spring"));
        assert_eq!(last.display_with(format_date_fallback), "last spring");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(87.5), "87.5");
        assert_eq!(format_number(0.0), "0");
    }
}
