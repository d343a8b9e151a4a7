use chrono::NaiveDate;
use rand::Rng;

use crate::donor::{DonorSummary, format_number};
use crate::location::{LocationPhase, format_coordinates};

pub const DECORATIVE_BAR_COUNT: usize = 30;

/// Everything the dashboard screen renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub loading: bool,
    pub summary: Option<DonorSummary>,
    pub error: Option<String>,
    pub location: LocationPhase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCell {
    pub title: &'static str,
    pub value: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Loading,
    NoData {
        error: Option<String>,
    },
    Ready {
        greeting: String,
        coordinates: Option<String>,
        stats: Vec<StatCell>,
        /// A fetch error that happened alongside usable data; shown inline above the stats.
        fetch_error: Option<String>,
    },
}

pub fn derive_view<F>(state: &DashboardState, format_date: F) -> DashboardView
where
    F: Fn(NaiveDate) -> String,
{
    if state.loading {
        return DashboardView::Loading;
    }

    let Some(summary) = &state.summary else {
        return DashboardView::NoData {
            error: state.error.clone(),
        };
    };

    let stats = vec![
        StatCell {
            title: "Total Donations",
            value: format_number(summary.total_donations),
            icon: "fas fa-hand-holding-heart",
        },
        StatCell {
            title: "Items Donated",
            value: format_number(summary.items_donated),
            icon: "fas fa-box-open",
        },
        StatCell {
            title: "Last Donation",
            value: summary.last_donation().display_with(format_date),
            icon: "fas fa-calendar-day",
        },
        StatCell {
            title: "Impact Score",
            value: format_number(summary.impact_score),
            icon: "fas fa-star",
        },
    ];

    DashboardView::Ready {
        greeting: format!("Welcome back, {}!", summary.full_name),
        coordinates: state.location.position().map(format_coordinates),
        stats,
        fetch_error: state.error.clone(),
    }
}

/// Bar heights in percent for the decorative activity strip.
///
/// A random component over a slow sine wave; deliberately unrelated to any
/// donation data.
pub fn decorative_bar_heights<R>(count: usize, rng: &mut R) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    (0..count)
        .map(|i| {
            let wave = (i as f64 * 0.5).sin() * 20.0;
            (35.0 + rng.random::<f64>() * 40.0 + wave).clamp(8.0, 100.0)
        })
        .collect()
}
