use chrono::NaiveDate;
use rand::Rng;

const MIN_ITEMS: u32 = 10;
const MAX_ITEMS: u32 = 59;

/// One month of placeholder donation volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub month: String,
    pub items: u32,
}

/// Twelve synthetic data points, one per month of `year`.
///
/// The counts are random filler and carry no meaning; they exist so the
/// dashboard has something to scale its decorative chart against until the
/// service exposes a real monthly breakdown.
pub fn generate_synthetic_history<R>(year: i32, rng: &mut R) -> Vec<ChartPoint>
where
    R: Rng + ?Sized,
{
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|first_day| ChartPoint {
            month: first_day.format("%b %Y").to_string(),
            items: rng.random_range(MIN_ITEMS..=MAX_ITEMS),
        })
        .collect()
}

pub fn peak_items(history: &[ChartPoint]) -> u32 {
    history.iter().map(|point| point.items).max().unwrap_or(0)
}
