use chrono::{Datelike, Local};
use common::{
    DashboardState, DashboardView, DonorSession, derive_view, generate_synthetic_history,
    peak_items,
};
use yew::prelude::*;

use super::chart::ActivityChart;
use super::location::{LocationErrorBanner, LocationPrompt};
use super::stats::StatGrid;
use super::welcome::WelcomeBanner;
use crate::browser;
use crate::hooks::{use_donor_summary, use_location_request};
use crate::settings;
use crate::ui::error::{ErrorDisplay, InlineError};
use crate::ui::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub session: Option<DonorSession>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &Props) -> Html {
    let fetch_state = use_donor_summary(props.session.clone());
    let location = use_location_request(settings::get_settings().location_prompt_delay_ms);
    let location_dismissed = use_state(|| false);

    // Generated once per mount; only the peak is used to label the chart scale.
    let history_peak = use_memo((), |_| {
        let history = generate_synthetic_history(Local::now().year(), &mut browser::seeded_rng());
        log::trace!("Generated {} months of synthetic history", history.len());
        peak_items(&history)
    });

    let state = DashboardState {
        loading: fetch_state.is_loading(),
        summary: fetch_state.data().cloned(),
        error: fetch_state.error().cloned(),
        location: location.clone(),
    };

    let location_banner = match location.error_message() {
        Some(message) if !*location_dismissed => {
            let on_dismiss = {
                let location_dismissed = location_dismissed.clone();
                Callback::from(move |_: ()| location_dismissed.set(true))
            };
            html! { <LocationErrorBanner {message} {on_dismiss} /> }
        }
        _ => html! {},
    };

    let body = match derive_view(&state, browser::format_locale_date) {
        DashboardView::Loading => html! { <Loading text={"Loading your dashboard..."} /> },
        DashboardView::NoData { error } => html! {
            <ErrorDisplay title={"No donor data available"} message={error} />
        },
        DashboardView::Ready {
            greeting,
            coordinates,
            stats,
            fetch_error,
        } => html! {
            <>
                <WelcomeBanner {greeting} {coordinates} />
                if let Some(message) = fetch_error {
                    <InlineError {message} />
                }
                <StatGrid {stats} />
                <ActivityChart peak_items={*history_peak} />
            </>
        },
    };

    html! {
        <>
            if location.show_prompt() {
                <LocationPrompt />
            }
            {location_banner}
            {body}
        </>
    }
}
