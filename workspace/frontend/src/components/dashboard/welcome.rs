use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub greeting: String,
    #[prop_or_default]
    pub coordinates: Option<String>,
}

#[function_component(WelcomeBanner)]
pub fn welcome_banner(props: &Props) -> Html {
    let navigator = use_navigator();

    let go_to = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Navigating to {:?}", route);
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    html! {
        <div class="card bg-primary text-primary-content shadow mb-6">
            <div class="card-body md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h2 class="card-title text-2xl">{&props.greeting}</h2>
                    if let Some(coordinates) = &props.coordinates {
                        <p class="text-sm opacity-80">
                            <i class="fas fa-location-dot mr-2"></i>
                            {coordinates}
                        </p>
                    } else {
                        <p class="text-sm opacity-80">{"Thank you for making a difference."}</p>
                    }
                </div>
                <div class="card-actions">
                    <button class="btn btn-secondary" onclick={go_to(Route::Donate)}>
                        <i class="fas fa-plus"></i>
                        {" Donate Now"}
                    </button>
                    <button class="btn btn-outline btn-secondary" onclick={go_to(Route::History)}>
                        <i class="fas fa-clock-rotate-left"></i>
                        {" View History"}
                    </button>
                </div>
            </div>
        </div>
    }
}
