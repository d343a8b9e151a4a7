use yew::prelude::*;

use crate::browser;

/// Shown while the browser permission prompt is pending.
#[function_component(LocationPrompt)]
pub fn location_prompt() -> Html {
    let on_allow = Callback::from(|_: MouseEvent| {
        log::info!("User asked to allow location, reloading page");
        browser::reload_page();
    });

    html! {
        <div class="alert alert-info shadow mb-4">
            <i class="fas fa-location-crosshairs"></i>
            <div class="flex flex-col">
                <span class="font-semibold">{"Share your location"}</span>
                <span class="text-sm">{"We use it to point you to nearby drop-off centers."}</span>
            </div>
            <button class="btn btn-sm btn-primary" onclick={on_allow}>{"Allow Location"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

#[function_component(LocationErrorBanner)]
pub fn location_error_banner(props: &BannerProps) -> Html {
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="alert alert-warning shadow mb-4">
            <i class="fas fa-location-pin-lock"></i>
            <span>{&props.message}</span>
            <button class="btn btn-sm btn-ghost btn-circle" aria-label="dismiss" onclick={on_close}>
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
