use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(DonatePage)]
pub fn donate_page() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"New Donation"}</h2>
                <p>{"Donation forms are handled by the donation service."}</p>
                <div class="card-actions justify-end">
                    <Link<Route> to={Route::Dashboard} classes="btn btn-ghost">{"Back to dashboard"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
