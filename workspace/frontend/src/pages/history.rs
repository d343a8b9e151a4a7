use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(HistoryPage)]
pub fn history_page() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Donation History"}</h2>
                <p>{"Your past donations will be listed here."}</p>
                <div class="card-actions justify-end">
                    <Link<Route> to={Route::Dashboard} classes="btn btn-ghost">{"Back to dashboard"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
