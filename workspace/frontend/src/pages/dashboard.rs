use yew::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::session::SessionContext;

/// Hands the session from context to the dashboard as an explicit prop.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_context::<SessionContext>()
        .and_then(|ctx| ctx.session);

    html! { <Dashboard {session} /> }
}
