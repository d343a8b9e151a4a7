use yew::prelude::*;
use yew_router::prelude::*;

mod browser;
mod components;
mod geolocation;
mod pages;
mod ui;
pub mod api_client;
pub mod hooks;
pub mod session;
pub mod settings;

use components::layout::Layout;
use pages::dashboard::DashboardPage;
use pages::donate::DonatePage;
use pages::history::HistoryPage;
use session::SessionContext;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/donate")]
    Donate,
    #[at("/history")]
    History,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Layout title="Dashboard"><DashboardPage /></Layout> }
        }
        Route::Donate => {
            log::trace!("Rendering Donate page");
            html! { <Layout title="Donate"><DonatePage /></Layout> }
        }
        Route::History => {
            log::trace!("Rendering History page");
            html! { <Layout title="History"><HistoryPage /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_memo((), |_| SessionContext::from_storage());

    html! {
        <ContextProvider<SessionContext> context={(*session).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionContext>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Donor Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
