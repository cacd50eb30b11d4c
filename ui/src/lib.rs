use payloads::{APIClient, PropertyId};
use yew::prelude::*;
use yew_router::prelude::*;

mod browser_image;
mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod state;
mod utils;

pub use state::State;

use components::layout::MainLayout;
use contexts::ToastProvider;
use pages::{HomePage, NotFoundPage, PropertyDetailPage, UploadPropertyPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| {
            // Fallback to the origin the page was served from
            web_sys::window().and_then(|w| w.location().origin().ok())
        })
        .unwrap_or_default();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/upload")]
    Upload,
    #[at("/properties/:id")]
    PropertyDetail { id: PropertyId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());

    html! {
        <ToastProvider>
            <BrowserRouter>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
            </BrowserRouter>
        </ToastProvider>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Upload => html! { <UploadPropertyPage /> },
        Route::PropertyDetail { id } => html! {
            <PropertyDetailPage {id} />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
