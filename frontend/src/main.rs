use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod effects;
mod error;
mod i18n;
mod pages {
    pub mod landing;
    pub mod not_found;
}

use config::LandingConfig;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, config: &Rc<LandingConfig>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing config={config.clone()} /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<LandingConfig>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let render = {
        let config = props.config.clone();
        move |route: Route| switch(route, &config)
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting SnapBoost landing page");
    let config = Rc::new(LandingConfig::default());
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
