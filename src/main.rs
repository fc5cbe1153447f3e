use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod gesture;
mod navigator;
mod components {
    pub mod footer;
    pub mod icons;
    pub mod projects;
    pub mod seo;
    pub mod slider;
}
mod pages {
    pub mod home;
}

use content::SiteContent;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, site: Rc<SiteContent>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home site={site} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the front page"}</Link<Route>>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub site: Rc<SiteContent>,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    let site = props.site.clone();
    html! {
        <BrowserRouter>
            <main>
                <Switch<Route> render={move |routes: Route| switch(routes, site.clone())} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let site = content::load().expect("error loading site content");
    info!(
        "Starting application with {} projects and {} SEO slides",
        site.projects.len(),
        site.seo.slides.len()
    );
    yew::Renderer::<App>::with_props(AppProps {
        site: Rc::new(site),
    })
    .render();
}
