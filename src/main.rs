mod components;
mod config;
mod error;
mod logging;
mod requests;

#[cfg(test)]
mod tests;

use components::episode::Episode;
use components::episodes::Episodes;
use components::gen_components::{Footer, Header};
use components::home::Home;
use components::routes::Route;
use config::SiteConfig;
use std::rc::Rc;

// Yew Imports
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container">
            <div class="not-found">
                <span class="not-found-code">{"404"}</span>
                <h1>{"Страницата не постои"}</h1>
                <Link<Route> to={Route::Home} classes="btn">{"Назад на почетна"}</Link<Route>>
            </div>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Episodes => html! { <Episodes /> },
        Route::Episode => html! { <Episode /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[derive(Properties, PartialEq)]
struct MainProps {
    config: Rc<SiteConfig>,
}

#[function_component(Main)]
fn main_component(props: &MainProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <BrowserRouter>
                <Header />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    let config = match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&format!("{}; falling back to defaults", e).into());
            SiteConfig::default()
        }
    };
    logging::init(config.level_filter());
    log::info!("Starting {} with seasons {:?}", config.site_title, config.seasons);

    yew::Renderer::<Main>::with_props(MainProps {
        config: Rc::new(config),
    })
    .render();
}
