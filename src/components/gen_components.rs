use crate::components::routes::Route;
use crate::config::SiteConfig;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Mounts markup produced by the `render` module. Callers must only pass
/// strings whose record fields were escaped.
pub fn raw_html(markup: String) -> Html {
    Html::from_html_unchecked(AttrValue::from(markup))
}

#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

#[function_component(Header)]
pub fn header() -> Html {
    let config = use_site_config();
    let route = use_route::<Route>();

    let nav_class = |target: Route| {
        if route.as_ref() == Some(&target) {
            classes!("nav-link", "active")
        } else {
            classes!("nav-link")
        }
    };

    html! {
        <header class="site-header">
            <div class="container header-inner">
                <Link<Route> to={Route::Home} classes="logo">{ &config.site_title }</Link<Route>>
                <nav class="site-nav">
                    <Link<Route> to={Route::Home} classes={nav_class(Route::Home)}>{"Почетна"}</Link<Route>>
                    <Link<Route> to={Route::Episodes} classes={nav_class(Route::Episodes)}>{"Епизоди"}</Link<Route>>
                </nav>
            </div>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_site_config();
    let year = chrono::Utc::now().format("%Y").to_string();

    html! {
        <footer class="site-footer">
            <div class="container">
                <p>{ format!("© {} {}", year, config.site_title) }</p>
            </div>
        </footer>
    }
}

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <p class="loading">{"Се вчитува..."}</p>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: AttrValue,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    html! {
        <div class="error-message">
            <p>{ &props.message }</p>
            <Link<Route> to={Route::Episodes} classes="btn">{"Назад кон епизодите"}</Link<Route>>
        </div>
    }
}
