use super::context::LoadState;
use super::gen_components::{raw_html, use_site_config, ErrorMessage, Loading};
use super::render::home_sections;
use super::routes::Route;
use crate::requests::episode_reqs::{call_load_all_episodes, EpisodeRecord};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_site_config();
    let episodes = use_state(LoadState::<Vec<EpisodeRecord>>::default);

    // Fetch episodes on component mount
    {
        let episodes = episodes.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match call_load_all_episodes(&config).await {
                    Ok(fetched) => episodes.set(LoadState::Loaded(fetched)),
                    Err(e) => {
                        log::error!("Failed to load episodes for home page: {}", e);
                        episodes.set(LoadState::Failed(e.user_message().to_string()));
                    }
                }
            });
            || ()
        });
    }

    let content = match &*episodes {
        LoadState::Loading => html! { <Loading /> },
        LoadState::Failed(message) => html! { <ErrorMessage message={message.clone()} /> },
        LoadState::Loaded(all) => {
            let (latest, grid) = home_sections(all, config.home_latest);
            html! {
                <>
                    <section class="section">
                        <h2 class="section-title">{"Најнова епизода"}</h2>
                        <div id="latest-episode" class="latest-episode">{ raw_html(latest) }</div>
                    </section>
                    if !all.is_empty() {
                        <section class="section">
                            <h2 class="section-title">{"Последни епизоди"}</h2>
                            <div id="latest-episodes" class="episodes-grid">{ raw_html(grid) }</div>
                            <div class="section-footer">
                                <Link<Route> to={Route::Episodes} classes="btn btn-secondary">{"Сите епизоди →"}</Link<Route>>
                            </div>
                        </section>
                    }
                </>
            }
        }
    };

    html! {
        <>
            <section class="hero">
                <div class="container">
                    <h1 class="hero-title">{ &config.site_title }</h1>
                    <p class="hero-subtitle">{"Разговори, приказни и идеи, секоја недела."}</p>
                </div>
            </section>
            <div class="container">
                { content }
            </div>
        </>
    }
}
