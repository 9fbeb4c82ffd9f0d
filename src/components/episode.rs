use super::context::LoadState;
use super::gen_components::{raw_html, use_site_config, ErrorMessage, Loading};
use super::gen_funcs::episode_id_from_query;
use super::render::{episode_detail, page_title};
use crate::error::SiteError;
use crate::requests::episode_reqs::{call_get_episode_by_id, EpisodeRecord};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Episode)]
pub fn episode() -> Html {
    let config = use_site_config();
    let location = use_location();
    let episode_id = location
        .as_ref()
        .and_then(|loc| episode_id_from_query(loc.query_str()));
    let episode = use_state(LoadState::<EpisodeRecord>::default);

    {
        let episode = episode.clone();
        let config = config.clone();
        use_effect_with(episode_id, move |episode_id| {
            match episode_id.clone() {
                None => {
                    log::warn!("Episode page opened without an id");
                    episode.set(LoadState::Failed(SiteError::MissingId.user_message().to_string()));
                }
                Some(id) => {
                    episode.set(LoadState::Loading);
                    wasm_bindgen_futures::spawn_local(async move {
                        match call_get_episode_by_id(&config, &id).await {
                            Ok(found) => {
                                gloo_utils::document().set_title(&page_title(&found, &config.site_title));
                                episode.set(LoadState::Loaded(found));
                            }
                            Err(e) => {
                                log::error!("Failed to show episode {}: {}", id, e);
                                episode.set(LoadState::Failed(e.user_message().to_string()));
                            }
                        }
                    });
                }
            }
            || ()
        });
    }

    let content = match &*episode {
        LoadState::Loading => html! { <Loading /> },
        LoadState::Failed(message) => html! {
            <div id="episode-error">
                <ErrorMessage message={message.clone()} />
            </div>
        },
        LoadState::Loaded(found) => html! {
            <article id="episode-detail" class="episode-detail">{ raw_html(episode_detail(found)) }</article>
        },
    };

    html! {
        <div class="container">
            { content }
        </div>
    }
}
