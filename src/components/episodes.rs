use super::context::{EpisodesAction, EpisodesView, LoadState};
use super::filters::{available_seasons, SeasonFilter};
use super::gen_components::{raw_html, use_site_config, ErrorMessage, Loading};
use super::paging::{page_strip, PageItem};
use super::render::episode_grid;
use crate::requests::episode_reqs::call_load_all_episodes;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct SeasonTabsProps {
    seasons: Vec<u32>,
    selected: SeasonFilter,
    on_select: Callback<String>,
}

#[function_component(SeasonTabs)]
fn season_tabs(props: &SeasonTabsProps) -> Html {
    let tab = |filter: SeasonFilter, label: String| {
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(filter.to_string()));
        let class = if props.selected == filter {
            classes!("filter-tab", "active")
        } else {
            classes!("filter-tab")
        };
        html! {
            <button {class} data-season={filter.to_string()} {onclick}>{ label }</button>
        }
    };

    html! {
        <div class="filter-tabs">
            { tab(SeasonFilter::All, "Сите".to_string()) }
            { for props.seasons.iter().map(|&season| tab(SeasonFilter::Season(season), format!("Сезона {}", season))) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PaginationProps {
    current: usize,
    total_pages: usize,
    window: usize,
    has_previous: bool,
    has_next: bool,
    dispatch: Callback<EpisodesAction>,
}

#[function_component(Pagination)]
fn pagination(props: &PaginationProps) -> Html {
    let on_previous = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(EpisodesAction::PreviousPage))
    };
    let on_next = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(EpisodesAction::NextPage))
    };

    let items = page_strip(props.current, props.total_pages, props.window)
        .into_iter()
        .map(|item| match item {
            PageItem::Gap => html! { <span class="page-gap">{"…"}</span> },
            PageItem::Page(page) => {
                let dispatch = props.dispatch.clone();
                let onclick = Callback::from(move |_: MouseEvent| dispatch.emit(EpisodesAction::GoToPage(page)));
                let class = if page == props.current {
                    classes!("page-btn", "active")
                } else {
                    classes!("page-btn")
                };
                html! { <button {class} {onclick}>{ page }</button> }
            }
        })
        .collect::<Html>();

    html! {
        <nav class="pagination">
            <button class="page-btn" disabled={!props.has_previous} onclick={on_previous}>{"← Претходна"}</button>
            { items }
            <button class="page-btn" disabled={!props.has_next} onclick={on_next}>{"Следна →"}</button>
        </nav>
    }
}

#[function_component(Episodes)]
pub fn episodes() -> Html {
    let config = use_site_config();
    let view = use_reducer(|| EpisodesView::new(config.page_size));

    {
        let view = view.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match call_load_all_episodes(&config).await {
                    Ok(fetched) => view.dispatch(EpisodesAction::Loaded(fetched)),
                    Err(e) => {
                        log::error!("Failed to load episodes list: {}", e);
                        view.dispatch(EpisodesAction::LoadFailed(e.user_message().to_string()));
                    }
                }
            });
            || ()
        });
    }

    let dispatch = {
        let view = view.clone();
        Callback::from(move |action: EpisodesAction| view.dispatch(action))
    };

    let on_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                dispatch.emit(EpisodesAction::SetQuery(input.value()));
            }
        })
    };

    let on_season = {
        let dispatch = dispatch.clone();
        Callback::from(move |season: String| dispatch.emit(EpisodesAction::SelectSeason(season)))
    };

    let total = view.total();
    let body = match &view.status {
        LoadState::Loading => html! { <Loading /> },
        LoadState::Failed(message) => html! { <ErrorMessage message={message.clone()} /> },
        LoadState::Loaded(()) => html! {
            <>
                <p class="results-count">{ format!("{} епизоди", total) }</p>
                <div id="episodes-list" class="episodes-grid">{ raw_html(episode_grid(view.visible())) }</div>
                if view.pager.is_needed(total) {
                    <Pagination
                        current={view.pager.current_page}
                        total_pages={view.pager.total_pages(total)}
                        window={config.page_window}
                        has_previous={view.pager.has_previous()}
                        has_next={view.pager.has_next(total)}
                        dispatch={dispatch.clone()}
                    />
                }
            </>
        },
    };

    html! {
        <div class="container">
            <section class="section">
                <h1 class="page-title">{"Сите епизоди"}</h1>
                <div class="episodes-controls">
                    <input
                        id="search-input"
                        type="search"
                        class="search-input"
                        placeholder="Пребарај епизоди..."
                        value={view.query.clone()}
                        oninput={on_search}
                    />
                    <SeasonTabs
                        seasons={available_seasons(&view.all)}
                        selected={view.season}
                        on_select={on_season}
                    />
                </div>
                { body }
            </section>
        </div>
    }
}
