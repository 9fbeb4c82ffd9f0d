use crate::components::filters::{filter_episodes, SeasonFilter};
use crate::components::paging::Pager;
use crate::requests::episode_reqs::EpisodeRecord;
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

/// View state of the episodes listing. Owned by the page component and only
/// changed through [`EpisodesAction`].
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodesView {
    pub status: LoadState<()>,
    pub all: Rc<Vec<EpisodeRecord>>,
    pub filtered: Vec<EpisodeRecord>,
    pub season: SeasonFilter,
    pub query: String,
    pub pager: Pager,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EpisodesAction {
    Loaded(Vec<EpisodeRecord>),
    LoadFailed(String),
    SetQuery(String),
    SelectSeason(String),
    PreviousPage,
    NextPage,
    GoToPage(usize),
}

impl EpisodesView {
    pub fn new(page_size: usize) -> Self {
        Self {
            status: LoadState::Loading,
            all: Rc::new(Vec::new()),
            filtered: Vec::new(),
            season: SeasonFilter::All,
            query: String::new(),
            pager: Pager::new(page_size),
        }
    }

    pub fn total(&self) -> usize {
        self.filtered.len()
    }

    pub fn visible(&self) -> &[EpisodeRecord] {
        self.pager.page_slice(&self.filtered)
    }

    fn refiltered(self) -> Self {
        let filtered = filter_episodes(&self.all, self.season, &self.query);
        let pager = self.pager.reset().clamped(filtered.len());
        Self {
            filtered,
            pager,
            ..self
        }
    }

    pub fn apply(&self, action: EpisodesAction) -> Self {
        let state = self.clone();
        let total = state.total();

        match action {
            EpisodesAction::Loaded(episodes) => Self {
                status: LoadState::Loaded(()),
                all: Rc::new(episodes),
                ..state
            }
            .refiltered(),
            EpisodesAction::LoadFailed(message) => Self {
                status: LoadState::Failed(message),
                all: Rc::new(Vec::new()),
                filtered: Vec::new(),
                pager: state.pager.reset(),
                ..state
            },
            EpisodesAction::SetQuery(query) => Self { query, ..state }.refiltered(),
            EpisodesAction::SelectSeason(raw) => match raw.parse::<SeasonFilter>() {
                Ok(season) => Self { season, ..state }.refiltered(),
                Err(e) => {
                    log::warn!("Ignoring season selection: {}", e);
                    state
                }
            },
            EpisodesAction::PreviousPage => Self {
                pager: state.pager.previous(total),
                ..state
            },
            EpisodesAction::NextPage => Self {
                pager: state.pager.next(total),
                ..state
            },
            EpisodesAction::GoToPage(page) => Self {
                pager: state.pager.go_to(page, total),
                ..state
            },
        }
    }
}

impl Reducible for EpisodesView {
    type Action = EpisodesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
