use yew_router::Routable;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/episodes")]
    Episodes,
    /// Detail view; the episode is chosen by the `id` query parameter.
    #[at("/episode")]
    Episode,
    #[not_found]
    #[at("/404")]
    NotFound,
}
