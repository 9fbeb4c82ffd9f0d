pub(crate) mod context;
pub(crate) mod episode;
pub(crate) mod episodes;
pub mod filters;
pub(crate) mod gen_components;
pub mod gen_funcs;
pub(crate) mod home;
pub mod paging;
pub mod render;
pub(crate) mod routes;
