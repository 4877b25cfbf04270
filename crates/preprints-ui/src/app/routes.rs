//! Routing definitions for the preprints UI.
use crate::core::routing::RouteName;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Index,
    #[at("/preprints")]
    PreprintsNotFound,
    #[at("/preprints/:provider_id")]
    ProviderModeration { provider_id: String },
    #[at("/preprints/:provider_id/setup")]
    ProviderSetup { provider_id: String },
    #[at("/preprints/:provider_id/settings")]
    ProviderSettings { provider_id: String },
    #[at("/preprints/:provider_id/:preprint_id")]
    PreprintDetail {
        provider_id: String,
        preprint_id: String,
    },
    #[at("/dashboard")]
    Dashboard,
    #[at("/forbidden")]
    Forbidden,
    #[not_found]
    #[at("/page-not-found")]
    PageNotFound,
}

impl Route {
    /// Dotted route name used by the scroll guard.
    pub(crate) const fn name(&self) -> RouteName {
        match self {
            Self::Index => RouteName::Index,
            Self::PreprintsNotFound => RouteName::PreprintsNotFound,
            Self::ProviderModeration { .. } => RouteName::ProviderModeration,
            Self::ProviderSetup { .. } => RouteName::ProviderSetup,
            Self::ProviderSettings { .. } => RouteName::ProviderSettings,
            Self::PreprintDetail { .. } => RouteName::PreprintDetail,
            Self::Dashboard => RouteName::Dashboard,
            Self::Forbidden => RouteName::Forbidden,
            Self::PageNotFound => RouteName::PageNotFound,
        }
    }
}
