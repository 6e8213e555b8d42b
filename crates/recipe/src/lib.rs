pub mod action;
mod command;
mod favorite;
pub mod history;
pub mod preferences;
pub mod query;
pub mod recommendation;
pub mod store;

pub use action::{Action, Outcome};
pub use command::apply_patch;
pub use cookbook_shared::recipe::*;
pub use history::{DEFAULT_HISTORY_CAPACITY, ViewedHistory};
pub use preferences::PreferenceProfile;
pub use query::{
    ActiveFilter, FilterPatch, Filters, QuerySummary, RecipesQuery, SortBy, filter,
};
pub use recommendation::{
    ProximityBonus, Recommendation, RecommendationConfig, RecommendationReason, Scorer, recommend,
};
pub use store::{RecipeStore, Snapshot, StoreConfig};
