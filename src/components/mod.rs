mod industry_card;
mod navbar;
mod path_selector;
mod roadmap;
mod role_detail;
mod salary_insight;
mod search_dialog;
pub mod theme;

pub use industry_card::IndustryCard;
pub use navbar::Navbar;
pub use path_selector::PathSelector;
pub use roadmap::{RoadmapStepper, RoadmapView};
pub use role_detail::RoleDetailPanel;
pub use search_dialog::SearchDialog;
