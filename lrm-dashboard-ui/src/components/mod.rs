//! Reusable Dioxus RSX components for the landslide dashboard.

mod error_display;
mod filter_bar;
mod loading_spinner;
mod map_panel;
mod pagination_controls;
mod record_card;
mod record_list;
mod summary_cards;

pub use error_display::ErrorDisplay;
pub use filter_bar::{choice_options, ClearFiltersButton, FilterBar, FilterSelect};
pub use loading_spinner::LoadingSpinner;
pub use map_panel::{selected_lines, MapPanel, SelectedDetails, MAP_CONTAINER_ID};
pub use pagination_controls::PaginationControls;
pub use record_card::RecordCard;
pub use record_list::RecordList;
pub use summary_cards::SummaryCards;
