//! Search view and its parts.

mod full_text;
mod hit_card;
mod pagination;
mod search_card;
mod search_view;
mod segments;

pub use full_text::FullTextOverlay;
pub use hit_card::HitCard;
pub use pagination::PaginationControl;
pub use search_card::SearchCard;
pub use search_view::SearchView;
pub use segments::Segments;
