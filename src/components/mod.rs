pub mod review_card;
pub mod review_display;
pub mod review_filter;
