pub mod filter;
pub mod review;
