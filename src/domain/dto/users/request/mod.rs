pub mod user_filter;

pub use user_filter::BaseUserFilter;
