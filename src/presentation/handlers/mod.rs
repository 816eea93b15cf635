mod ask;
mod ask_long;
mod error_mapping;
mod health;
mod test_content;
mod upload;

pub use ask::ask_handler;
pub use ask_long::ask_long_handler;
pub use health::health_handler;
pub use test_content::test_content_handler;
pub use upload::upload_handler;
