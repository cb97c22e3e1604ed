pub mod health;
pub mod example;
pub mod get;
pub mod create;
pub mod update;
pub mod delete;
pub mod list;

pub use health::health_handler;
pub use example::example_handler;
pub use get::get_handler;
pub use create::create_handler;
pub use update::update_handler;
pub use delete::delete_handler;
pub use list::list_handler;
