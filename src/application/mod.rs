//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod delete_entry;
pub mod init;
pub mod search_entries;
pub mod update_entry;
pub mod view_entries;
pub mod visualize;

pub use add_entry::add_entry;
pub use delete_entry::delete_entry;
pub use init::init;
pub use search_entries::search_entries;
pub use update_entry::update_entry;
pub use view_entries::view_entries;
pub use visualize::visualize;
