mod model;
pub mod repository;

pub use model::WishlistItem;
pub use repository::SettingsStore;
