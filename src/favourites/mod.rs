pub mod storage;
pub mod store;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{add_favourite, remove_favourite, FavouritesStore, FAVOURITES_KEY};
