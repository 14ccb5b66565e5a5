// Stores layer - Data access and repository pattern
pub mod ator_store;
pub mod lookup_store;
pub mod user_store;

pub use ator_store::AtorStore;
pub use lookup_store::LookupStore;
pub use user_store::{AdminSeedOutcome, UserStore};
