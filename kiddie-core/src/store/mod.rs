mod memory;
mod repository;

pub use memory::{MemoryAccountRepository, seed_accounts};
pub use repository::{AccountRepository, RepositoryError};
