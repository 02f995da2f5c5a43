pub mod directory;
pub mod models;
pub mod parsers;
pub mod utr_client;

pub use directory::RatingsDirectory;
pub use utr_client::UtrClient;
