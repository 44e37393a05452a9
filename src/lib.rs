pub mod address;
pub mod config;
pub mod error;
pub mod logging;
pub mod marketplace;
pub mod network;
pub mod sale;
pub mod whitelist;

pub use address::Address;
pub use config::{CollectionConfig, Target};
pub use error::ValidationError;
pub use sale::{Price, SaleConfig, SalePhase};
