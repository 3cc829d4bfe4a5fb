pub mod card;
pub mod configuration;
pub mod errors;
pub mod issues;
pub mod server;

pub use card::*;
pub use configuration::*;
pub use errors::*;
pub use issues::*;
pub use server::*;
