pub mod attachment;
pub mod badge;
pub mod chat;
pub mod command;
pub mod composer;
pub mod config;
pub mod currency;
pub mod customer;
pub mod dashboard;
pub mod error;
pub mod order;
pub mod product;
pub mod search;
pub mod seed;
pub mod state;
pub mod toast;

pub use command::{Command, CommandOutcome};
pub use composer::Composer;
pub use config::AdminConfig;
pub use error::{AdminError, Result};
pub use state::AdminState;
