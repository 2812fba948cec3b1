pub mod command_bus;
pub mod loader;

pub use command_bus::CommandBus;
pub use loader::{AssetLoader, LoadState, LoadTicket};
