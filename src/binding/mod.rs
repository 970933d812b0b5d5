pub mod binding;
pub mod config;

pub use binding::Binding;
pub use config::Config;
