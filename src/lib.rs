mod consts;
pub mod error;
#[macro_use]
mod macros;
pub mod location;
pub mod query;
mod selector;
mod methods;
pub mod filter;
pub mod fetcher;
mod booker;
mod notify;
pub mod vaxfinder;
