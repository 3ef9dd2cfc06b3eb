pub mod astronomy;
pub mod error;
pub mod forecast;
pub mod panel;
pub mod plot;
