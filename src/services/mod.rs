pub mod darksky;
pub mod http;
pub mod provider;
pub mod weatherbit;
