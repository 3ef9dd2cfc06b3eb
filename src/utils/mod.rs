pub mod cancel;
pub mod debounce;
pub mod number;
pub mod time;
