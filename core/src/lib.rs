pub mod error;
pub mod format;
pub mod input;
pub mod mapper;
pub mod util;
