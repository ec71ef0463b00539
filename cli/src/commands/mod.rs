pub mod decode;
pub mod decode_error;
pub mod formats;
