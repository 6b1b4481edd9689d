pub mod encode;
pub mod error;

pub use encode::{
    count_spaces, encoded_len, padded_buffer, urlify, urlify_in_place, urlify_unpadded,
};
pub use error::{Result, UrlifyError};
