//! API response normalization
//!
//! Turns backend JSON (snake_case keys, optional envelopes, paginated lists)
//! into camelCase view models. No requests are made here.

pub mod case;
pub mod envelope;

pub use case::{camelize_keys, snake_to_camel};
pub use envelope::{decode, decode_list, normalize, unwrap_payload, ApiEnvelope, Page};
