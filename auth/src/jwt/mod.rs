pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Claims;
pub use codec::TokenCodec;
pub use codec::MIN_SECRET_BYTES;
pub use errors::JwtError;
