//! Response decoding.

use serde::de::DeserializeOwned;

use crate::Error;

/// Decode a response payload into `T`.
pub fn decode<T: DeserializeOwned>(payload: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(payload).map_err(Error::Decode)
}

/// Decode a response that is either a `T` or a boolean.
///
/// A `T` yields `(Some(t), true)`. Otherwise the payload must be a boolean
/// `b`, which yields `(None, b)`. When neither decodes, the boolean decoding
/// failure is returned.
pub fn decode_dual<T: DeserializeOwned>(payload: &[u8]) -> Result<(Option<T>, bool), Error> {
    match serde_json::from_slice::<T>(payload) {
        Ok(value) => Ok((Some(value), true)),
        Err(_) => {
            let flag: bool = serde_json::from_slice(payload).map_err(Error::Decode)?;
            Ok((None, flag))
        }
    }
}
