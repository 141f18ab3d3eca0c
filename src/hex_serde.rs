//! Hex-string `serde` encoding for the curve-bearing containers, gated
//! behind the `serde` feature.
//!
//! Mirrors the teacher crate's `crypto_serde::curve` convention of encoding
//! a canonically-serializable value as hex over its compressed
//! `CanonicalSerialize` form; the deserialize half is written fresh here
//! since the teacher's own `deserialize_curve_hex` counterpart is not
//! present in its source tree. Intended for use via `#[serde(with =
//! "crate::hex_serde")]` on fields whose type implements
//! [`CanonicalSerialize`]/[`CanonicalDeserialize`].

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::{de, ser, Deserialize, Deserializer, Serializer};

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: CanonicalSerialize,
    S: Serializer,
{
    let mut buf = Vec::new();
    value
        .serialize_compressed(&mut buf)
        .map_err(ser::Error::custom)?;
    serializer.serialize_str(&hex::encode(buf))
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: CanonicalDeserialize,
    D: Deserializer<'de>,
{
    let encoded = String::deserialize(deserializer)?;
    let buf = hex::decode(&encoded).map_err(de::Error::custom)?;
    T::deserialize_compressed(&buf[..]).map_err(de::Error::custom)
}
