//! JSON adapters for boards, patches and members.
//!
//! The `*_from_json` functions are lenient: a malformed stream decodes to
//! `None` or an empty `Vec` and the parse error is only logged. Callers that
//! need the error use [`try_from_json`]. Only the first JSON value in the
//! stream is read; anything after it is ignored.

use board_core::{BoardError, BoardResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;

use crate::{Board, BoardMember, BoardPatch};

/// Treats an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes the first JSON value in the stream.
pub fn try_from_json<T: DeserializeOwned, R: Read>(reader: R) -> BoardResult<T> {
    match serde_json::Deserializer::from_reader(reader).into_iter::<T>().next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(BoardError::Serialization(e.to_string())),
        None => Err(BoardError::Serialization("no JSON value in input".to_string())),
    }
}

fn lenient<T: DeserializeOwned + Default, R: Read>(reader: R, what: &str) -> T {
    try_from_json(reader).unwrap_or_else(|e| {
        tracing::debug!("Discarding malformed {}: {}", what, e);
        T::default()
    })
}

pub fn board_from_json<R: Read>(reader: R) -> Option<Board> {
    lenient(reader, "board")
}

/// `null` entries in the array are skipped.
pub fn boards_from_json<R: Read>(reader: R) -> Vec<Board> {
    lenient::<Option<Vec<Option<Board>>>, _>(reader, "board list")
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .collect()
}

pub fn board_member_from_json<R: Read>(reader: R) -> Option<BoardMember> {
    lenient(reader, "board member")
}

/// `null` entries in the array are skipped.
pub fn board_members_from_json<R: Read>(reader: R) -> Vec<BoardMember> {
    lenient::<Option<Vec<Option<BoardMember>>>, _>(reader, "board member list")
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .collect()
}

pub fn board_patch_from_json<R: Read>(reader: R) -> Option<BoardPatch> {
    lenient(reader, "board patch")
}

pub fn to_json<T: Serialize>(value: &T) -> BoardResult<String> {
    serde_json::to_string(value).map_err(|e| BoardError::Serialization(e.to_string()))
}

pub fn to_json_pretty<T: Serialize>(value: &T) -> BoardResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| BoardError::Serialization(e.to_string()))
}
