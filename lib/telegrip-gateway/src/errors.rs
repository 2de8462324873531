// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use telegrip_session::types::PeerIdentifier;
use telegrip_tl_types as tl;

/// The response was received, but it does not hold up the guarantees Telegram makes about it.
#[derive(Clone, Debug, PartialEq)]
pub enum ReadError {
    /// A user referenced by the response was not included among its side-loaded users.
    MissingUser(i64),

    /// A chat or channel referenced by the response was not included among its side-loaded chats.
    MissingChat(i64),

    /// The response used a constructor that makes no sense for the request.
    UnexpectedResponse(&'static str),
}

impl std::error::Error for ReadError {}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUser(id) => write!(f, "read error, user {id} missing from response"),
            Self::MissingChat(id) => write!(f, "read error, chat {id} missing from response"),
            Self::UnexpectedResponse(what) => write!(f, "read error, unexpected response: {what}"),
        }
    }
}

/// An error Telegram answered a request with.
///
/// Names such as `FLOOD_WAIT_31` carry a number inline. It is split off into [`Self::value`],
/// leaving `FLOOD_WAIT` as the name, so errors can be matched regardless of the number.
#[derive(Clone, Debug, PartialEq)]
pub struct RpcError {
    /// Status code, following the HTTP conventions (400, 403, 420, 500...).
    pub code: i32,

    /// Error name in screaming snake case, without its numeric segment.
    pub name: String,

    /// The numeric segment of the original name, if there was one.
    pub value: Option<u32>,
}

impl std::error::Error for RpcError {}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "rpc error {}: {} ({value})", self.code, self.name),
            None => write!(f, "rpc error {}: {}", self.code, self.name),
        }
    }
}

impl From<tl::types::RpcError> for RpcError {
    fn from(error: tl::types::RpcError) -> Self {
        let mut value = None;
        let mut name = Vec::new();
        for segment in error.error_message.split('_') {
            let numeric = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
            match segment.parse::<u32>() {
                Ok(n) if numeric && value.is_none() => value = Some(n),
                _ => name.push(segment),
            }
        }

        Self {
            code: error.error_code,
            name: name.join("_"),
            value,
        }
    }
}

impl RpcError {
    /// Check the error name against `pattern` (case-sensitive).
    ///
    /// A trailing `*` matches any name starting with the rest of the pattern, and a leading
    /// `*` any name ending with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use telegrip_gateway::RpcError;
    ///
    /// let error = RpcError { code: 400, name: "CHANNEL_PRIVATE".into(), value: None };
    ///
    /// assert!(error.is("CHANNEL_*"));
    /// assert!(error.is("*_PRIVATE"));
    /// assert!(!error.is("CHAT_ADMIN_REQUIRED"));
    /// ```
    pub fn is(&self, pattern: &str) -> bool {
        match (pattern.strip_suffix('*'), pattern.strip_prefix('*')) {
            (Some(prefix), _) => self.name.starts_with(prefix),
            (None, Some(suffix)) => self.name.ends_with(suffix),
            (None, None) => self.name == pattern,
        }
    }
}

/// This error occurs when a Remote Procedure call was unsuccessful.
#[derive(Debug)]
pub enum InvocationError {
    /// The request invocation failed because it was invalid or the server
    /// could not process it successfully.
    Rpc(RpcError),

    /// The request was cancelled or dropped, and the results won't arrive.
    Dropped,

    /// The identifier given by the caller does not point to any known peer.
    Unresolved(PeerIdentifier),

    /// The error occured while reading the response.
    Read(ReadError),
}

impl std::error::Error for InvocationError {}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rpc(err) => write!(f, "request error: {err}"),
            Self::Dropped => write!(f, "request error: dropped (cancelled)"),
            Self::Unresolved(peer) => write!(f, "request error: could not resolve {peer}"),
            Self::Read(err) => write!(f, "request error: {err}"),
        }
    }
}

impl From<RpcError> for InvocationError {
    fn from(error: RpcError) -> Self {
        Self::Rpc(error)
    }
}

impl From<ReadError> for InvocationError {
    fn from(error: ReadError) -> Self {
        Self::Read(error)
    }
}

impl InvocationError {
    /// Like [`RpcError::is`], and `false` for anything that is not an [`RpcError`].
    pub fn is(&self, pattern: &str) -> bool {
        match self {
            Self::Rpc(rpc) => rpc.is(pattern),
            _ => false,
        }
    }
}
