// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The boundary between the high-level client and whatever owns the connection to Telegram.
//!
//! The [`Gateway`] is responsible for everything below the request level: encryption,
//! framing, acknowledgements, authorization keys, reconnection and flood waits. The client
//! only builds requests, hands them to [`Gateway::invoke`], and interprets the answer.
//!
//! Failures coming out of the gateway are reported as [`InvocationError`] and are never
//! retried by the client.

#![deny(unsafe_code)]

mod errors;

use std::future::Future;

pub use errors::{InvocationError, ReadError, RpcError};
use telegrip_session::types::{PeerIdentifier, PeerRef};
use telegrip_tl_types::RemoteCall;

/// Executes requests against Telegram on behalf of a client.
///
/// Implementations must be safe to share between tasks. Each call is independent;
/// the client never issues more than one overlapping call for a single operation.
pub trait Gateway: Send + Sync + 'static {
    /// Invoke a raw API call and wait for its response.
    fn invoke<R: RemoteCall>(
        &self,
        request: &R,
    ) -> impl Future<Output = Result<R::Return, InvocationError>> + Send;

    /// Resolve what a caller typed into a usable reference.
    ///
    /// Implementations should return [`InvocationError::Unresolved`] when nothing matches.
    fn resolve_peer(
        &self,
        peer: &PeerIdentifier,
    ) -> impl Future<Output = Result<PeerRef, InvocationError>> + Send;
}
