// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library contains the peer identity model shared by the rest of the
//! telegrip crates:
//! - [`types::PeerId`], a compact identity that also encodes the peer's kind.
//! - [`types::PeerAuth`], the authority (access hash) needed to use a peer in requests.
//! - [`types::PeerRef`], both of the above bundled together, convertible into the
//!   input peers used by Telegram's functions.
//! - [`types::PeerIdentifier`], what callers type before a peer is resolved.
//!
//! Persisting authorization keys or caching peers is left to the gateway
//! implementation, which owns the connection to Telegram.

#![deny(unsafe_code)]

mod identifier;
mod peer;

pub mod types {
    //! Peer identity types.
    pub use crate::identifier::PeerIdentifier;
    pub use crate::peer::{PeerAuth, PeerId, PeerKind, PeerRef};
}
