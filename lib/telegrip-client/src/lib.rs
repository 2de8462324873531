// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Brief on this library
//!
//! This library is the friendly layer of a Telegram client. It builds requests for a handful
//! of common operations, hands them over to a [`Gateway`], and turns the raw responses into
//! types that are pleasant to work with:
//!
//! * [`Client::forward_messages`] and [`Client::forward_message`] forward messages between
//!   chats and return the copies that were created.
//! * [`Client::get_chat_photos`] pages through the profile photo history of a user, group
//!   or channel.
//! * [`Client::iter_chat_members`] and [`Client::get_chat_member`] list the members of a group
//!   or channel as [`peer::ChatMember`].
//!
//! Everything below the request level (encryption, connections, authorization keys, flood
//! waits and retries) belongs to the [`Gateway`] implementation. Errors it reports are
//! propagated to the caller as they are.
//!
//! # Re-exports
//!
//! ## telegrip-gateway as gateway
//!
//! The [`InvocationError`] is re-exported at the top level, as all methods that interact with
//! the API eventually need to invoke the request and may thus fail. You may also use the
//! [`Result`] alias, which has the `InvocationError` set as its error variant.
//!
//! ## telegrip-session as session
//!
//! Peers are identified with the types in [`session::types`]. Most methods accept anything
//! that converts into a [`session::types::PeerIdentifier`], such as `"me"`, `"@username"`
//! or a Bot API dialog identifier.
//!
//! ## telegrip-tl-types as tl
//!
//! The raw types are re-exported under [`tl`]. When the friendly API falls short, you may
//! [`Client::invoke`] any of the [`tl::functions`] directly.

#![deny(unsafe_code)]

pub mod client;
pub mod media;
pub mod message;
pub mod peer;
pub(crate) mod utils;

pub use client::{
    ChatMemberIter, Client, ClientConfiguration, ForwardOptions, IterBuffer, ProfilePhotoIter,
};
pub use telegrip_gateway::{self as gateway, Gateway, InvocationError, ReadError, RpcError};
pub use telegrip_session as session;
pub use telegrip_tl_types as tl;

/// Alias for [`std::result::Result`] with the error set to [`InvocationError`].
pub type Result<T> = std::result::Result<T, InvocationError>;
