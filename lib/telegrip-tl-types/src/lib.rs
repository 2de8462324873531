// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library contains the Rust definitions for the part of Telegram's [`types`] and
//! [`functions`] that the rest of the workspace needs, in the form of `struct` and `enum`.
//!
//! Boxed types (those with more than one constructor) live under [`enums`], bare
//! constructors live under [`types`], and requests live under [`functions`]. Namespaced
//! definitions (such as `messages.chatFull`) are nested in a module of the same name.
//!
//! Encoding and decoding are not part of this crate. The values are handed over to whatever
//! `Gateway` implementation the application provides, which is responsible for the transport.
//!
//! # Features
//!
//! * `impl-from-type`: implements `From<Type> for Enum`.
//! * `impl-from-enum`: implements `From<Enum> for Type` for single-constructor enums.
//!
//! Unknown constructors are represented by an explicit `Unknown` variant on the enums where
//! new constructors are routinely introduced between layers, carrying the constructor
//! identifier that could not be matched.

#![deny(unsafe_code)]

pub mod enums;
pub mod functions;
pub mod types;

use std::fmt;

/// The layer these definitions were taken from.
pub const LAYER: i32 = 181;

/// Structures implementing this trait indicate that they are suitable for
/// use to perform Remote Procedure Calls (RPC), and know what the type of
/// the response will be.
pub trait RemoteCall: Clone + fmt::Debug + Send + Sync + 'static {
    /// The type of the "return" value coming from the other end of the
    /// connection.
    type Return: fmt::Debug + Send + 'static;

    /// Name of the function in Telegram's schema, used for logging.
    const NAME: &'static str;
}
