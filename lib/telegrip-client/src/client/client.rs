// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::sync::Arc;

pub(crate) struct ClientInner<G> {
    pub(crate) gateway: G,
    pub(crate) configuration: ClientConfiguration,
}

/// Wrapper around a [`Gateway`] to facilitate interaction with Telegram's API.
///
/// This structure is the "entry point" of the library, from which you can start using the rest.
///
/// Cloning the client is cheap, and every clone shares the same gateway. The client itself
/// holds no mutable state, so clones may be used concurrently from different tasks.
///
/// [`Gateway`]: telegrip_gateway::Gateway
pub struct Client<G>(pub(crate) Arc<ClientInner<G>>);

/// Configuration that controls the [`Client`] behaviour when making requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfiguration {
    /// How many photos to ask for at most in a single `photos.getUserPhotos` request.
    pub max_photo_limit: usize,

    /// How many members to ask for at most in a single `channels.getParticipants` request.
    pub max_participant_limit: usize,
}

impl Default for ClientConfiguration {
    /// Returns an instance with the largest page sizes Telegram accepts for each request.
    fn default() -> Self {
        Self {
            max_photo_limit: 100,
            max_participant_limit: 200,
        }
    }
}

impl<G> Clone for Client<G> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<G> fmt::Debug for Client<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("configuration", &self.0.configuration)
            .finish_non_exhaustive()
    }
}
