// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashMap;

use telegrip_gateway::ReadError;
use telegrip_session::types::PeerId;
use telegrip_tl_types as tl;

use super::{Peer, User};

/// Helper structure to efficiently retrieve the users and chats a response refers to.
///
/// A lot of responses include the peers related to them in the form of a list of users
/// and a list of chats, making it annoying to extract a specific one. This structure lets you
/// save those separate vectors in a single place and query them.
///
/// Users are looked up by their bare identifier. Groups and channels are looked up by their
/// [`PeerId`], since a small group and a channel may share the same bare identifier.
///
/// Lookups hand out copies, so the same map can be used to build any number of values.
/// A miss means Telegram broke its promise of including every referenced peer, and is
/// reported as a [`ReadError`].
#[derive(Clone, Debug, Default)]
pub struct PeerMap {
    users: HashMap<i64, User>,
    chats: HashMap<PeerId, Peer>,
}

impl PeerMap {
    /// Create a new peer map from the side-loaded users and chats of a response.
    pub fn new<U, C>(users: U, chats: C) -> Self
    where
        U: IntoIterator<Item = tl::enums::User>,
        C: IntoIterator<Item = tl::enums::Chat>,
    {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.id(), User::from_raw(user)))
                .collect(),
            chats: chats
                .into_iter()
                .map(|chat| {
                    let chat = Peer::from_raw(chat);
                    (chat.id(), chat)
                })
                .collect(),
        }
    }

    /// Create a new empty peer map.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Retrieve the user with the given bare identifier, if present.
    pub fn get_user(&self, user_id: i64) -> Option<&User> {
        self.users.get(&user_id)
    }

    /// Retrieve the group or channel with the given identifier, if present.
    pub fn get_chat(&self, chat_id: PeerId) -> Option<&Peer> {
        self.chats.get(&chat_id)
    }

    /// Copy of the user with the given bare identifier.
    pub fn user(&self, user_id: i64) -> Result<User, ReadError> {
        self.get_user(user_id)
            .cloned()
            .ok_or(ReadError::MissingUser(user_id))
    }

    /// Copy of the group or channel with the given identifier.
    pub fn chat(&self, chat_id: PeerId) -> Result<Peer, ReadError> {
        self.get_chat(chat_id)
            .cloned()
            .ok_or(ReadError::MissingChat(chat_id.bare_id()))
    }

    /// Copy of whichever user, group or channel the raw peer points to.
    pub fn peer(&self, peer: &tl::enums::Peer) -> Result<Peer, ReadError> {
        match peer {
            tl::enums::Peer::User(user) => self.user(user.user_id).map(Peer::User),
            tl::enums::Peer::Chat(chat) => self.chat(PeerId::chat(chat.chat_id)),
            tl::enums::Peer::Channel(channel) => self.chat(PeerId::channel(channel.channel_id)),
        }
    }
}
