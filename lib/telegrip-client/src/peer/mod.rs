// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Types relating to users, groups and channels.
//!
//! Properties containing raw types are public and will either be called "raw" or prefixed with "raw_".\
//! Keep in mind that **these fields are not part of the semantic versioning guarantees**.

mod channel;
mod group;
mod participant;
mod peer_map;
mod permissions;
mod user;

pub use channel::Channel;
pub use group::Group;
pub use participant::{ChatMember, ChatMemberStatus, ChatMembersFilter, RawParticipant};
pub use peer_map::PeerMap;
pub use permissions::{ChatPermissions, ChatPrivileges};
pub use user::User;

use telegrip_session::types::{PeerId, PeerRef};
use telegrip_tl_types as tl;

/// A user, group, or broadcast channel.
///
/// * Private conversations with other people are treated as the peer of the user itself.
/// * Conversations in a group, whether it's private or public, are simply known as groups.
/// * Conversations where only administrators broadcast messages are known as channels.
#[derive(Clone, Debug, PartialEq)]
pub enum Peer {
    /// A [`User`].
    User(User),

    /// A [`Group`] chat.
    Group(Group),

    /// A broadcast [`Channel`].
    Channel(Channel),
}

impl Peer {
    pub(crate) fn from_raw(chat: tl::enums::Chat) -> Self {
        use tl::enums::Chat as C;

        let broadcast = match &chat {
            C::Empty(_) | C::Chat(_) | C::Forbidden(_) => false,
            C::Channel(channel) => channel.broadcast,
            C::ChannelForbidden(channel) => channel.broadcast,
        };

        if broadcast {
            Self::Channel(Channel::from_raw(chat))
        } else {
            Self::Group(Group::from_raw(chat))
        }
    }

    /// Return the unique identifier for this peer.
    ///
    /// Every account will see the same identifier for the same peer.
    pub fn id(&self) -> PeerId {
        match self {
            Self::User(user) => user.id(),
            Self::Group(group) => group.id(),
            Self::Channel(channel) => channel.id(),
        }
    }

    /// Convert the peer to its reference, if it is usable in requests.
    pub fn to_ref(&self) -> Option<PeerRef> {
        match self {
            Self::User(user) => user.to_ref(),
            Self::Group(group) => group.to_ref(),
            Self::Channel(channel) => channel.to_ref(),
        }
    }

    /// Return the name of this peer.
    ///
    /// For private conversations (users), this is their first name. For groups and channels,
    /// this is their title.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::User(user) => user.first_name(),
            Self::Group(group) => group.title(),
            Self::Channel(channel) => Some(channel.title()),
        }
    }

    /// Return the public @username of this peer, if any.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::User(user) => user.username(),
            Self::Group(group) => group.username(),
            Self::Channel(channel) => channel.username(),
        }
    }
}
