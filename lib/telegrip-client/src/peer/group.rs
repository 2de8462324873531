// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use telegrip_session::types::{PeerId, PeerRef};
use telegrip_tl_types as tl;

/// A group chat.
///
/// Telegram's API internally distinguishes between "small group chats" and "megagroups", also
/// known as "supergroups" in the UI of Telegram applications. Both are represented by this type.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub raw: tl::enums::Chat,
}

impl Group {
    /// Wrap a raw chat. Broadcast channels belong in [`super::Channel`] instead.
    pub(crate) fn from_raw(chat: tl::enums::Chat) -> Self {
        Self { raw: chat }
    }

    /// Return the unique identifier for this group.
    ///
    /// Note that if this group is migrated to a megagroup, both this group and the new one will
    /// exist as separate chats, with different identifiers.
    pub fn id(&self) -> PeerId {
        use tl::enums::Chat;

        match &self.raw {
            Chat::Empty(_) | Chat::Chat(_) | Chat::Forbidden(_) => PeerId::chat(self.raw.id()),
            Chat::Channel(_) | Chat::ChannelForbidden(_) => PeerId::channel(self.raw.id()),
        }
    }

    /// Convert the group to its reference.
    ///
    /// Small group chats need no authorization. Megagroups are only usable if Telegram sent
    /// their access hash.
    pub fn to_ref(&self) -> Option<PeerRef> {
        match &self.raw {
            tl::enums::Chat::Channel(channel) if channel.min || channel.access_hash.is_none() => {
                None
            }
            chat => Some(PeerRef::from(chat)),
        }
    }

    /// Return the title of this group.
    ///
    /// The title may be `None` if the group is not accessible.
    pub fn title(&self) -> Option<&str> {
        use tl::enums::Chat;

        match &self.raw {
            Chat::Empty(_) => None,
            Chat::Chat(chat) => Some(chat.title.as_str()),
            Chat::Forbidden(chat) => Some(chat.title.as_str()),
            Chat::Channel(channel) => Some(channel.title.as_str()),
            Chat::ChannelForbidden(channel) => Some(channel.title.as_str()),
        }
    }

    /// Return the public @username of this group, if any.
    ///
    /// Only megagroups can have a username.
    pub fn username(&self) -> Option<&str> {
        match &self.raw {
            tl::enums::Chat::Channel(channel) => channel.username.as_deref(),
            _ => None,
        }
    }

    /// Is this group a megagroup (also known as supergroup)?
    pub fn is_megagroup(&self) -> bool {
        matches!(
            self.raw,
            tl::enums::Chat::Channel(_) | tl::enums::Chat::ChannelForbidden(_)
        )
    }
}
