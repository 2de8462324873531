// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use telegrip_session::types::{PeerAuth, PeerId, PeerRef};
use telegrip_tl_types as tl;

/// A broadcast channel.
///
/// In a broadcast channel, only administrators can broadcast messages to all the subscribers.
/// The rest of users can only join and see messages.
///
/// Broadcast channels and megagroups both are treated as "channels" by Telegram's API, but
/// this type will always represent a broadcast channel.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub raw: tl::types::Channel,
}

impl Channel {
    pub(crate) fn from_raw(chat: tl::enums::Chat) -> Self {
        use tl::enums::Chat as C;

        match chat {
            C::Channel(channel) => Self { raw: channel },
            C::ChannelForbidden(channel) => Self {
                raw: tl::types::Channel {
                    broadcast: channel.broadcast,
                    megagroup: channel.megagroup,
                    id: channel.id,
                    access_hash: Some(channel.access_hash),
                    title: channel.title,
                    ..Default::default()
                },
            },
            C::Empty(_) | C::Chat(_) | C::Forbidden(_) => Self {
                raw: tl::types::Channel {
                    broadcast: true,
                    id: chat.id(),
                    ..Default::default()
                },
            },
        }
    }

    /// Return the unique identifier for this channel.
    pub fn id(&self) -> PeerId {
        PeerId::channel(self.raw.id)
    }

    /// Convert the channel to its reference, if Telegram sent its access hash.
    pub fn to_ref(&self) -> Option<PeerRef> {
        if self.raw.min {
            return None;
        }
        self.raw.access_hash.map(|hash| PeerRef {
            id: self.id(),
            auth: PeerAuth::from_hash(hash),
        })
    }

    /// Return the title of this channel.
    pub fn title(&self) -> &str {
        self.raw.title.as_str()
    }

    /// Return the public @username of this channel, if any.
    pub fn username(&self) -> Option<&str> {
        self.raw.username.as_deref()
    }

    /// Do messages posted in this channel have the author signature?
    pub fn signatures(&self) -> bool {
        self.raw.signatures
    }

    /// Can the content of this channel be saved or forwarded?
    pub fn noforwards(&self) -> bool {
        self.raw.noforwards
    }

    /// Amount of subscribers, if Telegram included it.
    pub fn participants_count(&self) -> Option<i32> {
        self.raw.participants_count
    }
}
