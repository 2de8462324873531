// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use telegrip_tl_types as tl;

/// A compact peer identifier.
/// ```
/// use std::mem::size_of;
/// assert_eq!(size_of::<telegrip_session::types::PeerId>(), size_of::<i64>());
/// ```
///
/// The internal representation uses the Bot API Dialog ID format to
/// bit-pack both the peer's true identifier and type in a single integer.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PeerId(i64);

/// Witness to the session's authority from Telegram to interact with a peer.
///
/// Telegram calls this value the `access_hash`.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PeerAuth(i64);

/// Reference to a peer, bundling the identity of a peer (its [`PeerId`])
/// with the authority over it (as [`PeerAuth`]).
///
/// This is what the gateway hands back when resolving a peer, and what
/// converts into the [`tl::enums::InputPeer`] family used by requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PeerRef {
    /// The peer identity.
    pub id: PeerId,
    /// The authority bound to both the sibling identity and the logged-in account.
    pub auth: PeerAuth,
}

/// [`PeerId`]'s kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeerKind {
    /// The peer identity belongs to a [`tl::enums::User`].
    User,
    /// The peer identity belongs to the logged-in user, whose true identifier is not known.
    UserSelf,
    /// The peer identity belongs to a [`tl::types::Chat`] (a basic group).
    Chat,
    /// The peer identity belongs to a [`tl::types::Channel`], either broadcast or megagroup.
    Channel,
}

/// Sentinel value used to represent the self-user when its true `PeerId` is unknown.
///
/// Sits outside any valid Bot API Dialog ID range.
const SELF_USER_ID: PeerId = PeerId(1 << 40);

const MAX_USER_ID: i64 = 0xffffffffff;
const MAX_CHAT_ID: i64 = 999999999999;
const CHANNEL_OFFSET: i64 = 1000000000000;

fn is_valid_channel_id(id: i64) -> bool {
    (1..=997852516352).contains(&id) || (1002147483649..=3000000000000).contains(&id)
}

impl PeerId {
    /// Creates a peer identity for the currently-logged-in user or bot account.
    pub fn self_user() -> Self {
        SELF_USER_ID
    }

    /// Creates a peer identity for a user or bot account.
    ///
    /// Panics if the identifier is outside the range Telegram uses for users.
    pub fn user(id: i64) -> Self {
        if !(1..=MAX_USER_ID).contains(&id) {
            panic!("user ID out of range");
        }
        Self(id)
    }

    /// Creates a peer identity for a basic group chat.
    ///
    /// Panics if the identifier is outside the range Telegram uses for chats.
    pub fn chat(id: i64) -> Self {
        if !(1..=MAX_CHAT_ID).contains(&id) {
            panic!("chat ID out of range");
        }
        Self(-id)
    }

    /// Creates a peer identity for a broadcast channel or megagroup.
    ///
    /// Panics if the identifier is outside the range Telegram uses for channels.
    pub fn channel(id: i64) -> Self {
        if !is_valid_channel_id(id) {
            panic!("channel ID out of range");
        }
        Self(-(CHANNEL_OFFSET + id))
    }

    /// Interprets a Bot API Dialog ID (positive for users, negative for chats,
    /// `-100` prefixed for channels). Returns `None` if it falls in no valid range.
    pub fn from_bot_api_dialog_id(id: i64) -> Option<Self> {
        if (1..=MAX_USER_ID).contains(&id) {
            Some(Self(id))
        } else if (-MAX_CHAT_ID..=-1).contains(&id) {
            Some(Self(id))
        } else if id
            .checked_neg()
            .and_then(|id| id.checked_sub(CHANNEL_OFFSET))
            .is_some_and(is_valid_channel_id)
        {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Peer kind.
    pub fn kind(self) -> PeerKind {
        if self == SELF_USER_ID {
            PeerKind::UserSelf
        } else if self.0 > 0 {
            PeerKind::User
        } else if self.0 >= -MAX_CHAT_ID {
            PeerKind::Chat
        } else {
            PeerKind::Channel
        }
    }

    /// Returns the identity using the Bot API Dialog ID format.
    ///
    /// Will return an arbitrary value if [`Self::kind`] is [`PeerKind::UserSelf`].
    pub fn bot_api_dialog_id(&self) -> i64 {
        self.0
    }

    /// Unpacked peer identifier. Panics if [`Self::kind`] is [`PeerKind::UserSelf`].
    pub fn bare_id(&self) -> i64 {
        match self.kind() {
            PeerKind::User => self.0,
            PeerKind::UserSelf => panic!("self-user ID not known"),
            PeerKind::Chat => -self.0,
            PeerKind::Channel => -self.0 - CHANNEL_OFFSET,
        }
    }
}

impl PeerAuth {
    /// Construct a new peer authentication using Telegram's `access_hash` value.
    pub fn from_hash(access_hash: i64) -> Self {
        PeerAuth(access_hash)
    }

    /// Grants access to the internal access hash.
    pub fn hash(&self) -> i64 {
        self.0
    }
}

impl Default for PeerAuth {
    /// Returns the ambient authority, valid only when Telegram considers it so
    /// (bots, contacts, basic groups).
    fn default() -> Self {
        Self(0)
    }
}

impl PeerRef {
    /// Reference to the logged-in user.
    pub fn self_user() -> Self {
        Self {
            id: PeerId::self_user(),
            auth: PeerAuth::default(),
        }
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            PeerKind::UserSelf => f.write_str("self"),
            _ => self.bot_api_dialog_id().fmt(f),
        }
    }
}

impl From<tl::enums::Peer> for PeerId {
    fn from(peer: tl::enums::Peer) -> Self {
        Self::from(&peer)
    }
}

impl<'a> From<&'a tl::enums::Peer> for PeerId {
    fn from(peer: &'a tl::enums::Peer) -> Self {
        match peer {
            tl::enums::Peer::User(user) => PeerId::user(user.user_id),
            tl::enums::Peer::Chat(chat) => PeerId::chat(chat.chat_id),
            tl::enums::Peer::Channel(channel) => PeerId::channel(channel.channel_id),
        }
    }
}

impl From<PeerId> for tl::enums::Peer {
    fn from(peer: PeerId) -> Self {
        match peer.kind() {
            PeerKind::User => tl::enums::Peer::User(tl::types::PeerUser {
                user_id: peer.bare_id(),
            }),
            PeerKind::UserSelf => panic!("self-user ID not known"),
            PeerKind::Chat => tl::enums::Peer::Chat(tl::types::PeerChat {
                chat_id: peer.bare_id(),
            }),
            PeerKind::Channel => tl::enums::Peer::Channel(tl::types::PeerChannel {
                channel_id: peer.bare_id(),
            }),
        }
    }
}

impl From<tl::enums::InputPeer> for PeerRef {
    fn from(peer: tl::enums::InputPeer) -> Self {
        match peer {
            tl::enums::InputPeer::Empty => {
                panic!("InputPeer::Empty cannot be converted to any Peer");
            }
            tl::enums::InputPeer::PeerSelf => PeerRef::self_user(),
            tl::enums::InputPeer::User(user) => PeerRef {
                id: PeerId::user(user.user_id),
                auth: PeerAuth::from_hash(user.access_hash),
            },
            tl::enums::InputPeer::Chat(chat) => PeerRef {
                id: PeerId::chat(chat.chat_id),
                auth: PeerAuth::default(),
            },
            tl::enums::InputPeer::Channel(channel) => PeerRef {
                id: PeerId::channel(channel.channel_id),
                auth: PeerAuth::from_hash(channel.access_hash),
            },
        }
    }
}

impl From<&tl::types::User> for PeerRef {
    fn from(user: &tl::types::User) -> Self {
        PeerRef {
            id: if user.is_self {
                PeerId::self_user()
            } else {
                PeerId::user(user.id)
            },
            auth: user
                .access_hash
                .map(PeerAuth::from_hash)
                .unwrap_or_default(),
        }
    }
}

impl From<&tl::enums::Chat> for PeerRef {
    fn from(chat: &tl::enums::Chat) -> Self {
        use tl::enums::Chat as C;

        match chat {
            C::Empty(_) | C::Chat(_) | C::Forbidden(_) => PeerRef {
                id: PeerId::chat(chat.id()),
                auth: PeerAuth::default(),
            },
            C::Channel(channel) => PeerRef {
                id: PeerId::channel(channel.id),
                auth: channel
                    .access_hash
                    .map(PeerAuth::from_hash)
                    .unwrap_or_default(),
            },
            C::ChannelForbidden(channel) => PeerRef {
                id: PeerId::channel(channel.id),
                auth: PeerAuth::from_hash(channel.access_hash),
            },
        }
    }
}

impl From<PeerRef> for tl::enums::InputPeer {
    fn from(peer: PeerRef) -> Self {
        match peer.id.kind() {
            PeerKind::User => tl::enums::InputPeer::User(tl::types::InputPeerUser {
                user_id: peer.id.bare_id(),
                access_hash: peer.auth.hash(),
            }),
            PeerKind::UserSelf => tl::enums::InputPeer::PeerSelf,
            PeerKind::Chat => tl::enums::InputPeer::Chat(tl::types::InputPeerChat {
                chat_id: peer.id.bare_id(),
            }),
            PeerKind::Channel => tl::enums::InputPeer::Channel(tl::types::InputPeerChannel {
                channel_id: peer.id.bare_id(),
                access_hash: peer.auth.hash(),
            }),
        }
    }
}

impl From<PeerRef> for tl::enums::InputUser {
    fn from(peer: PeerRef) -> Self {
        match peer.id.kind() {
            PeerKind::User => tl::enums::InputUser::User(tl::types::InputUser {
                user_id: peer.id.bare_id(),
                access_hash: peer.auth.hash(),
            }),
            PeerKind::UserSelf => tl::enums::InputUser::UserSelf,
            PeerKind::Chat | PeerKind::Channel => tl::enums::InputUser::Empty,
        }
    }
}

impl From<PeerRef> for tl::enums::InputChannel {
    fn from(peer: PeerRef) -> Self {
        match peer.id.kind() {
            PeerKind::Channel => tl::enums::InputChannel::Channel(tl::types::InputChannel {
                channel_id: peer.id.bare_id(),
                access_hash: peer.auth.hash(),
            }),
            PeerKind::User | PeerKind::UserSelf | PeerKind::Chat => {
                tl::enums::InputChannel::Empty
            }
        }
    }
}
