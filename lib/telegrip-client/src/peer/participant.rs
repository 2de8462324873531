// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chrono::{DateTime, Utc};
use log::warn;
use telegrip_gateway::ReadError;
use telegrip_tl_types as tl;

use super::{ChatPermissions, ChatPrivileges, Peer, PeerMap, User};
use crate::utils;

/// Membership status of someone within a group or channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChatMemberStatus {
    /// The member has no special rights or restrictions.
    Member,
    /// The member was promoted and has a set of [`ChatPrivileges`].
    Administrator,
    /// The member created the chat.
    Owner,
    /// The member can still read the chat, but some actions are forbidden.
    Restricted,
    /// The member cannot see the chat at all.
    Banned,
    /// The member is no longer in the chat.
    Left,
}

/// Which members of a channel to list.
///
/// Only megagroups and broadcast channels honour the filter. Small group chats always
/// list every member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChatMembersFilter {
    /// Every member, optionally matching a query.
    #[default]
    Search,
    /// Members that can no longer see the chat.
    Banned,
    /// Members with some actions forbidden.
    Restricted,
    /// Bot accounts.
    Bots,
    /// Members that joined most recently.
    Recent,
    /// Administrators and the owner.
    Administrators,
}

/// A raw participant, as sent by Telegram for either small group chats or channels.
#[derive(Clone, Debug, PartialEq)]
pub enum RawParticipant {
    Chat(tl::enums::ChatParticipant),
    Channel(tl::enums::ChannelParticipant),
}

/// Information about one member of a group or channel.
///
/// Only the fields that make sense for the kind of membership are present.
/// For instance, `privileges` is only set for administrators and owners of channels,
/// and `until_date` is only set for restricted and banned members whose restriction expires.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ChatMember {
    pub status: ChatMemberStatus,
    /// The member, when it is a user.
    pub user: Option<User>,
    /// The member, when it is a group or channel (channels can be banned from posting
    /// in discussion groups).
    pub chat: Option<Peer>,
    /// Date when the member joined.
    pub joined_date: Option<DateTime<Utc>>,
    /// Date when the restrictions will be lifted.
    pub until_date: Option<DateTime<Utc>>,
    /// Custom administrator title shown instead of "Owner" or "Admin".
    pub custom_title: Option<String>,
    pub invited_by: Option<User>,
    pub promoted_by: Option<User>,
    pub restricted_by: Option<User>,
    /// Whether a restricted member is still in the chat.
    pub is_member: Option<bool>,
    /// Whether the logged-in account can edit the privileges of this administrator.
    pub can_be_edited: Option<bool>,
    pub permissions: Option<ChatPermissions>,
    pub privileges: Option<ChatPrivileges>,
}

impl ChatMembersFilter {
    pub(crate) fn to_raw(self, query: &str) -> tl::enums::ChannelParticipantsFilter {
        use tl::enums::ChannelParticipantsFilter as F;

        let q = query.to_string();
        match self {
            Self::Search => {
                F::ChannelParticipantsSearch(tl::types::ChannelParticipantsSearch { q })
            }
            Self::Banned => {
                F::ChannelParticipantsKicked(tl::types::ChannelParticipantsKicked { q })
            }
            Self::Restricted => {
                F::ChannelParticipantsBanned(tl::types::ChannelParticipantsBanned { q })
            }
            Self::Bots => F::ChannelParticipantsBots,
            Self::Recent => F::ChannelParticipantsRecent,
            Self::Administrators => F::ChannelParticipantsAdmins,
        }
    }
}

impl From<tl::enums::ChatParticipant> for RawParticipant {
    fn from(participant: tl::enums::ChatParticipant) -> Self {
        Self::Chat(participant)
    }
}

impl From<tl::enums::ChannelParticipant> for RawParticipant {
    fn from(participant: tl::enums::ChannelParticipant) -> Self {
        Self::Channel(participant)
    }
}

impl ChatMember {
    fn new(status: ChatMemberStatus) -> Self {
        Self {
            status,
            user: None,
            chat: None,
            joined_date: None,
            until_date: None,
            custom_title: None,
            invited_by: None,
            promoted_by: None,
            restricted_by: None,
            is_member: None,
            can_be_edited: None,
            permissions: None,
            privileges: None,
        }
    }

    /// Build the member out of a raw participant, looking up every referenced user or chat
    /// in `peers`.
    ///
    /// Returns `Ok(None)` if the participant uses a constructor this library does not know.
    pub fn from_raw(
        peers: &PeerMap,
        participant: RawParticipant,
    ) -> Result<Option<Self>, ReadError> {
        match participant {
            RawParticipant::Chat(participant) => Self::from_raw_chat(peers, participant),
            RawParticipant::Channel(participant) => Self::from_raw_channel(peers, participant),
        }
    }

    fn from_raw_chat(
        peers: &PeerMap,
        participant: tl::enums::ChatParticipant,
    ) -> Result<Option<Self>, ReadError> {
        use tl::enums::ChatParticipant as P;

        Ok(Some(match participant {
            P::Participant(p) => Self {
                user: Some(peers.user(p.user_id)?),
                joined_date: Some(utils::date(p.date)),
                invited_by: Some(peers.user(p.inviter_id)?),
                ..Self::new(ChatMemberStatus::Member)
            },
            P::Admin(p) => Self {
                user: Some(peers.user(p.user_id)?),
                joined_date: Some(utils::date(p.date)),
                invited_by: Some(peers.user(p.inviter_id)?),
                ..Self::new(ChatMemberStatus::Administrator)
            },
            P::Creator(p) => Self {
                user: Some(peers.user(p.user_id)?),
                ..Self::new(ChatMemberStatus::Owner)
            },
            P::Unknown(id) => {
                warn!("skipping chat participant with unknown constructor {id:08x}");
                return Ok(None);
            }
        }))
    }

    fn from_raw_channel(
        peers: &PeerMap,
        participant: tl::enums::ChannelParticipant,
    ) -> Result<Option<Self>, ReadError> {
        use tl::enums::ChannelParticipant as P;

        Ok(Some(match participant {
            P::Participant(p) => Self {
                user: Some(peers.user(p.user_id)?),
                joined_date: Some(utils::date(p.date)),
                ..Self::new(ChatMemberStatus::Member)
            },
            P::ParticipantSelf(p) => Self {
                user: Some(peers.user(p.user_id)?),
                joined_date: Some(utils::date(p.date)),
                invited_by: Some(peers.user(p.inviter_id)?),
                ..Self::new(ChatMemberStatus::Member)
            },
            P::Admin(p) => Self {
                user: Some(peers.user(p.user_id)?),
                joined_date: Some(utils::date(p.date)),
                promoted_by: Some(peers.user(p.promoted_by)?),
                invited_by: p
                    .inviter_id
                    .filter(|&id| id != 0)
                    .map(|id| peers.user(id))
                    .transpose()?,
                custom_title: p.rank,
                can_be_edited: Some(p.can_edit),
                privileges: Some(ChatPrivileges::from_raw(p.admin_rights)),
                ..Self::new(ChatMemberStatus::Administrator)
            },
            P::Banned(p) => {
                let permissions = ChatPermissions::from_raw(p.banned_rights);
                let (user, chat) = user_or_chat(peers, &p.peer)?;
                Self {
                    user,
                    chat,
                    until_date: utils::date_or_never(permissions.raw.until_date),
                    joined_date: Some(utils::date(p.date)),
                    is_member: Some(!p.left),
                    restricted_by: Some(peers.user(p.kicked_by)?),
                    ..Self::new(if permissions.raw.view_messages {
                        ChatMemberStatus::Banned
                    } else {
                        ChatMemberStatus::Restricted
                    })
                }
                .with_permissions(permissions)
            }
            P::Creator(p) => Self {
                user: Some(peers.user(p.user_id)?),
                custom_title: p.rank,
                privileges: Some(ChatPrivileges::from_raw(p.admin_rights)),
                ..Self::new(ChatMemberStatus::Owner)
            },
            P::Left(p) => {
                let (user, chat) = user_or_chat(peers, &p.peer)?;
                Self {
                    user,
                    chat,
                    ..Self::new(ChatMemberStatus::Left)
                }
            }
            P::Unknown(id) => {
                warn!("skipping channel participant with unknown constructor {id:08x}");
                return Ok(None);
            }
        }))
    }

    fn with_permissions(mut self, permissions: ChatPermissions) -> Self {
        self.permissions = Some(permissions);
        self
    }
}

/// Resolve a peer that may be either a user or a chat into exactly one of both.
fn user_or_chat(
    peers: &PeerMap,
    peer: &tl::enums::Peer,
) -> Result<(Option<User>, Option<Peer>), ReadError> {
    Ok(match peer {
        tl::enums::Peer::User(user) => (Some(peers.user(user.user_id)?), None),
        tl::enums::Peer::Chat(_) | tl::enums::Peer::Channel(_) => (None, Some(peers.peer(peer)?)),
    })
}
