// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to users, groups and channels.

use std::collections::VecDeque;

use futures_util::stream::{self, Stream};
use log::trace;
use telegrip_gateway::{Gateway, InvocationError, ReadError};
use telegrip_session::types::{PeerIdentifier, PeerKind, PeerRef};
use telegrip_tl_types as tl;

use super::{Client, IterBuffer};
use crate::media::Photo;
use crate::message::raw_new_chat_photo;
use crate::peer::{ChatMember, ChatMembersFilter, PeerMap, User};

enum ChatMemberIterInner<G> {
    Empty,
    Chat {
        client: Client<G>,
        chat_id: i64,
        limit: Option<usize>,
        buffer: VecDeque<ChatMember>,
        total: Option<usize>,
    },
    Channel(IterBuffer<G, tl::functions::channels::GetParticipants, ChatMember>),
}

/// Iterator returned by [`Client::iter_chat_members`].
pub struct ChatMemberIter<G> {
    inner: ChatMemberIterInner<G>,
    filter: ChatMembersFilter,
    query: String,
}

impl<G: Gateway> ChatMemberIter<G> {
    fn new(client: &Client<G>, chat: PeerRef) -> Self {
        let filter = ChatMembersFilter::default();
        let query = String::new();

        let inner = match chat.id.kind() {
            PeerKind::Channel => ChatMemberIterInner::Channel(IterBuffer::from_request(
                client,
                client.0.configuration.max_participant_limit,
                tl::functions::channels::GetParticipants {
                    channel: chat.into(),
                    filter: filter.to_raw(&query),
                    offset: 0,
                    limit: 0,
                    hash: 0,
                },
            )),
            PeerKind::Chat => ChatMemberIterInner::Chat {
                client: client.clone(),
                chat_id: chat.id.bare_id(),
                limit: None,
                buffer: VecDeque::new(),
                total: None,
            },
            PeerKind::User | PeerKind::UserSelf => ChatMemberIterInner::Empty,
        };

        Self {
            inner,
            filter,
            query,
        }
    }

    /// Change how many members will be returned from the iterator.
    pub fn limit(mut self, n: usize) -> Self {
        match &mut self.inner {
            ChatMemberIterInner::Empty => {}
            ChatMemberIterInner::Chat { limit, .. } => *limit = Some(n),
            ChatMemberIterInner::Channel(iter) => iter.limit = Some(n),
        }
        self
    }

    /// Only return the members matching the filter.
    ///
    /// Small group chats ignore the filter and always return every member.
    pub fn filter(mut self, filter: ChatMembersFilter) -> Self {
        self.filter = filter;
        self.sync_filter();
        self
    }

    /// Only return the members whose name or username matches the query.
    ///
    /// Only [`ChatMembersFilter::Search`], [`ChatMembersFilter::Banned`] and
    /// [`ChatMembersFilter::Restricted`] take the query into account.
    pub fn query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self.sync_filter();
        self
    }

    fn sync_filter(&mut self) {
        if let ChatMemberIterInner::Channel(iter) = &mut self.inner {
            iter.request.filter = self.filter.to_raw(&self.query);
        }
    }

    /// Determines how many members there are in total.
    ///
    /// This only performs a network call if `next` has not been called before.
    pub async fn total(&mut self) -> Result<usize, InvocationError> {
        match &mut self.inner {
            ChatMemberIterInner::Empty => Ok(0),
            ChatMemberIterInner::Chat {
                client,
                chat_id,
                limit,
                buffer,
                total,
            } => {
                if let Some(total) = *total {
                    return Ok(total);
                }
                fill_chat_members(client, *chat_id, *limit, buffer, total).await
            }
            ChatMemberIterInner::Channel(iter) => {
                if let Some(total) = iter.total {
                    return Ok(total);
                }
                fill_channel_members(iter).await
            }
        }
    }

    /// Return the next `ChatMember` from the internal buffer, filling the buffer previously if
    /// it's empty.
    ///
    /// Returns `None` if the `limit` is reached or there are no members left.
    pub async fn next(&mut self) -> Result<Option<ChatMember>, InvocationError> {
        match &mut self.inner {
            ChatMemberIterInner::Empty => Ok(None),
            ChatMemberIterInner::Chat {
                client,
                chat_id,
                limit,
                buffer,
                total,
            } => {
                if total.is_none() {
                    fill_chat_members(client, *chat_id, *limit, buffer, total).await?;
                }
                Ok(buffer.pop_front())
            }
            ChatMemberIterInner::Channel(iter) => loop {
                if let Some(result) = iter.next_raw() {
                    return result;
                }
                fill_channel_members(iter).await?;
            },
        }
    }

    /// Adapt the iterator into a [`Stream`] of members.
    pub fn into_stream(self) -> impl Stream<Item = Result<ChatMember, InvocationError>> {
        stream::try_unfold(self, |mut iter| async move {
            Ok::<_, InvocationError>(iter.next().await?.map(|member| (member, iter)))
        })
    }
}

/// Fetch the only page a small group chat has, and return how many members it holds.
async fn fill_chat_members<G: Gateway>(
    client: &Client<G>,
    chat_id: i64,
    limit: Option<usize>,
    buffer: &mut VecDeque<ChatMember>,
    total: &mut Option<usize>,
) -> Result<usize, InvocationError> {
    let (chat, peers) = get_full_chat(client, chat_id).await?;
    let members = parse_chat_members(&peers, chat_participants(chat))?;

    let count = members.len();
    *total = Some(count);
    buffer.extend(members);
    if let Some(limit) = limit {
        buffer.truncate(limit);
    }
    Ok(count)
}

/// Fetch the next page of a channel, and return how many members it holds in total.
async fn fill_channel_members<G: Gateway>(
    iter: &mut IterBuffer<G, tl::functions::channels::GetParticipants, ChatMember>,
) -> Result<usize, InvocationError> {
    use tl::enums::channels::ChannelParticipants;

    iter.request.limit = iter.determine_limit(iter.client.0.configuration.max_participant_limit);
    let page = match iter.client.invoke(&iter.request).await? {
        ChannelParticipants::Participants(page) => page,
        ChannelParticipants::NotModified => {
            return Err(ReadError::UnexpectedResponse(
                "channels.channelParticipantsNotModified with hash = 0",
            )
            .into());
        }
    };

    trace!(
        "got {} channel members at offset {} out of {}",
        page.participants.len(),
        iter.request.offset,
        page.count
    );
    iter.last_chunk = page.participants.len() < iter.request.limit as usize;
    iter.request.offset += page.participants.len() as i32;
    iter.total = Some(page.count.max(0) as usize);

    let peers = PeerMap::new(page.users, page.chats);
    for participant in page.participants {
        if let Some(member) = ChatMember::from_raw(&peers, participant.into())? {
            iter.buffer.push_back(member);
        }
    }

    Ok(page.count.max(0) as usize)
}

async fn get_full_chat<G: Gateway>(
    client: &Client<G>,
    chat_id: i64,
) -> Result<(tl::types::ChatFull, PeerMap), InvocationError> {
    let tl::enums::messages::ChatFull::Full(full) = client
        .invoke(&tl::functions::messages::GetFullChat { chat_id })
        .await?;

    match full.full_chat {
        tl::enums::ChatFull::Full(chat) => Ok((chat, PeerMap::new(full.users, full.chats))),
        tl::enums::ChatFull::ChannelFull(_) => Err(ReadError::UnexpectedResponse(
            "channelFull from messages.getFullChat",
        )
        .into()),
    }
}

/// The participants of a small group chat, or only ourselves if we can't see the rest.
fn chat_participants(chat: tl::types::ChatFull) -> Vec<tl::enums::ChatParticipant> {
    match chat.participants {
        tl::enums::ChatParticipants::Forbidden(chat) => chat.self_participant.into_iter().collect(),
        tl::enums::ChatParticipants::Participants(chat) => chat.participants,
    }
}

fn parse_chat_members(
    peers: &PeerMap,
    participants: Vec<tl::enums::ChatParticipant>,
) -> Result<Vec<ChatMember>, ReadError> {
    participants
        .into_iter()
        .map(|participant| ChatMember::from_raw(peers, participant.into()))
        .filter_map(Result::transpose)
        .collect()
}

fn chat_participant_user_id(participant: &tl::enums::ChatParticipant) -> Option<i64> {
    match participant {
        tl::enums::ChatParticipant::Participant(p) => Some(p.user_id),
        tl::enums::ChatParticipant::Creator(p) => Some(p.user_id),
        tl::enums::ChatParticipant::Admin(p) => Some(p.user_id),
        tl::enums::ChatParticipant::Unknown(_) => None,
    }
}

/// Photo quota of a user's photo iterator when the caller asked for every photo.
const UNBOUNDED_PHOTO_QUOTA: usize = 1 << 31;

enum ProfilePhotoIterInner<G> {
    User(IterBuffer<G, tl::functions::photos::GetUserPhotos, Photo>),
    Chat {
        client: Client<G>,
        peer: PeerRef,
        limit: Option<usize>,
        buffer: VecDeque<Photo>,
        fetched: bool,
    },
}

/// Iterator returned by [`Client::get_chat_photos`].
///
/// Photos are returned newest first. Once exhausted, the iterator keeps returning `None`.
pub struct ProfilePhotoIter<G>(ProfilePhotoIterInner<G>);

impl<G: Gateway> ProfilePhotoIter<G> {
    fn new(client: &Client<G>, peer: PeerRef, limit: Option<usize>) -> Self {
        Self(match peer.id.kind() {
            PeerKind::User | PeerKind::UserSelf => {
                let mut iter = IterBuffer::from_request(
                    client,
                    client.0.configuration.max_photo_limit,
                    tl::functions::photos::GetUserPhotos {
                        user_id: peer.into(),
                        offset: 0,
                        max_id: 0,
                        limit: 0,
                    },
                );
                iter.limit = Some(limit.unwrap_or(UNBOUNDED_PHOTO_QUOTA));
                ProfilePhotoIterInner::User(iter)
            }
            PeerKind::Chat | PeerKind::Channel => ProfilePhotoIterInner::Chat {
                client: client.clone(),
                peer,
                limit,
                buffer: VecDeque::new(),
                fetched: false,
            },
        })
    }

    /// Return the next photo from the internal buffer, filling the buffer previously if it's
    /// empty.
    ///
    /// Returns `None` if the `limit` is reached or there are no photos left.
    pub async fn next(&mut self) -> Result<Option<Photo>, InvocationError> {
        match &mut self.0 {
            ProfilePhotoIterInner::User(iter) => loop {
                if let Some(result) = iter.next_raw() {
                    return result;
                }
                fill_user_photos(iter).await?;
            },
            ProfilePhotoIterInner::Chat {
                client,
                peer,
                limit,
                buffer,
                fetched,
            } => {
                if !*fetched {
                    *buffer = fetch_chat_photos(client, *peer, *limit).await?;
                    *fetched = true;
                }
                Ok(buffer.pop_front())
            }
        }
    }

    /// Adapt the iterator into a [`Stream`] of photos.
    pub fn into_stream(self) -> impl Stream<Item = Result<Photo, InvocationError>> {
        stream::try_unfold(self, |mut iter| async move {
            Ok::<_, InvocationError>(iter.next().await?.map(|photo| (photo, iter)))
        })
    }
}

async fn fill_user_photos<G: Gateway>(
    iter: &mut IterBuffer<G, tl::functions::photos::GetUserPhotos, Photo>,
) -> Result<usize, InvocationError> {
    use tl::enums::photos::Photos;

    iter.request.limit = iter.determine_limit(iter.client.0.configuration.max_photo_limit);
    let (total, photos) = match iter.client.invoke(&iter.request).await? {
        Photos::Photos(p) => {
            iter.last_chunk = true;
            (p.photos.len(), p.photos)
        }
        Photos::Slice(p) => {
            iter.last_chunk = p.photos.len() < iter.request.limit as usize;
            (p.count.max(0) as usize, p.photos)
        }
    };

    trace!(
        "got {} user photos at offset {} out of {}",
        photos.len(),
        iter.request.offset,
        total
    );
    iter.request.offset += photos.len() as i32;
    iter.total = Some(total);
    iter.buffer
        .extend(photos.into_iter().filter_map(Photo::from_raw));

    Ok(total)
}

/// Fetch the current photo of a group or channel along with the history of photo changes.
async fn fetch_chat_photos<G: Gateway>(
    client: &Client<G>,
    peer: PeerRef,
    limit: Option<usize>,
) -> Result<VecDeque<Photo>, InvocationError> {
    use tl::enums::messages::Messages;

    let current = if peer.id.kind() == PeerKind::Channel {
        let tl::enums::messages::ChatFull::Full(full) = client
            .invoke(&tl::functions::channels::GetFullChannel {
                channel: peer.into(),
            })
            .await?;

        match full.full_chat {
            tl::enums::ChatFull::ChannelFull(channel) => Photo::from_raw(channel.chat_photo),
            tl::enums::ChatFull::Full(_) => {
                return Err(ReadError::UnexpectedResponse(
                    "chatFull from channels.getFullChannel",
                )
                .into());
            }
        }
    } else {
        let (chat, _) = get_full_chat(client, peer.id.bare_id()).await?;
        chat.chat_photo.and_then(Photo::from_raw)
    };

    let messages = match client
        .invoke(&tl::functions::messages::Search {
            peer: peer.into(),
            q: String::new(),
            from_id: None,
            top_msg_id: None,
            filter: tl::enums::MessagesFilter::InputMessagesFilterChatPhotos,
            min_date: 0,
            max_date: 0,
            offset_id: 0,
            add_offset: 0,
            // 0 lets Telegram pick its default amount.
            limit: limit.map_or(0, |limit| limit.min(i32::MAX as usize) as i32),
            max_id: 0,
            min_id: 0,
            hash: 0,
        })
        .await?
    {
        Messages::Messages(m) => m.messages,
        Messages::Slice(m) => m.messages,
        Messages::ChannelMessages(m) => m.messages,
        Messages::NotModified(_) => Vec::new(),
    };

    let history = messages.iter().filter_map(raw_new_chat_photo).collect();
    trace!(
        "chat {} has current photo {:?} and {} photo changes",
        peer.id,
        current.as_ref().map(Photo::id),
        messages.len()
    );
    Ok(merge_photos(current, history, limit))
}

/// Put the current photo in front of the history, unless it is already the newest entry.
fn merge_photos(
    current: Option<Photo>,
    history: VecDeque<Photo>,
    limit: Option<usize>,
) -> VecDeque<Photo> {
    let mut photos = history;
    if let Some(current) = current {
        if photos.front().is_none_or(|newest| newest.id() != current.id()) {
            photos.push_front(current);
        }
    }
    if let Some(limit) = limit {
        photos.truncate(limit);
    }
    photos
}

/// Method implementations related to dealing with chats or other users.
impl<G: Gateway> Client<G> {
    /// Iterate over the history of photos of a user, group or channel, newest first.
    ///
    /// A `limit` of `0` returns every photo.
    ///
    /// For groups and channels, the current photo is included even if Telegram did not list
    /// it in the history of photo changes. Their history comes from a single search for photo
    /// changes, so with a `limit` of `0` only as many changes as Telegram returns by default
    /// are listed.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f<G: telegrip_client::Gateway>(client: telegrip_client::Client<G>) -> Result<(), Box<dyn std::error::Error>> {
    /// let mut photos = client.get_chat_photos("@durov", 0).await?;
    ///
    /// while let Some(photo) = photos.next().await? {
    ///     println!("Did you know the chat has a photo with ID {}?", photo.id());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_chat_photos<C: Into<PeerIdentifier>>(
        &self,
        chat: C,
        limit: usize,
    ) -> Result<ProfilePhotoIter<G>, InvocationError> {
        let peer = self.resolve_peer(chat).await?;
        let limit = if limit == 0 { None } else { Some(limit) };
        Ok(ProfilePhotoIter::new(self, peer, limit))
    }

    /// Iterate over the members of a group or channel.
    ///
    /// The members are returned in no particular order.
    ///
    /// When used to iterate the members of a user, the iterator won't produce values.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f<G: telegrip_client::Gateway>(client: telegrip_client::Client<G>) -> Result<(), Box<dyn std::error::Error>> {
    /// use telegrip_client::peer::ChatMembersFilter;
    ///
    /// let mut admins = client
    ///     .iter_chat_members("@group")
    ///     .await?
    ///     .filter(ChatMembersFilter::Administrators);
    ///
    /// while let Some(admin) = admins.next().await? {
    ///     println!("{:?} is {:?}", admin.user.map(|u| u.full_name()), admin.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn iter_chat_members<C: Into<PeerIdentifier>>(
        &self,
        chat: C,
    ) -> Result<ChatMemberIter<G>, InvocationError> {
        let chat = self.resolve_peer(chat).await?;
        Ok(ChatMemberIter::new(self, chat))
    }

    /// Get a single member of a group or channel.
    ///
    /// Returns `None` if the user is not a member, or if `chat` is a user.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f<G: telegrip_client::Gateway>(client: telegrip_client::Client<G>) -> Result<(), Box<dyn std::error::Error>> {
    /// if let Some(me) = client.get_chat_member("@group", "me").await? {
    ///     println!("I am {:?} in the group", me.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_chat_member<C: Into<PeerIdentifier>, U: Into<PeerIdentifier>>(
        &self,
        chat: C,
        user: U,
    ) -> Result<Option<ChatMember>, InvocationError> {
        let chat = self.resolve_peer(chat).await?;
        let user = self.resolve_peer(user).await?;

        match chat.id.kind() {
            PeerKind::Channel => {
                let tl::enums::channels::ChannelParticipant::Participant(found) = self
                    .invoke(&tl::functions::channels::GetParticipant {
                        channel: chat.into(),
                        participant: user.into(),
                    })
                    .await?;

                let peers = PeerMap::new(found.users, found.chats);
                Ok(ChatMember::from_raw(&peers, found.participant.into())?)
            }
            PeerKind::Chat => {
                let (full, peers) = get_full_chat(self, chat.id.bare_id()).await?;
                let is_user = |user_id: i64| match user.id.kind() {
                    PeerKind::UserSelf => peers.get_user(user_id).is_some_and(User::is_self),
                    _ => user_id == user.id.bare_id(),
                };

                let participant = chat_participants(full)
                    .into_iter()
                    .find(|p| chat_participant_user_id(p).is_some_and(|id| is_user(id)));

                match participant {
                    Some(participant) => Ok(ChatMember::from_raw(&peers, participant.into())?),
                    None => Ok(None),
                }
            }
            PeerKind::User | PeerKind::UserSelf => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use telegrip_session::types::{PeerAuth, PeerId};

    fn photo(id: i64) -> Photo {
        Photo {
            raw: tl::types::Photo {
                has_stickers: false,
                id,
                access_hash: 0,
                file_reference: Vec::new(),
                date: 0,
                sizes: Vec::new(),
                dc_id: 1,
            },
        }
    }

    fn ids(photos: &VecDeque<Photo>) -> Vec<i64> {
        photos.iter().map(Photo::id).collect()
    }

    #[test]
    fn current_photo_already_in_history() {
        let history = [1, 2, 3].map(photo).into();
        assert_eq!(ids(&merge_photos(Some(photo(1)), history, None)), [1, 2, 3]);
    }

    #[test]
    fn current_photo_missing_from_history() {
        let history = [2, 3].map(photo).into();
        assert_eq!(ids(&merge_photos(Some(photo(1)), history, None)), [1, 2, 3]);
    }

    #[test]
    fn current_photo_without_history() {
        assert_eq!(ids(&merge_photos(Some(photo(1)), VecDeque::new(), None)), [1]);
        assert!(merge_photos(None, VecDeque::new(), None).is_empty());
    }

    #[test]
    fn merged_photos_are_truncated() {
        let history = [2, 3].map(photo).into();
        assert_eq!(ids(&merge_photos(Some(photo(1)), history, Some(2))), [1, 2]);
    }

    struct Offline;

    impl Gateway for Offline {
        fn invoke<R: tl::RemoteCall>(
            &self,
            _request: &R,
        ) -> impl Future<Output = Result<R::Return, InvocationError>> + Send {
            std::future::ready(Err(InvocationError::Dropped))
        }

        fn resolve_peer(
            &self,
            _peer: &PeerIdentifier,
        ) -> impl Future<Output = Result<PeerRef, InvocationError>> + Send {
            std::future::ready(Err(InvocationError::Dropped))
        }
    }

    #[test]
    fn unbounded_user_photos_use_the_quota_sentinel() {
        let client = Client::new(Offline);
        let peer = PeerRef {
            id: PeerId::user(1),
            auth: PeerAuth::default(),
        };

        match ProfilePhotoIter::new(&client, peer, None).0 {
            ProfilePhotoIterInner::User(iter) => {
                assert_eq!(iter.limit, Some(1 << 31));
                assert_eq!(iter.determine_limit(100), 100);
            }
            ProfilePhotoIterInner::Chat { .. } => panic!("user photos must page"),
        }

        match ProfilePhotoIter::new(&client, peer, Some(3)).0 {
            ProfilePhotoIterInner::User(iter) => assert_eq!(iter.limit, Some(3)),
            ProfilePhotoIterInner::Chat { .. } => panic!("user photos must page"),
        }
    }
}
