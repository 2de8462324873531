// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bare constructors. Optional parameters (those behind a `flags` bit) are `Option`,
//! and `true` flags are plain `bool`.

use crate::enums;

#[derive(Clone, Debug, PartialEq)]
pub struct RpcError {
    pub error_code: i32,
    pub error_message: String,
}

// Peers

#[derive(Clone, Debug, PartialEq)]
pub struct PeerUser {
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PeerChat {
    pub chat_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PeerChannel {
    pub channel_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputPeerSelf {}

#[derive(Clone, Debug, PartialEq)]
pub struct InputPeerUser {
    pub user_id: i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputPeerChat {
    pub chat_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputPeerChannel {
    pub channel_id: i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputUser {
    pub user_id: i64,
    pub access_hash: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputChannel {
    pub channel_id: i64,
    pub access_hash: i64,
}

// Users and chats

#[derive(Clone, Debug, PartialEq)]
pub struct UserEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct User {
    pub is_self: bool,
    pub contact: bool,
    pub mutual_contact: bool,
    pub deleted: bool,
    pub bot: bool,
    pub verified: bool,
    pub restricted: bool,
    pub min: bool,
    pub scam: bool,
    pub fake: bool,
    pub premium: bool,
    pub id: i64,
    pub access_hash: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub lang_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Chat {
    pub creator: bool,
    pub left: bool,
    pub deactivated: bool,
    pub noforwards: bool,
    pub id: i64,
    pub title: String,
    pub participants_count: i32,
    pub date: i32,
    pub version: i32,
    pub admin_rights: Option<enums::ChatAdminRights>,
    pub default_banned_rights: Option<enums::ChatBannedRights>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatForbidden {
    pub id: i64,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Channel {
    pub creator: bool,
    pub left: bool,
    pub broadcast: bool,
    pub verified: bool,
    pub megagroup: bool,
    pub restricted: bool,
    pub signatures: bool,
    pub min: bool,
    pub scam: bool,
    pub fake: bool,
    pub gigagroup: bool,
    pub noforwards: bool,
    pub forum: bool,
    pub id: i64,
    pub access_hash: Option<i64>,
    pub title: String,
    pub username: Option<String>,
    pub date: i32,
    pub admin_rights: Option<enums::ChatAdminRights>,
    pub banned_rights: Option<enums::ChatBannedRights>,
    pub default_banned_rights: Option<enums::ChatBannedRights>,
    pub participants_count: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelForbidden {
    pub broadcast: bool,
    pub megagroup: bool,
    pub id: i64,
    pub access_hash: i64,
    pub title: String,
    pub until_date: Option<i32>,
}

// Rights

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ChatAdminRights {
    pub change_info: bool,
    pub post_messages: bool,
    pub edit_messages: bool,
    pub delete_messages: bool,
    pub ban_users: bool,
    pub invite_users: bool,
    pub pin_messages: bool,
    pub add_admins: bool,
    pub anonymous: bool,
    pub manage_call: bool,
    pub other: bool,
    pub manage_topics: bool,
    pub post_stories: bool,
    pub edit_stories: bool,
    pub delete_stories: bool,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ChatBannedRights {
    pub view_messages: bool,
    pub send_messages: bool,
    pub send_media: bool,
    pub send_stickers: bool,
    pub send_gifs: bool,
    pub send_games: bool,
    pub send_inline: bool,
    pub embed_links: bool,
    pub send_polls: bool,
    pub change_info: bool,
    pub invite_users: bool,
    pub pin_messages: bool,
    pub manage_topics: bool,
    pub send_photos: bool,
    pub send_videos: bool,
    pub send_roundvideos: bool,
    pub send_audios: bool,
    pub send_voices: bool,
    pub send_docs: bool,
    pub send_plain: bool,
    pub until_date: i32,
}

// Basic group participants

#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipant {
    pub user_id: i64,
    pub inviter_id: i64,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipantCreator {
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipantAdmin {
    pub user_id: i64,
    pub inviter_id: i64,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipantsForbidden {
    pub chat_id: i64,
    pub self_participant: Option<enums::ChatParticipant>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipants {
    pub chat_id: i64,
    pub participants: Vec<enums::ChatParticipant>,
    pub version: i32,
}

// Channel participants

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipant {
    pub user_id: i64,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantSelf {
    pub via_request: bool,
    pub user_id: i64,
    pub inviter_id: i64,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantCreator {
    pub user_id: i64,
    pub admin_rights: enums::ChatAdminRights,
    pub rank: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantAdmin {
    pub can_edit: bool,
    pub is_self: bool,
    pub user_id: i64,
    pub inviter_id: Option<i64>,
    pub promoted_by: i64,
    pub date: i32,
    pub admin_rights: enums::ChatAdminRights,
    pub rank: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantBanned {
    pub left: bool,
    pub peer: enums::Peer,
    pub kicked_by: i64,
    pub date: i32,
    pub banned_rights: enums::ChatBannedRights,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantLeft {
    pub peer: enums::Peer,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantsKicked {
    pub q: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantsBanned {
    pub q: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantsSearch {
    pub q: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelParticipantsContacts {
    pub q: String,
}

// Full chats

#[derive(Clone, Debug, PartialEq)]
pub struct ChatFull {
    pub can_set_username: bool,
    pub has_scheduled: bool,
    pub id: i64,
    pub about: String,
    pub participants: enums::ChatParticipants,
    pub chat_photo: Option<enums::Photo>,
    pub pinned_msg_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelFull {
    pub can_view_participants: bool,
    pub can_set_username: bool,
    pub has_scheduled: bool,
    pub id: i64,
    pub about: String,
    pub participants_count: Option<i32>,
    pub admins_count: Option<i32>,
    pub kicked_count: Option<i32>,
    pub banned_count: Option<i32>,
    pub chat_photo: enums::Photo,
    pub pinned_msg_id: Option<i32>,
    pub linked_chat_id: Option<i64>,
}

// Photos

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoEmpty {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    pub has_stickers: bool,
    pub id: i64,
    pub access_hash: i64,
    pub file_reference: Vec<u8>,
    pub date: i32,
    pub sizes: Vec<enums::PhotoSize>,
    pub dc_id: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSizeEmpty {
    pub r#type: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSize {
    pub r#type: String,
    pub w: i32,
    pub h: i32,
    pub size: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSizeProgressive {
    pub r#type: String,
    pub w: i32,
    pub h: i32,
    pub sizes: Vec<i32>,
}

// Messages

#[derive(Clone, Debug, PartialEq)]
pub struct MessageEmpty {
    pub id: i32,
    pub peer_id: Option<enums::Peer>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub post: bool,
    pub from_scheduled: bool,
    pub legacy: bool,
    pub edit_hide: bool,
    pub pinned: bool,
    pub noforwards: bool,
    pub id: i32,
    pub from_id: Option<enums::Peer>,
    pub peer_id: enums::Peer,
    pub fwd_from: Option<enums::MessageFwdHeader>,
    pub via_bot_id: Option<i64>,
    pub date: i32,
    pub message: String,
    pub media: Option<enums::MessageMedia>,
    pub views: Option<i32>,
    pub forwards: Option<i32>,
    pub edit_date: Option<i32>,
    pub post_author: Option<String>,
    pub grouped_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageService {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub post: bool,
    pub legacy: bool,
    pub id: i32,
    pub from_id: Option<enums::Peer>,
    pub peer_id: enums::Peer,
    pub date: i32,
    pub action: enums::MessageAction,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageFwdHeader {
    pub imported: bool,
    pub from_id: Option<enums::Peer>,
    pub from_name: Option<String>,
    pub date: i32,
    pub channel_post: Option<i32>,
    pub post_author: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaPhoto {
    pub spoiler: bool,
    pub photo: Option<enums::Photo>,
    pub ttl_seconds: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatEditTitle {
    pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatEditPhoto {
    pub photo: enums::Photo,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatAddUser {
    pub users: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatDeleteUser {
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputMessagesFilterEmpty {}

#[derive(Clone, Debug, PartialEq)]
pub struct InputMessagesFilterPhotos {}

#[derive(Clone, Debug, PartialEq)]
pub struct InputMessagesFilterChatPhotos {}

// Updates

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateNewMessage {
    pub message: enums::Message,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateNewChannelMessage {
    pub message: enums::Message,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateNewScheduledMessage {
    pub message: enums::Message,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateMessageId {
    pub id: i32,
    pub random_id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateReadHistoryOutbox {
    pub peer: enums::Peer,
    pub max_id: i32,
    pub pts: i32,
    pub pts_count: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateReadChannelOutbox {
    pub channel_id: i64,
    pub max_id: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateShort {
    pub update: enums::Update,
    pub date: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdatesCombined {
    pub updates: Vec<enums::Update>,
    pub users: Vec<enums::User>,
    pub chats: Vec<enums::Chat>,
    pub date: i32,
    pub seq_start: i32,
    pub seq: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Updates {
    pub updates: Vec<enums::Update>,
    pub users: Vec<enums::User>,
    pub chats: Vec<enums::Chat>,
    pub date: i32,
    pub seq: i32,
}

pub mod messages {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    pub struct ChatFull {
        pub full_chat: enums::ChatFull,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct Messages {
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct MessagesSlice {
        pub inexact: bool,
        pub count: i32,
        pub next_rate: Option<i32>,
        pub offset_id_offset: Option<i32>,
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct ChannelMessages {
        pub inexact: bool,
        pub pts: i32,
        pub count: i32,
        pub offset_id_offset: Option<i32>,
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct MessagesNotModified {
        pub count: i32,
    }
}

pub mod photos {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    pub struct Photos {
        pub photos: Vec<enums::Photo>,
        pub users: Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct PhotosSlice {
        pub count: i32,
        pub photos: Vec<enums::Photo>,
        pub users: Vec<enums::User>,
    }
}

pub mod channels {
    use crate::enums;

    #[derive(Clone, Debug, PartialEq)]
    pub struct ChannelParticipants {
        pub count: i32,
        pub participants: Vec<enums::ChannelParticipant>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct ChannelParticipant {
        pub participant: enums::ChannelParticipant,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }
}
