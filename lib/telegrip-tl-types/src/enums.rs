// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Boxed types, one variant per constructor.

use crate::types;

/// Implements `From<types::$ty> for $enum` by wrapping it in `$enum::$variant`.
macro_rules! impl_from_type {
    ($($enum:ty => $variant:path : $ty:ty),+ $(,)?) => {
        $(
            #[cfg(feature = "impl-from-type")]
            impl From<$ty> for $enum {
                fn from(x: $ty) -> Self {
                    $variant(x)
                }
            }
        )+
    };
}

/// Implements `From<$enum> for types::$ty` for enums with a single constructor.
macro_rules! impl_from_enum {
    ($($enum:ty => $variant:path : $ty:ty),+ $(,)?) => {
        $(
            #[cfg(feature = "impl-from-enum")]
            impl From<$enum> for $ty {
                fn from(x: $enum) -> Self {
                    match x {
                        $variant(x) => x,
                    }
                }
            }
        )+
    };
}

#[derive(Clone, Debug, PartialEq)]
pub enum Peer {
    User(types::PeerUser),
    Chat(types::PeerChat),
    Channel(types::PeerChannel),
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputPeer {
    Empty,
    PeerSelf,
    User(types::InputPeerUser),
    Chat(types::InputPeerChat),
    Channel(types::InputPeerChannel),
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputUser {
    Empty,
    UserSelf,
    User(types::InputUser),
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputChannel {
    Empty,
    Channel(types::InputChannel),
}

#[derive(Clone, Debug, PartialEq)]
pub enum User {
    Empty(types::UserEmpty),
    User(types::User),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Chat {
    Empty(types::ChatEmpty),
    Chat(types::Chat),
    Forbidden(types::ChatForbidden),
    Channel(types::Channel),
    ChannelForbidden(types::ChannelForbidden),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChatAdminRights {
    Rights(types::ChatAdminRights),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChatBannedRights {
    Rights(types::ChatBannedRights),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChatParticipant {
    Participant(types::ChatParticipant),
    Creator(types::ChatParticipantCreator),
    Admin(types::ChatParticipantAdmin),
    /// A constructor not present in this layer, identified by its constructor ID.
    Unknown(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChatParticipants {
    Forbidden(types::ChatParticipantsForbidden),
    Participants(types::ChatParticipants),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChannelParticipant {
    Participant(types::ChannelParticipant),
    ParticipantSelf(types::ChannelParticipantSelf),
    Creator(types::ChannelParticipantCreator),
    Admin(types::ChannelParticipantAdmin),
    Banned(types::ChannelParticipantBanned),
    Left(types::ChannelParticipantLeft),
    /// A constructor not present in this layer, identified by its constructor ID.
    Unknown(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChannelParticipantsFilter {
    ChannelParticipantsRecent,
    ChannelParticipantsAdmins,
    ChannelParticipantsKicked(types::ChannelParticipantsKicked),
    ChannelParticipantsBots,
    ChannelParticipantsBanned(types::ChannelParticipantsBanned),
    ChannelParticipantsSearch(types::ChannelParticipantsSearch),
    ChannelParticipantsContacts(types::ChannelParticipantsContacts),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChatFull {
    Full(types::ChatFull),
    ChannelFull(types::ChannelFull),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Photo {
    Empty(types::PhotoEmpty),
    Photo(types::Photo),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PhotoSize {
    Empty(types::PhotoSizeEmpty),
    Size(types::PhotoSize),
    Progressive(types::PhotoSizeProgressive),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Empty(types::MessageEmpty),
    Message(types::Message),
    Service(types::MessageService),
}

#[derive(Clone, Debug, PartialEq)]
pub enum MessageFwdHeader {
    Header(types::MessageFwdHeader),
}

#[derive(Clone, Debug, PartialEq)]
pub enum MessageMedia {
    Empty,
    Photo(types::MessageMediaPhoto),
    Unsupported,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MessageAction {
    Empty,
    ChatCreate,
    ChatEditTitle(types::MessageActionChatEditTitle),
    ChatEditPhoto(types::MessageActionChatEditPhoto),
    ChatDeletePhoto,
    ChatAddUser(types::MessageActionChatAddUser),
    ChatDeleteUser(types::MessageActionChatDeleteUser),
    PinMessage,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MessagesFilter {
    InputMessagesFilterEmpty,
    InputMessagesFilterPhotos,
    InputMessagesFilterChatPhotos,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Update {
    NewMessage(types::UpdateNewMessage),
    MessageId(types::UpdateMessageId),
    ReadHistoryOutbox(types::UpdateReadHistoryOutbox),
    NewChannelMessage(types::UpdateNewChannelMessage),
    ReadChannelOutbox(types::UpdateReadChannelOutbox),
    NewScheduledMessage(types::UpdateNewScheduledMessage),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Updates {
    TooLong,
    UpdateShort(types::UpdateShort),
    Combined(types::UpdatesCombined),
    Updates(types::Updates),
}

pub mod messages {
    use crate::types;

    #[derive(Clone, Debug, PartialEq)]
    pub enum ChatFull {
        Full(types::messages::ChatFull),
    }

    #[derive(Clone, Debug, PartialEq)]
    pub enum Messages {
        Messages(types::messages::Messages),
        Slice(types::messages::MessagesSlice),
        ChannelMessages(types::messages::ChannelMessages),
        NotModified(types::messages::MessagesNotModified),
    }

    impl_from_type! {
        ChatFull => ChatFull::Full: types::messages::ChatFull,
        Messages => Messages::Messages: types::messages::Messages,
        Messages => Messages::Slice: types::messages::MessagesSlice,
        Messages => Messages::ChannelMessages: types::messages::ChannelMessages,
        Messages => Messages::NotModified: types::messages::MessagesNotModified,
    }

    impl_from_enum! {
        ChatFull => ChatFull::Full: types::messages::ChatFull,
    }
}

pub mod photos {
    use crate::types;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Photos {
        Photos(types::photos::Photos),
        Slice(types::photos::PhotosSlice),
    }

    impl_from_type! {
        Photos => Photos::Photos: types::photos::Photos,
        Photos => Photos::Slice: types::photos::PhotosSlice,
    }
}

pub mod channels {
    use crate::types;

    #[derive(Clone, Debug, PartialEq)]
    pub enum ChannelParticipants {
        Participants(types::channels::ChannelParticipants),
        NotModified,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub enum ChannelParticipant {
        Participant(types::channels::ChannelParticipant),
    }

    impl_from_type! {
        ChannelParticipants => ChannelParticipants::Participants: types::channels::ChannelParticipants,
        ChannelParticipant => ChannelParticipant::Participant: types::channels::ChannelParticipant,
    }

    impl_from_enum! {
        ChannelParticipant => ChannelParticipant::Participant: types::channels::ChannelParticipant,
    }
}

impl_from_type! {
    Peer => Peer::User: types::PeerUser,
    Peer => Peer::Chat: types::PeerChat,
    Peer => Peer::Channel: types::PeerChannel,
    InputPeer => InputPeer::User: types::InputPeerUser,
    InputPeer => InputPeer::Chat: types::InputPeerChat,
    InputPeer => InputPeer::Channel: types::InputPeerChannel,
    InputUser => InputUser::User: types::InputUser,
    InputChannel => InputChannel::Channel: types::InputChannel,
    User => User::Empty: types::UserEmpty,
    User => User::User: types::User,
    Chat => Chat::Empty: types::ChatEmpty,
    Chat => Chat::Chat: types::Chat,
    Chat => Chat::Forbidden: types::ChatForbidden,
    Chat => Chat::Channel: types::Channel,
    Chat => Chat::ChannelForbidden: types::ChannelForbidden,
    ChatAdminRights => ChatAdminRights::Rights: types::ChatAdminRights,
    ChatBannedRights => ChatBannedRights::Rights: types::ChatBannedRights,
    ChatParticipant => ChatParticipant::Participant: types::ChatParticipant,
    ChatParticipant => ChatParticipant::Creator: types::ChatParticipantCreator,
    ChatParticipant => ChatParticipant::Admin: types::ChatParticipantAdmin,
    ChatParticipants => ChatParticipants::Forbidden: types::ChatParticipantsForbidden,
    ChatParticipants => ChatParticipants::Participants: types::ChatParticipants,
    ChannelParticipant => ChannelParticipant::Participant: types::ChannelParticipant,
    ChannelParticipant => ChannelParticipant::ParticipantSelf: types::ChannelParticipantSelf,
    ChannelParticipant => ChannelParticipant::Creator: types::ChannelParticipantCreator,
    ChannelParticipant => ChannelParticipant::Admin: types::ChannelParticipantAdmin,
    ChannelParticipant => ChannelParticipant::Banned: types::ChannelParticipantBanned,
    ChannelParticipant => ChannelParticipant::Left: types::ChannelParticipantLeft,
    ChatFull => ChatFull::Full: types::ChatFull,
    ChatFull => ChatFull::ChannelFull: types::ChannelFull,
    Photo => Photo::Empty: types::PhotoEmpty,
    Photo => Photo::Photo: types::Photo,
    PhotoSize => PhotoSize::Empty: types::PhotoSizeEmpty,
    PhotoSize => PhotoSize::Size: types::PhotoSize,
    PhotoSize => PhotoSize::Progressive: types::PhotoSizeProgressive,
    Message => Message::Empty: types::MessageEmpty,
    Message => Message::Message: types::Message,
    Message => Message::Service: types::MessageService,
    MessageFwdHeader => MessageFwdHeader::Header: types::MessageFwdHeader,
    MessageMedia => MessageMedia::Photo: types::MessageMediaPhoto,
    MessageAction => MessageAction::ChatEditTitle: types::MessageActionChatEditTitle,
    MessageAction => MessageAction::ChatEditPhoto: types::MessageActionChatEditPhoto,
    MessageAction => MessageAction::ChatAddUser: types::MessageActionChatAddUser,
    MessageAction => MessageAction::ChatDeleteUser: types::MessageActionChatDeleteUser,
    Update => Update::NewMessage: types::UpdateNewMessage,
    Update => Update::MessageId: types::UpdateMessageId,
    Update => Update::ReadHistoryOutbox: types::UpdateReadHistoryOutbox,
    Update => Update::NewChannelMessage: types::UpdateNewChannelMessage,
    Update => Update::ReadChannelOutbox: types::UpdateReadChannelOutbox,
    Update => Update::NewScheduledMessage: types::UpdateNewScheduledMessage,
    Updates => Updates::UpdateShort: types::UpdateShort,
    Updates => Updates::Combined: types::UpdatesCombined,
    Updates => Updates::Updates: types::Updates,
}

impl_from_enum! {
    ChatAdminRights => ChatAdminRights::Rights: types::ChatAdminRights,
    ChatBannedRights => ChatBannedRights::Rights: types::ChatBannedRights,
    MessageFwdHeader => MessageFwdHeader::Header: types::MessageFwdHeader,
}

impl Chat {
    /// Bare identifier of the chat or channel, regardless of the constructor.
    pub fn id(&self) -> i64 {
        match self {
            Self::Empty(chat) => chat.id,
            Self::Chat(chat) => chat.id,
            Self::Forbidden(chat) => chat.id,
            Self::Channel(channel) => channel.id,
            Self::ChannelForbidden(channel) => channel.id,
        }
    }
}

impl User {
    /// Bare identifier of the user, regardless of the constructor.
    pub fn id(&self) -> i64 {
        match self {
            Self::Empty(user) => user.id,
            Self::User(user) => user.id,
        }
    }
}

impl Photo {
    /// Identifier of the photo, regardless of the constructor.
    pub fn id(&self) -> i64 {
        match self {
            Self::Empty(photo) => photo.id,
            Self::Photo(photo) => photo.id,
        }
    }
}
