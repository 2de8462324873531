// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chrono::{DateTime, Utc};
use telegrip_gateway::ReadError;
use telegrip_tl_types as tl;

use crate::media::Photo;
use crate::peer::{Peer, PeerMap};
use crate::utils;

/// Represents a Telegram message, which includes text messages, messages with media, and service
/// messages.
///
/// This message should be treated as a snapshot in time, that is, if the message is edited while
/// using this object, those changes won't alter this structure.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub raw: tl::enums::Message,
    chat: Peer,
    sender: Option<Peer>,
}

impl Message {
    /// Build the message, resolving the chat it belongs to and its sender with `peers`.
    ///
    /// Returns `Ok(None)` for empty messages, which carry no content and may not even have a chat.
    pub fn from_raw(
        peers: &PeerMap,
        message: tl::enums::Message,
    ) -> Result<Option<Self>, ReadError> {
        let (peer_id, from_id, out) = match &message {
            tl::enums::Message::Empty(_) => return Ok(None),
            tl::enums::Message::Message(m) => (&m.peer_id, m.from_id.as_ref(), m.out),
            tl::enums::Message::Service(m) => (&m.peer_id, m.from_id.as_ref(), m.out),
        };

        let chat = peers.peer(peer_id)?;
        let sender = match from_id {
            Some(from_id) => Some(peers.peer(from_id)?),
            // Private conversations and broadcast posts leave the sender implicit.
            None => match &chat {
                Peer::User(_) if !out => Some(chat.clone()),
                Peer::Channel(_) => Some(chat.clone()),
                _ => None,
            },
        };

        Ok(Some(Self {
            raw: message,
            chat,
            sender,
        }))
    }

    /// The ID of this message.
    ///
    /// Message identifiers are counters that start at 1 and grow by 1 for each message produced.
    /// Every channel has its own unique counter. Private chats and small groups share the counter
    /// of the logged-in account.
    pub fn id(&self) -> i32 {
        match &self.raw {
            tl::enums::Message::Empty(message) => message.id,
            tl::enums::Message::Message(message) => message.id,
            tl::enums::Message::Service(message) => message.id,
        }
    }

    /// The date when this message was produced.
    pub fn date(&self) -> DateTime<Utc> {
        utils::date(match &self.raw {
            tl::enums::Message::Empty(_) => 0,
            tl::enums::Message::Message(message) => message.date,
            tl::enums::Message::Service(message) => message.date,
        })
    }

    /// The text of the message. Service messages have no text, so this is empty for them.
    pub fn text(&self) -> &str {
        match &self.raw {
            tl::enums::Message::Message(message) => message.message.as_str(),
            tl::enums::Message::Empty(_) | tl::enums::Message::Service(_) => "",
        }
    }

    /// The chat where this message was sent to.
    pub fn chat(&self) -> &Peer {
        &self.chat
    }

    /// The user or channel that sent this message, if known.
    ///
    /// Outgoing messages in private conversations have no explicit sender, so this is `None`.
    pub fn sender(&self) -> Option<&Peer> {
        self.sender.as_ref()
    }

    /// Whether the message is outgoing (i.e. you sent this message to some other chat) or
    /// incoming (i.e. someone else sent it to you or the chat).
    pub fn outgoing(&self) -> bool {
        match &self.raw {
            tl::enums::Message::Empty(_) => false,
            tl::enums::Message::Message(message) => message.out,
            tl::enums::Message::Service(message) => message.out,
        }
    }

    /// Whether the message was sent without a notification.
    pub fn silent(&self) -> bool {
        match &self.raw {
            tl::enums::Message::Empty(_) => false,
            tl::enums::Message::Message(message) => message.silent,
            tl::enums::Message::Service(message) => message.silent,
        }
    }

    /// Whether this message was sent by a previously-scheduled message.
    pub fn from_scheduled(&self) -> bool {
        match &self.raw {
            tl::enums::Message::Message(message) => message.from_scheduled,
            _ => false,
        }
    }

    /// Whether the message can be saved or forwarded further.
    pub fn noforwards(&self) -> bool {
        match &self.raw {
            tl::enums::Message::Message(message) => message.noforwards,
            _ => false,
        }
    }

    pub fn forward_header(&self) -> Option<tl::types::MessageFwdHeader> {
        match &self.raw {
            tl::enums::Message::Message(message) => message.fwd_from.clone().map(Into::into),
            _ => None,
        }
    }

    /// When the original message was sent, if this message is a forward.
    pub fn forward_date(&self) -> Option<DateTime<Utc>> {
        self.forward_header().map(|header| utils::date(header.date))
    }

    /// The photo attached to this message, if any.
    pub fn photo(&self) -> Option<Photo> {
        match &self.raw {
            tl::enums::Message::Message(tl::types::Message {
                media: Some(tl::enums::MessageMedia::Photo(media)),
                ..
            }) => media.photo.clone().and_then(Photo::from_raw),
            _ => None,
        }
    }

    /// The action of a service message.
    pub fn action(&self) -> Option<&tl::enums::MessageAction> {
        match &self.raw {
            tl::enums::Message::Service(message) => Some(&message.action),
            _ => None,
        }
    }

    /// The new photo of the chat, if this is the service message announcing it.
    pub fn new_chat_photo(&self) -> Option<Photo> {
        raw_new_chat_photo(&self.raw)
    }
}

/// Photo set by a `messageActionChatEditPhoto` service message.
pub(crate) fn raw_new_chat_photo(message: &tl::enums::Message) -> Option<Photo> {
    match message {
        tl::enums::Message::Service(tl::types::MessageService {
            action: tl::enums::MessageAction::ChatEditPhoto(action),
            ..
        }) => Photo::from_raw(action.photo.clone()),
        _ => None,
    }
}
