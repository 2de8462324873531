// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods related to sending messages.

use chrono::{DateTime, Utc};
use log::trace;
use telegrip_gateway::{Gateway, InvocationError, ReadError};
use telegrip_session::types::PeerIdentifier;
use telegrip_tl_types as tl;

use super::Client;
use crate::message::Message;
use crate::peer::PeerMap;
use crate::utils;

/// Options applied to every message forwarded by [`Client::forward_messages`].
///
/// Every option is unset by default, which leaves the corresponding flag out of the request.
///
/// # Examples
///
/// ```
/// use telegrip_client::ForwardOptions;
///
/// let options = ForwardOptions::new()
///     .disable_notification(true)
///     .protect_content(true);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForwardOptions {
    message_thread_id: Option<i32>,
    disable_notification: bool,
    schedule_date: Option<DateTime<Utc>>,
    protect_content: bool,
    drop_author: bool,
    drop_media_captions: bool,
}

impl ForwardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward into the given topic (or thread) of the destination, identified by the message
    /// that started it.
    pub fn message_thread_id(mut self, message_thread_id: i32) -> Self {
        self.message_thread_id = Some(message_thread_id);
        self
    }

    /// Whether the forwarded messages should notify people or not.
    ///
    /// Defaults to `false`, which means it will notify them. Set it to `true` to alter this
    /// behaviour.
    pub fn disable_notification(mut self, disable_notification: bool) -> Self {
        self.disable_notification = disable_notification;
        self
    }

    /// Schedule the messages to be sent at a later date instead of right away.
    pub fn schedule_date(mut self, schedule_date: DateTime<Utc>) -> Self {
        self.schedule_date = Some(schedule_date);
        self
    }

    /// Prevent the forwarded copies from being forwarded further or saved.
    pub fn protect_content(mut self, protect_content: bool) -> Self {
        self.protect_content = protect_content;
        self
    }

    /// Forward the messages without the "forwarded from" header.
    pub fn drop_author(mut self, drop_author: bool) -> Self {
        self.drop_author = drop_author;
        self
    }

    /// Strip the captions of forwarded media. Implies [`Self::drop_author`] on Telegram's side.
    pub fn drop_media_captions(mut self, drop_media_captions: bool) -> Self {
        self.drop_media_captions = drop_media_captions;
        self
    }
}

/// Extract the messages created by a request, in the order Telegram listed them.
///
/// Only full update containers side-load the users and chats the messages refer to, so the
/// short forms produce no messages at all.
fn new_messages(updates: tl::enums::Updates) -> Result<Vec<Message>, ReadError> {
    use tl::enums::{Update, Updates};

    let (updates, users, chats) = match updates {
        Updates::Updates(updates) => (updates.updates, updates.users, updates.chats),
        Updates::Combined(updates) => (updates.updates, updates.users, updates.chats),
        Updates::TooLong | Updates::UpdateShort(_) => return Ok(Vec::new()),
    };

    let peers = PeerMap::new(users, chats);
    let mut messages = Vec::new();
    for update in updates {
        let message = match update {
            Update::NewMessage(update) => update.message,
            Update::NewChannelMessage(update) => update.message,
            Update::NewScheduledMessage(update) => update.message,
            Update::MessageId(_) | Update::ReadHistoryOutbox(_) | Update::ReadChannelOutbox(_) => {
                continue;
            }
        };

        if let Some(message) = Message::from_raw(&peers, message)? {
            messages.push(message);
        }
    }

    Ok(messages)
}

/// Method implementations related to sending messages.
impl<G: Gateway> Client<G> {
    /// Forwards up to 100 messages from `source` into `destination`.
    ///
    /// For consistency with other methods, the peer upon which this request acts comes first
    /// (destination), and then the source peer.
    ///
    /// Returns the new forwarded messages in the order Telegram reported them, which is not
    /// necessarily the order of `message_ids`. Messages that could not be forwarded (for
    /// example, because they were deleted) are simply missing from the result.
    ///
    /// See also: [`Self::forward_message`].
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f<G: telegrip_client::Gateway>(client: telegrip_client::Client<G>) -> Result<(), Box<dyn std::error::Error>> {
    /// use telegrip_client::ForwardOptions;
    ///
    /// let message_ids = [123, 456, 789];
    ///
    /// let messages = client
    ///     .forward_messages("me", "@source", &message_ids, ForwardOptions::new())
    ///     .await?;
    /// println!("Forwarded {} out of {} messages!", messages.len(), message_ids.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn forward_messages<D: Into<PeerIdentifier>, S: Into<PeerIdentifier>>(
        &self,
        destination: D,
        source: S,
        message_ids: &[i32],
        options: ForwardOptions,
    ) -> Result<Vec<Message>, InvocationError> {
        let destination = self.resolve_peer(destination).await?;
        let source = self.resolve_peer(source).await?;

        let request = tl::functions::messages::ForwardMessages {
            silent: options.disable_notification,
            background: false,
            with_my_score: false,
            drop_author: options.drop_author,
            drop_media_captions: options.drop_media_captions,
            noforwards: options.protect_content,
            from_peer: source.into(),
            id: message_ids.to_vec(),
            random_id: utils::generate_random_ids(message_ids.len()),
            to_peer: destination.into(),
            top_msg_id: options.message_thread_id,
            schedule_date: options.schedule_date.map(utils::timestamp),
            send_as: None,
        };

        let messages = new_messages(self.invoke(&request).await?)?;
        trace!(
            "forwarded {} messages into {}, {} came back",
            message_ids.len(),
            destination.id,
            messages.len()
        );
        Ok(messages)
    }

    /// Forwards a single message from `source` into `destination`.
    ///
    /// This is [`Self::forward_messages`] with a single message, returning the forwarded copy
    /// directly. It is `None` if Telegram did not report a new message.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f<G: telegrip_client::Gateway>(client: telegrip_client::Client<G>) -> Result<(), Box<dyn std::error::Error>> {
    /// use telegrip_client::ForwardOptions;
    ///
    /// if let Some(copy) = client.forward_message("me", "@source", 123, ForwardOptions::new()).await? {
    ///     println!("The copy has ID {}", copy.id());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn forward_message<D: Into<PeerIdentifier>, S: Into<PeerIdentifier>>(
        &self,
        destination: D,
        source: S,
        message_id: i32,
        options: ForwardOptions,
    ) -> Result<Option<Message>, InvocationError> {
        Ok(self
            .forward_messages(destination, source, &[message_id], options)
            .await?
            .into_iter()
            .next())
    }
}
