// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use telegrip_session::types::{PeerId, PeerRef};
use telegrip_tl_types as tl;

/// A user.
///
/// Users include your contacts, members of a group, bot accounts created by [@BotFather], or
/// anyone with a Telegram account.
///
/// [@BotFather]: https://t.me/BotFather
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub raw: tl::types::User,
}

impl User {
    pub(crate) fn from_raw(user: tl::enums::User) -> Self {
        Self {
            raw: match user {
                tl::enums::User::Empty(empty) => tl::types::User {
                    id: empty.id,
                    ..Default::default()
                },
                tl::enums::User::User(user) => user,
            },
        }
    }

    /// Return the unique identifier for this user.
    pub fn id(&self) -> PeerId {
        PeerId::user(self.raw.id)
    }

    /// Convert the user to its reference, if Telegram sent enough information to use it in requests.
    pub fn to_ref(&self) -> Option<PeerRef> {
        if self.raw.min || (self.raw.access_hash.is_none() && !self.raw.is_self) {
            None
        } else {
            Some(PeerRef::from(&self.raw))
        }
    }

    /// Return the first name of this user.
    ///
    /// The name will be `None` if the account was deleted.
    pub fn first_name(&self) -> Option<&str> {
        self.raw.first_name.as_deref()
    }

    /// Return the last name of this user, if any.
    pub fn last_name(&self) -> Option<&str> {
        self.raw.last_name.as_deref()
    }

    /// Return the full name of this user.
    ///
    /// This is equal to the user's first name concatenated with the user's last name, if this
    /// is not empty. Otherwise, it equals the user's first name.
    pub fn full_name(&self) -> String {
        let first_name = self.first_name().unwrap_or_default();
        match self.last_name() {
            Some(last_name) if !last_name.is_empty() => format!("{first_name} {last_name}"),
            _ => first_name.to_string(),
        }
    }

    /// Return the public @username of this user, if any.
    ///
    /// The returned username does not contain the "@" prefix.
    pub fn username(&self) -> Option<&str> {
        self.raw.username.as_deref()
    }

    /// Return the phone number of this user, if they are not a bot and their privacy settings
    /// allow you to see it.
    pub fn phone(&self) -> Option<&str> {
        self.raw.phone.as_deref()
    }

    /// Does this user represent the account that's currently logged in?
    pub fn is_self(&self) -> bool {
        self.raw.is_self
    }

    pub fn is_contact(&self) -> bool {
        self.raw.contact
    }

    /// Has the account of this user been deleted?
    pub fn deleted(&self) -> bool {
        self.raw.deleted
    }

    /// Is the current user a bot?
    pub fn is_bot(&self) -> bool {
        self.raw.bot
    }

    /// Has the account of this user been verified?
    pub fn verified(&self) -> bool {
        self.raw.verified
    }

    /// Does this user have a Telegram Premium subscription?
    pub fn is_premium(&self) -> bool {
        self.raw.premium
    }

    /// Language code of the user, if known.
    pub fn lang_code(&self) -> Option<&str> {
        self.raw.lang_code.as_deref()
    }
}
