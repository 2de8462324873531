// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::peer::{PeerId, PeerRef};

/// The ways in which a caller may point at a user, group or channel before it is resolved.
///
/// Strings are interpreted the way people type them. Negative numbers can only be
/// Bot API Dialog IDs of groups and channels, so they become [`PeerIdentifier::Id`],
/// while other digit strings are phone numbers:
///
/// ```
/// use telegrip_session::types::PeerIdentifier;
///
/// assert_eq!(PeerIdentifier::from("me"), PeerIdentifier::SelfUser);
/// assert_eq!(PeerIdentifier::from("@Durov"), PeerIdentifier::Username("durov".into()));
/// assert_eq!(PeerIdentifier::from("+34 600 000 000"), PeerIdentifier::PhoneNumber("34600000000".into()));
/// assert_eq!(PeerIdentifier::from("-1001234567890"), PeerIdentifier::Id(-1001234567890));
/// assert_eq!(PeerIdentifier::from(-1001234567890_i64), PeerIdentifier::Id(-1001234567890));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PeerIdentifier {
    /// The logged-in account ("Saved Messages" when used as a chat).
    SelfUser,
    /// A Bot API Dialog ID: positive for users, negative for basic groups,
    /// and prefixed with `-100` for channels.
    Id(i64),
    /// A public username, without the leading `@` and in lowercase.
    Username(String),
    /// A phone number of someone in the account's contacts, digits only.
    PhoneNumber(String),
    /// A peer that has already been resolved.
    Ref(PeerRef),
}

impl PeerIdentifier {
    /// The already-known reference, if resolution can be skipped.
    pub fn known_ref(&self) -> Option<PeerRef> {
        match self {
            Self::Ref(peer) => Some(*peer),
            Self::SelfUser => Some(PeerRef::self_user()),
            _ => None,
        }
    }

    /// The peer identity, if it can be known without resolving.
    pub fn peer_id(&self) -> Option<PeerId> {
        match self {
            Self::SelfUser => Some(PeerId::self_user()),
            Self::Id(id) => PeerId::from_bot_api_dialog_id(*id),
            Self::Ref(peer) => Some(peer.id),
            Self::Username(_) | Self::PhoneNumber(_) => None,
        }
    }
}

impl From<i64> for PeerIdentifier {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<PeerRef> for PeerIdentifier {
    fn from(peer: PeerRef) -> Self {
        Self::Ref(peer)
    }
}

impl From<&str> for PeerIdentifier {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("me") || value.eq_ignore_ascii_case("self") {
            return Self::SelfUser;
        }
        if value.starts_with('-') {
            if let Ok(id) = value.parse::<i64>() {
                return Self::Id(id);
            }
        }

        let cleaned = value
            .chars()
            .filter(|c| !matches!(c, '@' | '+') && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        if !cleaned.is_empty() && cleaned.chars().all(|c| c.is_ascii_digit()) {
            Self::PhoneNumber(cleaned)
        } else {
            Self::Username(cleaned)
        }
    }
}

impl From<String> for PeerIdentifier {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&String> for PeerIdentifier {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for PeerIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfUser => f.write_str("self"),
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(username) => write!(f, "@{username}"),
            Self::PhoneNumber(phone) => write!(f, "+{phone}"),
            Self::Ref(peer) => write!(f, "{}", peer.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_sentinels() {
        assert_eq!(PeerIdentifier::from("self"), PeerIdentifier::SelfUser);
        assert_eq!(PeerIdentifier::from(" ME "), PeerIdentifier::SelfUser);
    }

    #[test]
    fn usernames_are_normalized() {
        assert_eq!(
            PeerIdentifier::from("@Telegram"),
            PeerIdentifier::Username("telegram".into())
        );
        assert_eq!(
            PeerIdentifier::from("some_bot"),
            PeerIdentifier::Username("some_bot".into())
        );
    }

    #[test]
    fn digit_strings_are_phone_numbers() {
        assert_eq!(
            PeerIdentifier::from("+1 555 0100"),
            PeerIdentifier::PhoneNumber("15550100".into())
        );
        assert_eq!(
            PeerIdentifier::from("15550100"),
            PeerIdentifier::PhoneNumber("15550100".into())
        );
    }

    #[test]
    fn negative_numbers_are_dialog_ids() {
        assert_eq!(
            PeerIdentifier::from("-1001234567890"),
            PeerIdentifier::Id(-1001234567890)
        );
        assert_eq!(PeerIdentifier::from(" -42 "), PeerIdentifier::Id(-42));
        assert_eq!(
            PeerIdentifier::from("-42").peer_id(),
            Some(PeerId::chat(42))
        );
        assert_eq!(
            PeerIdentifier::from("-abc"),
            PeerIdentifier::Username("-abc".into())
        );
    }

    #[test]
    fn known_ids_skip_resolution() {
        assert_eq!(
            PeerIdentifier::from(-1000000000042_i64).peer_id(),
            Some(PeerId::channel(42))
        );
        assert_eq!(PeerIdentifier::from(42_i64).known_ref(), None);
        assert_eq!(
            PeerIdentifier::SelfUser.known_ref(),
            Some(PeerRef::self_user())
        );
    }
}
