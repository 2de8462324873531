// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chrono::{DateTime, Utc};
use telegrip_tl_types as tl;

use crate::utils;

/// Actions a restricted member is still allowed to take.
///
/// Telegram describes restrictions negatively ("cannot send stickers"); every method here
/// answers the positive question instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatPermissions {
    pub raw: tl::types::ChatBannedRights,
}

/// Privileged actions an administrator (or the owner) is able to take.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatPrivileges {
    pub raw: tl::types::ChatAdminRights,
}

impl ChatPermissions {
    pub(crate) fn from_raw(rights: tl::enums::ChatBannedRights) -> Self {
        Self { raw: rights.into() }
    }

    pub fn can_view_messages(&self) -> bool {
        !self.raw.view_messages
    }

    pub fn can_send_messages(&self) -> bool {
        !self.raw.send_messages
    }

    /// Can send photos, videos, documents and other media.
    pub fn can_send_media_messages(&self) -> bool {
        !self.raw.send_media
    }

    /// Can send stickers, animations, games and use inline bots.
    pub fn can_send_other_messages(&self) -> bool {
        !(self.raw.send_stickers
            || self.raw.send_gifs
            || self.raw.send_games
            || self.raw.send_inline)
    }

    pub fn can_send_polls(&self) -> bool {
        !self.raw.send_polls
    }

    pub fn can_add_web_page_previews(&self) -> bool {
        !self.raw.embed_links
    }

    pub fn can_change_info(&self) -> bool {
        !self.raw.change_info
    }

    pub fn can_invite_users(&self) -> bool {
        !self.raw.invite_users
    }

    pub fn can_pin_messages(&self) -> bool {
        !self.raw.pin_messages
    }

    pub fn can_manage_topics(&self) -> bool {
        !self.raw.manage_topics
    }

    /// When the restrictions will be lifted, or `None` if they apply forever.
    pub fn until_date(&self) -> Option<DateTime<Utc>> {
        utils::date_or_never(self.raw.until_date)
    }
}

impl ChatPrivileges {
    pub(crate) fn from_raw(rights: tl::enums::ChatAdminRights) -> Self {
        Self { raw: rights.into() }
    }

    /// Can access the chat event log, statistics and members list, or ignore slow mode.
    pub fn can_manage_chat(&self) -> bool {
        self.raw.other
    }

    pub fn can_delete_messages(&self) -> bool {
        self.raw.delete_messages
    }

    pub fn can_manage_video_chats(&self) -> bool {
        self.raw.manage_call
    }

    /// Can ban, kick or restrict other members.
    pub fn can_restrict_members(&self) -> bool {
        self.raw.ban_users
    }

    /// Can add new administrators with a subset of their own privileges.
    pub fn can_promote_members(&self) -> bool {
        self.raw.add_admins
    }

    pub fn can_change_info(&self) -> bool {
        self.raw.change_info
    }

    /// Can post in the channel. Broadcast channels only.
    pub fn can_post_messages(&self) -> bool {
        self.raw.post_messages
    }

    /// Can edit messages of other users. Broadcast channels only.
    pub fn can_edit_messages(&self) -> bool {
        self.raw.edit_messages
    }

    pub fn can_invite_users(&self) -> bool {
        self.raw.invite_users
    }

    pub fn can_pin_messages(&self) -> bool {
        self.raw.pin_messages
    }

    pub fn can_manage_topics(&self) -> bool {
        self.raw.manage_topics
    }

    pub fn can_post_stories(&self) -> bool {
        self.raw.post_stories
    }

    pub fn can_edit_stories(&self) -> bool {
        self.raw.edit_stories
    }

    pub fn can_delete_stories(&self) -> bool {
        self.raw.delete_stories
    }

    /// Does the administrator post anonymously, on behalf of the chat?
    pub fn is_anonymous(&self) -> bool {
        self.raw.anonymous
    }
}
