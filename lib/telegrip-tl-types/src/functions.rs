// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Requests, grouped by their namespace.

pub mod messages {
    use crate::{RemoteCall, enums};

    #[derive(Clone, Debug, PartialEq)]
    pub struct ForwardMessages {
        pub silent: bool,
        pub background: bool,
        pub with_my_score: bool,
        pub drop_author: bool,
        pub drop_media_captions: bool,
        pub noforwards: bool,
        pub from_peer: enums::InputPeer,
        pub id: Vec<i32>,
        pub random_id: Vec<i64>,
        pub to_peer: enums::InputPeer,
        pub top_msg_id: Option<i32>,
        pub schedule_date: Option<i32>,
        pub send_as: Option<enums::InputPeer>,
    }

    impl RemoteCall for ForwardMessages {
        type Return = enums::Updates;
        const NAME: &'static str = "messages.forwardMessages";
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct GetFullChat {
        pub chat_id: i64,
    }

    impl RemoteCall for GetFullChat {
        type Return = enums::messages::ChatFull;
        const NAME: &'static str = "messages.getFullChat";
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct Search {
        pub peer: enums::InputPeer,
        pub q: String,
        pub from_id: Option<enums::InputPeer>,
        pub top_msg_id: Option<i32>,
        pub filter: enums::MessagesFilter,
        pub min_date: i32,
        pub max_date: i32,
        pub offset_id: i32,
        pub add_offset: i32,
        pub limit: i32,
        pub max_id: i32,
        pub min_id: i32,
        pub hash: i64,
    }

    impl RemoteCall for Search {
        type Return = enums::messages::Messages;
        const NAME: &'static str = "messages.search";
    }
}

pub mod channels {
    use crate::{RemoteCall, enums};

    #[derive(Clone, Debug, PartialEq)]
    pub struct GetFullChannel {
        pub channel: enums::InputChannel,
    }

    impl RemoteCall for GetFullChannel {
        type Return = enums::messages::ChatFull;
        const NAME: &'static str = "channels.getFullChannel";
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct GetParticipants {
        pub channel: enums::InputChannel,
        pub filter: enums::ChannelParticipantsFilter,
        pub offset: i32,
        pub limit: i32,
        pub hash: i64,
    }

    impl RemoteCall for GetParticipants {
        type Return = enums::channels::ChannelParticipants;
        const NAME: &'static str = "channels.getParticipants";
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct GetParticipant {
        pub channel: enums::InputChannel,
        pub participant: enums::InputPeer,
    }

    impl RemoteCall for GetParticipant {
        type Return = enums::channels::ChannelParticipant;
        const NAME: &'static str = "channels.getParticipant";
    }
}

pub mod photos {
    use crate::{RemoteCall, enums};

    #[derive(Clone, Debug, PartialEq)]
    pub struct GetUserPhotos {
        pub user_id: enums::InputUser,
        pub offset: i32,
        pub max_id: i64,
        pub limit: i32,
    }

    impl RemoteCall for GetUserPhotos {
        type Return = enums::photos::Photos;
        const NAME: &'static str = "photos.getUserPhotos";
    }
}
