// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod common;

use common::*;
use futures_util::TryStreamExt;
use telegrip_client::media::Photo;
use telegrip_client::tl;
use telegrip_client::{ClientConfiguration, InvocationError, ReadError};

type GetFullChannel = tl::functions::channels::GetFullChannel;
type GetFullChat = tl::functions::messages::GetFullChat;
type GetUserPhotos = tl::functions::photos::GetUserPhotos;
type Search = tl::functions::messages::Search;

const USER: i64 = 10;
const CHANNEL: i64 = 30;
const GROUP: i64 = 40;

fn full_channel(chat_photo: tl::enums::Photo) -> tl::enums::messages::ChatFull {
    tl::types::messages::ChatFull {
        full_chat: tl::types::ChannelFull {
            can_view_participants: true,
            can_set_username: false,
            has_scheduled: false,
            id: CHANNEL,
            about: String::new(),
            participants_count: Some(3),
            admins_count: None,
            kicked_count: None,
            banned_count: None,
            chat_photo,
            pinned_msg_id: None,
            linked_chat_id: None,
        }
        .into(),
        chats: vec![channel(CHANNEL, true)],
        users: Vec::new(),
    }
    .into()
}

fn full_group(chat_photo: Option<tl::enums::Photo>) -> tl::enums::messages::ChatFull {
    tl::types::messages::ChatFull {
        full_chat: tl::types::ChatFull {
            can_set_username: false,
            has_scheduled: false,
            id: GROUP,
            about: String::new(),
            participants: tl::types::ChatParticipants {
                chat_id: GROUP,
                participants: Vec::new(),
                version: 1,
            }
            .into(),
            chat_photo,
            pinned_msg_id: None,
        }
        .into(),
        chats: vec![chat(GROUP)],
        users: Vec::new(),
    }
    .into()
}

/// Search results holding one photo change per id, plus an unrelated text message.
fn photo_changes(peer: tl::enums::Peer, ids: &[i64]) -> tl::enums::messages::Messages {
    let mut messages = vec![text_message(1_000, peer.clone(), false)];
    messages.extend(
        ids.iter()
            .enumerate()
            .map(|(i, &id)| chat_photo_message(100 - i as i32, peer.clone(), photo(id))),
    );

    tl::types::messages::ChannelMessages {
        inexact: false,
        pts: 1,
        count: messages.len() as i32,
        offset_id_offset: None,
        messages,
        chats: vec![channel(CHANNEL, true)],
        users: Vec::new(),
    }
    .into()
}

fn channel_gateway(current: i64, history: &'static [i64]) -> MockGateway {
    let gateway = MockGateway::new();
    gateway.peer("@chan", channel_ref(CHANNEL));
    gateway.on(move |_: &GetFullChannel| Ok(full_channel(photo(current))));
    gateway.on(move |_: &Search| Ok(photo_changes(peer_channel(CHANNEL), history)));
    gateway
}

/// A user with `count` photos, answering every page with a slice.
fn user_gateway(count: usize) -> MockGateway {
    let gateway = MockGateway::new();
    gateway.peer(USER, user_ref(USER));
    gateway.on(move |request: &GetUserPhotos| {
        let start = (request.offset as usize).min(count);
        let end = (start + request.limit as usize).min(count);
        Ok(tl::types::photos::PhotosSlice {
            count: count as i32,
            photos: (start..end).map(|i| photo(i as i64 + 1)).collect(),
            users: vec![user(USER)],
        }
        .into())
    });
    gateway
}

async fn collect_ids<G: telegrip_client::Gateway>(
    mut photos: telegrip_client::ProfilePhotoIter<G>,
) -> Vec<i64> {
    let mut ids = Vec::new();
    while let Some(photo) = photos.next().await.unwrap() {
        ids.push(photo.id());
    }
    ids
}

#[tokio::test]
async fn channel_current_photo_already_in_history() {
    let client = channel_gateway(1, &[1, 2, 3]).into_client();

    let photos = client.get_chat_photos("@chan", 0).await.unwrap();
    assert_eq!(collect_ids(photos).await, [1, 2, 3]);

    let search = client.gateway().requests::<Search>().remove(0);
    assert_eq!(search.peer, channel_ref(CHANNEL).into());
    assert_eq!(
        search.filter,
        tl::enums::MessagesFilter::InputMessagesFilterChatPhotos
    );
    assert_eq!(search.limit, 0);
    assert_eq!(client.gateway().requests::<GetFullChannel>().len(), 1);
}

#[tokio::test]
async fn channel_current_photo_missing_from_history() {
    let client = channel_gateway(1, &[2, 3]).into_client();

    let photos = client.get_chat_photos("@chan", 0).await.unwrap();
    assert_eq!(collect_ids(photos).await, [1, 2, 3]);
}

#[tokio::test]
async fn channel_without_history() {
    let client = channel_gateway(7, &[]).into_client();

    let photos = client.get_chat_photos("@chan", 0).await.unwrap();
    assert_eq!(collect_ids(photos).await, [7]);
}

#[tokio::test]
async fn channel_without_any_photo() {
    let gateway = MockGateway::new();
    gateway.peer("@chan", channel_ref(CHANNEL));
    gateway.on(|_: &GetFullChannel| {
        Ok(full_channel(tl::types::PhotoEmpty { id: 0 }.into()))
    });
    gateway.on(|_: &Search| {
        Ok(tl::types::messages::MessagesNotModified { count: 0 }.into())
    });
    let client = gateway.into_client();

    let mut photos = client.get_chat_photos("@chan", 0).await.unwrap();
    assert!(photos.next().await.unwrap().is_none());
    assert!(photos.next().await.unwrap().is_none());
    assert_eq!(client.gateway().request_count(), 2);
}

#[tokio::test]
async fn channel_photos_honour_the_limit() {
    let client = channel_gateway(1, &[2, 3, 4]).into_client();

    let photos = client.get_chat_photos("@chan", 2).await.unwrap();
    assert_eq!(collect_ids(photos).await, [1, 2]);
    assert_eq!(client.gateway().requests::<Search>()[0].limit, 2);
}

#[tokio::test]
async fn basic_group_photos() {
    let gateway = MockGateway::new();
    gateway.peer(-GROUP, chat_ref(GROUP));
    gateway.on(|request: &GetFullChat| {
        assert_eq!(request.chat_id, GROUP);
        Ok(full_group(Some(photo(5))))
    });
    gateway.on(|_: &Search| {
        Ok(tl::types::messages::Messages {
            messages: vec![chat_photo_message(2, peer_chat(GROUP), photo(6))],
            chats: vec![chat(GROUP)],
            users: Vec::new(),
        }
        .into())
    });
    let client = gateway.into_client();

    let photos = client.get_chat_photos(-GROUP, 0).await.unwrap();
    assert_eq!(collect_ids(photos).await, [5, 6]);
    assert_eq!(client.gateway().requests::<GetFullChannel>().len(), 0);
}

#[tokio::test]
async fn basic_group_served_a_channel_is_an_error() {
    let gateway = MockGateway::new();
    gateway.peer(-GROUP, chat_ref(GROUP));
    gateway.on(|_: &GetFullChat| Ok(full_channel(photo(1))));
    let client = gateway.into_client();

    let mut photos = client.get_chat_photos(-GROUP, 0).await.unwrap();
    let error = photos.next().await.unwrap_err();
    assert!(matches!(
        error,
        InvocationError::Read(ReadError::UnexpectedResponse(_))
    ));
}

#[tokio::test]
async fn user_photos_are_paged_until_exhausted() {
    let client = user_gateway(250).into_client();

    let photos = client.get_chat_photos(USER, 0).await.unwrap();
    let ids = collect_ids(photos).await;
    assert_eq!(ids.len(), 250);
    assert_eq!(ids.first(), Some(&1));
    assert_eq!(ids.last(), Some(&250));

    let requests = client.gateway().requests::<GetUserPhotos>();
    let pages = requests
        .iter()
        .map(|r| (r.offset, r.limit))
        .collect::<Vec<_>>();
    assert_eq!(pages, [(0, 100), (100, 100), (200, 100)]);
    assert_eq!(requests[0].user_id, tl::enums::InputUser::from(user_ref(USER)));
}

#[tokio::test]
async fn user_photos_ask_only_for_what_is_needed() {
    let client = user_gateway(1_000).into_client();

    let photos = client.get_chat_photos(USER, 250).await.unwrap();
    assert_eq!(collect_ids(photos).await.len(), 250);

    let pages = client
        .gateway()
        .requests::<GetUserPhotos>()
        .iter()
        .map(|r| (r.offset, r.limit))
        .collect::<Vec<_>>();
    assert_eq!(pages, [(0, 100), (100, 100), (200, 50)]);
}

#[tokio::test]
async fn user_photo_page_size_is_configurable() {
    let client = user_gateway(5).into_client_with(ClientConfiguration {
        max_photo_limit: 2,
        ..Default::default()
    });

    let photos = client.get_chat_photos(USER, 0).await.unwrap();
    assert_eq!(collect_ids(photos).await, [1, 2, 3, 4, 5]);
    assert_eq!(client.gateway().requests::<GetUserPhotos>().len(), 3);
}

#[tokio::test]
async fn empty_user_page_stops_paging() {
    let gateway = MockGateway::new();
    gateway.peer(USER, user_ref(USER));
    gateway.on(|_: &GetUserPhotos| {
        // Telegram claims more photos exist but sends none.
        Ok(tl::types::photos::PhotosSlice {
            count: 10,
            photos: Vec::new(),
            users: Vec::new(),
        }
        .into())
    });
    let client = gateway.into_client();

    let mut photos = client.get_chat_photos(USER, 0).await.unwrap();
    assert!(photos.next().await.unwrap().is_none());
    assert!(photos.next().await.unwrap().is_none());
    assert_eq!(client.gateway().request_count(), 1);
}

#[tokio::test]
async fn complete_user_photo_list_is_a_single_page() {
    let gateway = MockGateway::new();
    gateway.on(|_: &GetUserPhotos| {
        Ok(tl::types::photos::Photos {
            photos: vec![photo(1), tl::types::PhotoEmpty { id: 2 }.into(), photo(3)],
            users: Vec::new(),
        }
        .into())
    });
    let client = gateway.into_client();

    let photos = client.get_chat_photos("me", 0).await.unwrap();
    assert_eq!(collect_ids(photos).await, [1, 3]);

    let request = client.gateway().requests::<GetUserPhotos>().remove(0);
    assert_eq!(request.user_id, tl::enums::InputUser::UserSelf);
}

#[tokio::test]
async fn photos_as_a_stream() {
    let client = user_gateway(3).into_client();

    let photos = client
        .get_chat_photos(USER, 0)
        .await
        .unwrap()
        .into_stream()
        .try_collect::<Vec<Photo>>()
        .await
        .unwrap();

    assert_eq!(photos.iter().map(Photo::id).collect::<Vec<_>>(), [1, 2, 3]);
    assert!(photos[0].largest().is_some());
}
