// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-memory gateway and raw fixtures shared by the integration tests.

#![allow(dead_code)]

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use telegrip_client::session::types::{PeerAuth, PeerId, PeerIdentifier, PeerRef};
use telegrip_client::tl::{self, RemoteCall};
use telegrip_client::{Client, ClientConfiguration, Gateway, InvocationError};

type Handler<R> =
    Arc<dyn Fn(&R) -> Result<<R as RemoteCall>::Return, InvocationError> + Send + Sync>;

/// Gateway answering every request with the handler registered for its type, and remembering
/// every request it was given.
#[derive(Default)]
pub struct MockGateway {
    handlers: Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
    requests: Mutex<Vec<Box<dyn Any + Send + Sync>>>,
    peers: Mutex<HashMap<PeerIdentifier, PeerRef>>,
}

impl MockGateway {
    pub fn new() -> Self {
        let _ = simple_logger::SimpleLogger::new()
            .with_level(log::LevelFilter::Trace)
            .init();

        Self::default()
    }

    /// Answer every request of type `R` with `handler`.
    pub fn on<R, F>(&self, handler: F)
    where
        R: RemoteCall,
        F: Fn(&R) -> Result<R::Return, InvocationError> + Send + Sync + 'static,
    {
        let handler: Handler<R> = Arc::new(handler);
        self.handlers
            .lock()
            .unwrap()
            .insert(TypeId::of::<R>(), Box::new(handler));
    }

    /// Make `identifier` resolve to `peer`.
    pub fn peer(&self, identifier: impl Into<PeerIdentifier>, peer: PeerRef) {
        self.peers.lock().unwrap().insert(identifier.into(), peer);
    }

    /// Every request of type `R` invoked so far, in order.
    pub fn requests<R: RemoteCall>(&self) -> Vec<R> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|request| request.downcast_ref::<R>())
            .cloned()
            .collect()
    }

    /// How many requests of any type were invoked so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn into_client(self) -> Client<Self> {
        Client::new(self)
    }

    pub fn into_client_with(self, configuration: ClientConfiguration) -> Client<Self> {
        Client::with_configuration(self, configuration)
    }
}

impl Gateway for MockGateway {
    fn invoke<R: RemoteCall>(
        &self,
        request: &R,
    ) -> impl Future<Output = Result<R::Return, InvocationError>> + Send {
        self.requests.lock().unwrap().push(Box::new(request.clone()));

        let handler = self
            .handlers
            .lock()
            .unwrap()
            .get(&TypeId::of::<R>())
            .and_then(|handler| handler.downcast_ref::<Handler<R>>())
            .cloned();

        let result = match handler {
            Some(handler) => handler(request),
            None => panic!("no response registered for {}", R::NAME),
        };
        async move { result }
    }

    fn resolve_peer(
        &self,
        peer: &PeerIdentifier,
    ) -> impl Future<Output = Result<PeerRef, InvocationError>> + Send {
        let result = self
            .peers
            .lock()
            .unwrap()
            .get(peer)
            .copied()
            .ok_or_else(|| InvocationError::Unresolved(peer.clone()));
        async move { result }
    }
}

pub fn user_ref(id: i64) -> PeerRef {
    PeerRef {
        id: PeerId::user(id),
        auth: PeerAuth::from_hash(id * 10),
    }
}

pub fn chat_ref(id: i64) -> PeerRef {
    PeerRef {
        id: PeerId::chat(id),
        auth: PeerAuth::default(),
    }
}

pub fn channel_ref(id: i64) -> PeerRef {
    PeerRef {
        id: PeerId::channel(id),
        auth: PeerAuth::from_hash(id * 10),
    }
}

pub fn user(id: i64) -> tl::enums::User {
    tl::types::User {
        id,
        access_hash: Some(id * 10),
        first_name: Some(format!("User {id}")),
        ..Default::default()
    }
    .into()
}

pub fn self_user(id: i64) -> tl::enums::User {
    tl::types::User {
        is_self: true,
        id,
        access_hash: Some(id * 10),
        first_name: Some("Me".into()),
        ..Default::default()
    }
    .into()
}

pub fn channel(id: i64, broadcast: bool) -> tl::enums::Chat {
    tl::types::Channel {
        broadcast,
        megagroup: !broadcast,
        id,
        access_hash: Some(id * 10),
        title: format!("Channel {id}"),
        ..Default::default()
    }
    .into()
}

pub fn chat(id: i64) -> tl::enums::Chat {
    tl::types::Chat {
        id,
        title: format!("Group {id}"),
        ..Default::default()
    }
    .into()
}

pub fn photo(id: i64) -> tl::enums::Photo {
    tl::types::Photo {
        has_stickers: false,
        id,
        access_hash: id * 10,
        file_reference: vec![id as u8],
        date: 1_600_000_000 + id as i32,
        sizes: vec![
            tl::types::PhotoSize {
                r#type: "m".into(),
                w: 320,
                h: 320,
                size: 1_000,
            }
            .into(),
        ],
        dc_id: 2,
    }
    .into()
}

pub fn text_message(id: i32, peer_id: tl::enums::Peer, out: bool) -> tl::enums::Message {
    tl::types::Message {
        out,
        mentioned: false,
        media_unread: false,
        silent: false,
        post: false,
        from_scheduled: false,
        legacy: false,
        edit_hide: false,
        pinned: false,
        noforwards: false,
        id,
        from_id: None,
        peer_id,
        fwd_from: None,
        via_bot_id: None,
        date: 1_700_000_000,
        message: format!("message {id}"),
        media: None,
        views: None,
        forwards: None,
        edit_date: None,
        post_author: None,
        grouped_id: None,
    }
    .into()
}

pub fn chat_photo_message(
    id: i32,
    peer_id: tl::enums::Peer,
    photo: tl::enums::Photo,
) -> tl::enums::Message {
    tl::types::MessageService {
        out: false,
        mentioned: false,
        media_unread: false,
        silent: false,
        post: true,
        legacy: false,
        id,
        from_id: None,
        peer_id,
        date: 1_700_000_000,
        action: tl::types::MessageActionChatEditPhoto { photo }.into(),
    }
    .into()
}

pub fn peer_user(user_id: i64) -> tl::enums::Peer {
    tl::types::PeerUser { user_id }.into()
}

pub fn peer_chat(chat_id: i64) -> tl::enums::Peer {
    tl::types::PeerChat { chat_id }.into()
}

pub fn peer_channel(channel_id: i64) -> tl::enums::Peer {
    tl::types::PeerChannel { channel_id }.into()
}
