// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use telegrip_session::types::{PeerAuth, PeerId, PeerKind, PeerRef};
use telegrip_tl_types as tl;

include!("../../includes/check_deps_documented.rs");

#[test]
fn response_peers_map_to_identities() {
    let peer = tl::enums::Peer::Channel(tl::types::PeerChannel { channel_id: 1234 });
    let id = PeerId::from(&peer);
    assert_eq!(id.kind(), PeerKind::Channel);
    assert_eq!(tl::enums::Peer::from(id), peer);
}

#[test]
fn self_users_resolve_to_the_sentinel() {
    let user = tl::types::User {
        is_self: true,
        id: 777,
        access_hash: Some(1),
        ..Default::default()
    };

    let peer = PeerRef::from(&user);
    assert_eq!(peer.id.kind(), PeerKind::UserSelf);
    assert_eq!(tl::enums::InputPeer::from(peer), tl::enums::InputPeer::PeerSelf);
}

#[test]
fn channels_keep_their_access_hash() {
    let chat = tl::enums::Chat::Channel(tl::types::Channel {
        id: 55,
        access_hash: Some(-9),
        broadcast: true,
        ..Default::default()
    });

    let peer = PeerRef::from(&chat);
    assert_eq!(peer.auth, PeerAuth::from_hash(-9));
    assert_eq!(
        tl::enums::InputPeer::from(peer),
        tl::enums::InputPeer::Channel(tl::types::InputPeerChannel {
            channel_id: 55,
            access_hash: -9,
        })
    );
}
