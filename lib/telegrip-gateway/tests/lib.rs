// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use telegrip_gateway::{InvocationError, ReadError, RpcError};
use telegrip_session::types::PeerIdentifier;
use telegrip_tl_types as tl;

include!("../../includes/check_deps_documented.rs");

fn rpc(code: i32, message: &str) -> RpcError {
    RpcError::from(tl::types::RpcError {
        error_code: code,
        error_message: message.to_string(),
    })
}

#[test]
fn check_rpc_error_parsing() {
    assert_eq!(
        rpc(400, "CHAT_INVALID"),
        RpcError {
            code: 400,
            name: "CHAT_INVALID".into(),
            value: None,
        }
    );

    assert_eq!(
        rpc(420, "FLOOD_WAIT_31"),
        RpcError {
            code: 420,
            name: "FLOOD_WAIT".into(),
            value: Some(31),
        }
    );

    assert_eq!(
        rpc(500, "INTERDC_2_CALL_ERROR"),
        RpcError {
            code: 500,
            name: "INTERDC_CALL_ERROR".into(),
            value: Some(2),
        }
    );
}

#[test]
fn only_whole_numeric_segments_are_values() {
    let error = rpc(401, "2FA_CONFIRM_WAIT_3600");
    assert_eq!(error.name, "2FA_CONFIRM_WAIT");
    assert_eq!(error.value, Some(3600));

    // The first number wins; later ones stay in the name.
    let error = rpc(500, "INTERDC_2_CALL_RICH_3_ERROR");
    assert_eq!(error.name, "INTERDC_CALL_RICH_3_ERROR");
    assert_eq!(error.value, Some(2));
}

#[test]
fn rpc_error_wildcards() {
    let error = InvocationError::from(rpc(400, "CHANNEL_PRIVATE"));
    assert!(error.is("CHANNEL_PRIVATE"));
    assert!(error.is("CHANNEL_*"));
    assert!(error.is("*_PRIVATE"));
    assert!(!error.is("CHAT_*"));

    assert!(!InvocationError::Dropped.is("CHANNEL_*"));
}

#[test]
fn errors_display_their_cause() {
    assert_eq!(
        rpc(400, "MESSAGE_ID_INVALID").to_string(),
        "rpc error 400: MESSAGE_ID_INVALID"
    );
    assert_eq!(
        InvocationError::from(rpc(420, "FLOOD_WAIT_31")).to_string(),
        "request error: rpc error 420: FLOOD_WAIT (31)"
    );

    let error = InvocationError::Unresolved(PeerIdentifier::from("@nobody"));
    assert_eq!(error.to_string(), "request error: could not resolve @nobody");

    let error = InvocationError::from(ReadError::MissingUser(7));
    assert_eq!(
        error.to_string(),
        "request error: read error, user 7 missing from response"
    );
}
