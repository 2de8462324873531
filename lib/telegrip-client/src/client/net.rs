// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::Arc;

use log::debug;
use telegrip_gateway::{Gateway, InvocationError};
use telegrip_session::types::{PeerIdentifier, PeerRef};
use telegrip_tl_types as tl;

use super::{Client, ClientConfiguration, ClientInner};

/// Method implementations directly related with the gateway.
impl<G: Gateway> Client<G> {
    /// Creates a new client that will invoke all of its requests through `gateway`.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn f<G: telegrip_client::Gateway>(gateway: G) {
    /// use telegrip_client::Client;
    ///
    /// let client = Client::new(gateway);
    /// # }
    /// ```
    pub fn new(gateway: G) -> Self {
        Self::with_configuration(gateway, Default::default())
    }

    /// Like [`Self::new`] but with a custom [`ClientConfiguration`].
    pub fn with_configuration(gateway: G, configuration: ClientConfiguration) -> Self {
        Self(Arc::new(ClientInner {
            gateway,
            configuration,
        }))
    }

    /// The gateway used by this client.
    pub fn gateway(&self) -> &G {
        &self.0.gateway
    }

    pub fn configuration(&self) -> &ClientConfiguration {
        &self.0.configuration
    }

    /// Invoke a raw API call. This directly hands the request over to the gateway.
    ///
    /// Errors are returned exactly as the gateway reported them; the client never retries.
    ///
    /// <div class="stab unstable">
    ///
    /// **Warning**: this method is **not** part of the stability guarantees of semantic
    /// versioning. It **may** break during *minor* version changes (but not on patch version
    /// changes). Use with care.
    ///
    /// </div>
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f<G: telegrip_client::Gateway>(client: telegrip_client::Client<G>) -> Result<(), Box<dyn std::error::Error>> {
    /// use telegrip_client::tl;
    ///
    /// dbg!(client.invoke(&tl::functions::messages::GetFullChat { chat_id: 123 }).await?);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn invoke<R: tl::RemoteCall>(
        &self,
        request: &R,
    ) -> Result<R::Return, InvocationError> {
        debug!("invoking {}", R::NAME);
        self.0.gateway.invoke(request).await
    }

    /// Resolve anything that identifies a peer into a reference usable in requests.
    ///
    /// References that are already known (including the logged-in account) are returned
    /// without asking the gateway.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f<G: telegrip_client::Gateway>(client: telegrip_client::Client<G>) -> Result<(), Box<dyn std::error::Error>> {
    /// let durov = client.resolve_peer("@durov").await?;
    /// let group = client.resolve_peer(-123456789_i64).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve_peer<P: Into<PeerIdentifier>>(
        &self,
        peer: P,
    ) -> Result<PeerRef, InvocationError> {
        let peer = peer.into();
        if let Some(known) = peer.known_ref() {
            return Ok(known);
        }

        debug!("resolving peer {peer}");
        self.0.gateway.resolve_peer(&peer).await
    }
}
