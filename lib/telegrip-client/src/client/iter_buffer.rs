// Copyright 2020 - developers of the `telegrip` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::VecDeque;

use telegrip_gateway::InvocationError;

use super::Client;

/// Common parts to all requests that are used for creating iterators.
///
/// End-users should obtain particular instances of this type via client methods.
pub struct IterBuffer<G, R, T> {
    pub(crate) client: Client<G>,
    pub(crate) limit: Option<usize>,
    pub(crate) fetched: usize,
    pub(crate) buffer: VecDeque<T>,
    pub(crate) last_chunk: bool,
    pub(crate) total: Option<usize>,
    pub(crate) request: R,
}

impl<G, R, T> IterBuffer<G, R, T> {
    /// Create a new `IterBuffer` instance from a handle, capacity and request.
    pub(crate) fn from_request(client: &Client<G>, capacity: usize, request: R) -> Self {
        Self {
            client: client.clone(),
            limit: None,
            fetched: 0,
            buffer: VecDeque::with_capacity(capacity),
            last_chunk: false,
            total: None,
            request,
        }
    }

    /// Checks whether the limit has been reached and no more items should be fetched.
    fn limit_reached(&self) -> bool {
        if let Some(limit) = self.limit {
            self.fetched >= limit
        } else {
            false
        }
    }

    /// Return the next result item from the buffer unless more data needs to be fetched.
    ///
    /// Data does not need to be fetched if the limit is reached or the buffer is empty and the
    /// last chunk was reached.
    pub(crate) fn next_raw(&mut self) -> Option<Result<Option<T>, InvocationError>> {
        if self.limit_reached() || (self.buffer.is_empty() && self.last_chunk) {
            Some(Ok(None))
        } else {
            self.pop_item().map(|item| Ok(Some(item)))
        }
    }

    /// Determines the new "limit" for the request, so that no unnecessary items are fetched from
    /// the network.
    pub(crate) fn determine_limit(&self, max: usize) -> i32 {
        let max = max.clamp(1, i32::MAX as usize);
        if let Some(limit) = self.limit {
            if self.fetched < limit {
                (limit - self.fetched).min(max) as i32
            } else {
                1 // 0 would cause Telegram to send a default amount and not actually 0
            }
        } else {
            max as i32
        }
    }

    /// Pop a buffered item from the queue, and increment the amount of items fetched (returned).
    pub(crate) fn pop_item(&mut self) -> Option<T> {
        if let Some(item) = self.buffer.pop_front() {
            self.fetched += 1;
            Some(item)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientInner;
    use std::sync::Arc;

    fn buffer(limit: Option<usize>) -> IterBuffer<(), (), i32> {
        let client = Client(Arc::new(ClientInner {
            gateway: (),
            configuration: Default::default(),
        }));
        let mut buffer = IterBuffer::from_request(&client, 4, ());
        buffer.limit = limit;
        buffer
    }

    #[test]
    fn page_size_follows_remaining_quota() {
        let mut iter = buffer(Some(250));
        assert_eq!(iter.determine_limit(100), 100);

        iter.fetched = 200;
        assert_eq!(iter.determine_limit(100), 50);

        iter.fetched = 250;
        assert_eq!(iter.determine_limit(100), 1);

        assert_eq!(buffer(None).determine_limit(100), 100);
        assert_eq!(buffer(None).determine_limit(0), 1);
    }

    #[test]
    fn items_are_counted_when_popped() {
        let mut iter = buffer(Some(2));
        iter.buffer.extend([1, 2, 3]);

        assert_eq!(iter.next_raw().map(Result::unwrap), Some(Some(1)));
        assert_eq!(iter.next_raw().map(Result::unwrap), Some(Some(2)));
        assert_eq!(iter.next_raw().map(Result::unwrap), Some(None));
        assert_eq!(iter.fetched, 2);
    }

    #[test]
    fn empty_buffer_asks_for_more_until_last_chunk() {
        let mut iter = buffer(None);
        assert!(iter.next_raw().is_none());

        iter.last_chunk = true;
        assert_eq!(iter.next_raw().map(Result::unwrap), Some(None));
    }
}
