// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A generic, thread-safe queue of deferred events.
///
/// Producers push with [`EventQueue::queue`] or through an [`EventProducer`];
/// the owner drains the queue when it is ready to process them. Queuing can be
/// disallowed, after which new events are dropped instead of stored.
#[derive(Debug)]
pub struct EventQueue<T: Send + 'static> {
    producer: EventProducer<T>,
    receiver: flume::Receiver<T>,
}

/// A cloneable handle that pushes events into an [`EventQueue`].
///
/// The handle shares the queue's gate: once queuing is disallowed, events sent
/// through any producer are dropped as well.
#[derive(Debug)]
pub struct EventProducer<T: Send + 'static> {
    sender: flume::Sender<T>,
    queuing_allowed: Arc<AtomicBool>,
}

impl<T: Send + 'static> Clone for EventProducer<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            queuing_allowed: Arc::clone(&self.queuing_allowed),
        }
    }
}

impl<T: Send + 'static> EventProducer<T> {
    /// Queues an event.
    ///
    /// ## Returns
    /// `true` if the event was stored, `false` if queuing is disallowed or the
    /// queue is gone and the event was dropped.
    pub fn queue(&self, event: T) -> bool {
        if !self.is_queuing_allowed() {
            log::trace!("Queuing is disallowed, dropping event.");
            return false;
        }

        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to queue event: {e}. Queue likely dropped.");
            return false;
        }
        true
    }

    /// Returns `true` if new events are currently accepted.
    pub fn is_queuing_allowed(&self) -> bool {
        self.queuing_allowed.load(Ordering::Acquire)
    }
}

impl<T: Send + 'static> EventQueue<T> {
    /// Creates a new queue with an unbounded channel. Queuing starts allowed.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            producer: EventProducer {
                sender,
                queuing_allowed: Arc::new(AtomicBool::new(true)),
            },
            receiver,
        }
    }

    /// Queues an event.
    ///
    /// ## Returns
    /// `true` if the event was stored, `false` if queuing is disallowed and the
    /// event was dropped.
    pub fn queue(&self, event: T) -> bool {
        self.producer.queue(event)
    }

    /// Allows or disallows queuing of new events, through this queue and
    /// through every [`EventProducer`] handed out by it.
    ///
    /// Events already queued are kept; use [`EventQueue::clear_queued_events`]
    /// to discard them.
    pub fn allow_queuing(&self, allowed: bool) {
        self.producer.queuing_allowed.store(allowed, Ordering::Release);
        log::debug!("Event queuing {}.", if allowed { "enabled" } else { "disabled" });
    }

    /// Returns `true` if new events are currently accepted.
    pub fn is_queuing_allowed(&self) -> bool {
        self.producer.is_queuing_allowed()
    }

    /// Discards every queued event and returns how many were dropped.
    pub fn clear_queued_events(&self) -> usize {
        let cleared = self.receiver.drain().count();
        if cleared > 0 {
            log::debug!("Cleared {cleared} queued event(s).");
        }
        cleared
    }

    /// The number of events waiting to be processed.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Returns `true` if no event is waiting.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    /// Removes and returns every queued event, oldest first.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.drain().collect()
    }

    /// Hands every queued event to `handler`, oldest first, and returns how
    /// many were processed.
    pub fn process_queued_events(&self, mut handler: impl FnMut(T)) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.receiver.try_recv() {
            handler(event);
            processed += 1;
        }
        processed
    }

    /// Returns a producer handle for code that queues from elsewhere,
    /// including other threads.
    pub fn producer(&self) -> EventProducer<T> {
        self.producer.clone()
    }
}

impl<T: Send + 'static> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[derive(Debug, Clone, PartialEq)]
    enum TestEvent {
        Resized { width: u32, height: u32 },
        Shutdown,
    }

    #[test]
    fn new_queue_accepts_events() {
        let queue = EventQueue::<TestEvent>::new();
        assert!(queue.is_queuing_allowed());
        assert!(queue.is_empty());

        assert!(queue.queue(TestEvent::Shutdown));
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn drain_returns_events_in_order() {
        let queue = EventQueue::<TestEvent>::new();
        let first = TestEvent::Resized {
            width: 1,
            height: 1,
        };
        queue.queue(first.clone());
        queue.queue(TestEvent::Shutdown);

        assert_eq!(queue.drain(), vec![first, TestEvent::Shutdown]);
        assert!(queue.is_empty());
    }

    #[test]
    fn disallowed_queue_drops_events() {
        let queue = EventQueue::<TestEvent>::new();
        queue.allow_queuing(false);

        assert!(!queue.queue(TestEvent::Shutdown));
        assert!(queue.is_empty());

        queue.allow_queuing(true);
        assert!(queue.queue(TestEvent::Shutdown));
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn clear_discards_pending_events() {
        let queue = EventQueue::<TestEvent>::new();
        queue.queue(TestEvent::Shutdown);
        queue.queue(TestEvent::Shutdown);

        assert_eq!(queue.clear_queued_events(), 2);
        assert_eq!(queue.clear_queued_events(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn process_hands_each_event_to_handler() {
        let queue = EventQueue::<TestEvent>::new();
        queue.queue(TestEvent::Shutdown);
        queue.queue(TestEvent::Resized {
            width: 2,
            height: 3,
        });

        let mut seen = Vec::new();
        let processed = queue.process_queued_events(|event| seen.push(event));

        assert_eq!(processed, 2);
        assert_eq!(seen[0], TestEvent::Shutdown);
        assert!(queue.is_empty());
    }

    #[test]
    fn producer_from_thread() {
        let queue = EventQueue::<TestEvent>::new();
        let producer = queue.producer();

        let handle = thread::spawn(move || {
            assert!(producer.queue(TestEvent::Shutdown), "Queue from thread failed");
        });
        handle.join().expect("Thread join failed");

        assert_eq!(queue.drain(), vec![TestEvent::Shutdown]);
    }

    #[test]
    fn producer_shares_the_gate() {
        let queue = EventQueue::<TestEvent>::new();
        let producer = queue.producer();
        let cloned = producer.clone();

        queue.allow_queuing(false);

        assert!(!producer.is_queuing_allowed());
        assert!(!producer.queue(TestEvent::Shutdown));
        assert!(!cloned.queue(TestEvent::Shutdown));
        assert!(queue.is_empty());

        queue.allow_queuing(true);
        assert!(cloned.queue(TestEvent::Shutdown));
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn producer_outliving_queue_drops_events() {
        let queue = EventQueue::<TestEvent>::new();
        let producer = queue.producer();
        drop(queue);

        assert!(!producer.queue(TestEvent::Shutdown));
    }
}
