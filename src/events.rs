use std::sync::mpsc::{Receiver, Sender, channel};

// The card's only cross-component signal. Payload-less on purpose: the
// sender never knows (or cares) whether music is currently playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    ToggleMusic,
}

// Fan-out broadcast bus. Subscribers hold a Subscription and drain it when
// they get a turn; dropping the Subscription unsubscribes.
pub struct EventBus {
    subscribers: Vec<Sender<Signal>>,
}

pub struct Subscription {
    rx: Receiver<Signal>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { subscribers: Vec::new() }
    }

    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        Subscription { rx }
    }

    pub fn broadcast(&mut self, signal: Signal) {
        // A failed send means the Subscription was dropped; prune it here so
        // dead listeners don't accumulate across mount/unmount cycles.
        self.subscribers.retain(|tx| tx.send(signal).is_ok());
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Subscription {
    // Non-blocking: returns None once the queue is empty.
    pub fn try_next(&self) -> Option<Signal> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_reaches_every_subscriber_once() {
        let mut bus = EventBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.broadcast(Signal::ToggleMusic);

        assert_eq!(a.try_next(), Some(Signal::ToggleMusic));
        assert_eq!(a.try_next(), None);
        assert_eq!(b.try_next(), Some(Signal::ToggleMusic));
        assert_eq!(b.try_next(), None);
    }

    #[test]
    fn dropped_subscriptions_are_pruned() {
        let mut bus = EventBus::new();
        let kept = bus.subscribe();
        let dropped = bus.subscribe();
        drop(dropped);

        bus.broadcast(Signal::ToggleMusic);

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_next(), Some(Signal::ToggleMusic));
    }

    #[test]
    fn signals_queue_until_drained() {
        let mut bus = EventBus::new();
        let sub = bus.subscribe();

        bus.broadcast(Signal::ToggleMusic);
        bus.broadcast(Signal::ToggleMusic);

        assert_eq!(sub.try_next(), Some(Signal::ToggleMusic));
        assert_eq!(sub.try_next(), Some(Signal::ToggleMusic));
        assert_eq!(sub.try_next(), None);
    }
}
