use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use log::trace;

pub type Callback<T> = Rc<dyn Fn(&T)>;
pub type SubscriptionId = u64;

type Listeners<T> = RefCell<BTreeMap<SubscriptionId, Callback<T>>>;

/// Single-threaded fan-out of events to subscribers, in subscription order.
pub struct Channel<T: std::fmt::Debug> {
    listeners: Rc<Listeners<T>>,
    next_id: Rc<Cell<SubscriptionId>>,
}

impl<T: std::fmt::Debug> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
            next_id: Rc::clone(&self.next_id),
        }
    }
}

/// Sending half handed to whoever produces the events.
pub struct EventEmitter<T: std::fmt::Debug> {
    channel: Channel<T>,
}

impl<T: std::fmt::Debug> Clone for EventEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
        }
    }
}

/// Receiving half handed to renderers and other consumers.
pub struct EventObserver<T: std::fmt::Debug> {
    channel: Channel<T>,
}

impl<T: std::fmt::Debug> Clone for EventObserver<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
        }
    }
}

/// Keeps a listener registered; dropping it unsubscribes.
#[must_use = "the listener is removed when the subscription is dropped"]
pub struct Subscription<T: std::fmt::Debug> {
    id: SubscriptionId,
    listeners: Weak<Listeners<T>>,
}

impl<T: std::fmt::Debug> Subscription<T> {
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl<T: std::fmt::Debug> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().remove(&self.id);
        }
    }
}

impl<T: std::fmt::Debug> Channel<T> {
    pub fn new() -> (EventEmitter<T>, EventObserver<T>) {
        let channel = Channel {
            listeners: Rc::new(RefCell::new(BTreeMap::new())),
            next_id: Rc::new(Cell::new(0)),
        };
        (
            EventEmitter {
                channel: channel.clone(),
            },
            EventObserver { channel },
        )
    }

    fn subscribe<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&T) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().insert(id, Rc::new(callback));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    fn emit(&self, data: &T) {
        // Snapshot so a listener may subscribe or drop a subscription while
        // the event is being delivered.
        let listeners: Vec<Callback<T>> = self.listeners.borrow().values().cloned().collect();
        trace!(target: "events", "Emitting event to {} listeners: {:?}", listeners.len(), data);
        for listener in listeners {
            listener(data);
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<T: std::fmt::Debug> EventEmitter<T> {
    pub fn emit(&self, data: &T) {
        self.channel.emit(data);
    }

    pub fn has_listeners(&self) -> bool {
        self.channel.listener_count() > 0
    }
}

impl<T: std::fmt::Debug> EventObserver<T> {
    pub fn subscribe<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&T) + 'static,
    {
        self.channel.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GameEngineEvent, GameMode};

    fn time_event(seconds: u32) -> GameEngineEvent {
        GameEngineEvent::TimeRemainingChanged(seconds)
    }

    #[test]
    fn test_subscriber_receives_events() {
        let (emitter, observer) = Channel::<GameEngineEvent>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let _subscription = observer.subscribe(move |event: &GameEngineEvent| {
            sink.borrow_mut().push(event.clone());
        });

        emitter.emit(&time_event(59));
        emitter.emit(&time_event(58));
        assert_eq!(*seen.borrow(), vec![time_event(59), time_event(58)]);
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let (emitter, observer) = Channel::<GameEngineEvent>::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let first = order.clone();
        let second = order.clone();

        let _a = observer.subscribe(move |_: &GameEngineEvent| first.borrow_mut().push("renderer"));
        let _b = observer.subscribe(move |_: &GameEngineEvent| second.borrow_mut().push("logger"));

        emitter.emit(&GameEngineEvent::NewBestRecord {
            mode: GameMode::Classic,
            value: 2,
        });
        assert_eq!(*order.borrow(), vec!["renderer", "logger"]);
    }

    #[test]
    fn test_clones_share_listeners() {
        let (emitter1, observer1) = Channel::<GameEngineEvent>::new();
        let emitter2 = emitter1.clone();
        let observer2 = observer1.clone();
        let count = Rc::new(Cell::new(0));

        let c1 = count.clone();
        let _a = observer1.subscribe(move |_: &GameEngineEvent| c1.set(c1.get() + 1));
        emitter2.emit(&time_event(10));
        assert_eq!(count.get(), 1);

        let c2 = count.clone();
        let _b = observer2.subscribe(move |_: &GameEngineEvent| c2.set(c2.get() + 1));
        emitter1.emit(&time_event(9));
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let (emitter, observer) = Channel::<GameEngineEvent>::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();

        let subscription = observer.subscribe(move |_: &GameEngineEvent| c.set(c.get() + 1));
        assert!(emitter.has_listeners());
        emitter.emit(&time_event(3));
        assert_eq!(count.get(), 1);

        subscription.unsubscribe();
        assert!(!emitter.has_listeners());
        emitter.emit(&time_event(2));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_listener_may_drop_its_own_subscription() {
        let (emitter, observer) = Channel::<GameEngineEvent>::new();
        let slot: Rc<RefCell<Option<Subscription<GameEngineEvent>>>> = Rc::new(RefCell::new(None));
        let inner = slot.clone();

        let subscription = observer.subscribe(move |_: &GameEngineEvent| {
            inner.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(subscription);

        emitter.emit(&time_event(1));
        assert!(!emitter.has_listeners());
    }
}
