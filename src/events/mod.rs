mod channel;

pub use channel::{Channel, EventEmitter, EventObserver, Subscription};
