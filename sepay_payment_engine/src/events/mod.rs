//! Paid-order notification fan-out.
//!
//! A simple hook system that lets the rest of the application react to the engine marking an order as paid. The
//! engine only ever talks to [`EventProducer`] handles; what sits on the other end of the channel (a websocket
//! broadcaster, a log line, a test counter) is none of its business. Handlers are async and fire-and-forget: a
//! handler that fails, or is never delivered to, has no effect on order state.
mod channel;
mod event_types;
mod hooks;

pub use channel::{EventHandler, EventProducer, Handler};
pub use event_types::OrderPaidEvent;
pub use hooks::{EventHandlers, EventHooks, EventProducers};
