use std::{future::Future, pin::Pin, sync::Arc};

use log::*;
use tokio::sync::mpsc;

pub type Handler<E> = Arc<dyn Fn(E) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// One end of an event channel, paired with the handler that consumes the events.
///
/// The pump owns the receiving side; [`EventHandler::subscribe`] hands out producers. When the last producer is
/// dropped the pump drains whatever handler tasks are still in flight and shuts down.
pub struct EventHandler<E: Send + Sync + 'static> {
    listener: mpsc::Receiver<E>,
    sender: mpsc::Sender<E>,
    handler: Handler<E>,
}

impl<E: Send + Sync + 'static> EventHandler<E> {
    pub fn new(buffer_size: usize, handler: Handler<E>) -> Self {
        let (sender, receiver) = mpsc::channel(buffer_size);
        Self { listener: receiver, sender, handler }
    }

    pub fn subscribe(&self) -> EventProducer<E> {
        EventProducer::new(self.sender.clone())
    }

    /// Run the pump until every producer has been dropped, then wait for the in-flight handler tasks to finish.
    pub async fn start_handler(mut self) {
        debug!("📬️ Event pump started");
        // the pump's own sender would otherwise keep the channel open forever
        drop(self.sender);
        let mut in_flight = Vec::new();
        while let Some(event) = self.listener.recv().await {
            trace!("📬️ Dispatching event to handler");
            let handler = Arc::clone(&self.handler);
            in_flight.push(tokio::spawn(async move {
                (handler)(event).await;
            }));
            in_flight.retain(|task| !task.is_finished());
        }
        for task in in_flight {
            if let Err(e) = task.await {
                warn!("📬️ An event handler task panicked while the pump was draining: {e}");
            }
        }
        debug!("📬️ Event pump has shut down");
    }
}

#[derive(Clone)]
pub struct EventProducer<E: Send + Sync> {
    sender: mpsc::Sender<E>,
}

impl<E: Send + Sync> EventProducer<E> {
    pub fn new(sender: mpsc::Sender<E>) -> Self {
        Self { sender }
    }

    pub async fn publish_event(&self, event: E) {
        if let Err(e) = self.sender.send(event).await {
            error!("📬️ Failed to publish event: {e}");
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;

    #[tokio::test]
    async fn every_published_event_reaches_the_handler() {
        let _ = env_logger::try_init();
        let total = Arc::new(AtomicU64::new(0));
        let sum = Arc::clone(&total);
        let handler: Handler<u64> = Arc::new(move |v| {
            let sum = Arc::clone(&sum);
            Box::pin(async move {
                sum.fetch_add(v, Ordering::SeqCst);
                tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
            })
        });
        let pump = EventHandler::new(4, handler);
        let odds = pump.subscribe();
        let evens = pump.subscribe();
        tokio::spawn(async move {
            for v in [1u64, 3, 5, 7, 9] {
                odds.publish_event(v).await;
            }
        });
        tokio::spawn(async move {
            for v in [0u64, 2, 4, 6, 8] {
                evens.publish_event(v).await;
            }
        });
        // returns only after both producers are dropped and the handlers drained
        pump.start_handler().await;
        assert_eq!(total.load(Ordering::SeqCst), 45);
    }
}
