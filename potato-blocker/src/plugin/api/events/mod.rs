use async_trait::async_trait;

pub mod player_interact_block;

/// Something the host delivers to registered handlers.
pub trait Event: Send + Sync {
    fn get_name_static() -> &'static str
    where
        Self: Sized;

    fn get_name(&self) -> &'static str;
}

/// An event whose effect a handler may veto.
pub trait Cancellable: Send + Sync {
    fn cancelled(&self) -> bool;

    fn set_cancelled(&mut self, cancelled: bool);
}

/// Order in which the host runs handlers of the same event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventPriority {
    Highest,
    High,
    Normal,
    Low,
    Lowest,
}

/// A handler for one event type.
///
/// Handlers receive the event mutably before the host acts on it and may
/// cancel it.
#[async_trait]
pub trait EventHandler<E: Event>: Send + Sync {
    async fn handle_blocking(&self, _event: &mut E) {}
}
