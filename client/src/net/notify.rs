//! Live order notifications for merchants and buyers.
//!
//! The notifier keeps a WebSocket open to the backend's `/ws` endpoint,
//! scoped to a shop (merchant) or a user (buyer), and forwards `order:new` /
//! `order:updated` events to a page callback. While the socket is down it
//! reconnects with exponential backoff and polls the scope's order list so
//! new orders still surface.
//!
//! All browser I/O is gated behind `#[cfg(feature = "hydrate")]`; the event
//! parsing, URL building and polling diff are plain functions.
//!
//! ERROR HANDLING
//! ==============
//! Transport and parse failures are logged and absorbed; the loop only ends
//! when the owning page drops its [`NotifierHandle`].

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;

use super::types::{Order, PaymentStatus};

pub const INITIAL_BACKOFF_MS: u32 = 1_000;
pub const MAX_BACKOFF_MS: u32 = 10_000;
pub const POLL_INTERVAL_MS: f64 = 15_000.0;

/// Whose orders a notifier listens to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotifyScope {
    /// Orders received by a merchant's shop.
    Shop(String),
    /// Orders placed by a buyer.
    Buyer(String),
}

impl NotifyScope {
    fn kind(&self) -> &'static str {
        match self {
            Self::Shop(_) => "shop",
            Self::Buyer(_) => "buyer",
        }
    }

    fn id(&self) -> &str {
        match self {
            Self::Shop(id) | Self::Buyer(id) => id,
        }
    }
}

/// Link state shown next to live order lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    /// Socket unavailable; order list is being polled.
    Polling,
}

impl ConnectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "Terputus",
            Self::Connecting => "Menghubungkan…",
            Self::Connected => "Langsung",
            Self::Polling => "Memeriksa berkala",
        }
    }
}

/// A change to an order the page should react to.
#[derive(Clone, Debug, PartialEq)]
pub enum OrderEvent {
    NewOrder(Order),
    OrderUpdated(Order),
}

impl OrderEvent {
    pub fn order(&self) -> &Order {
        match self {
            Self::NewOrder(order) | Self::OrderUpdated(order) => order,
        }
    }
}

#[derive(Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

/// Parse one socket text frame. Unknown events and malformed payloads yield
/// `None`.
pub fn parse_event(text: &str) -> Option<OrderEvent> {
    let envelope: Envelope = serde_json::from_str(text).ok()?;
    let order = serde_json::from_value::<Order>(envelope.data).ok()?;
    match envelope.event.as_str() {
        "order:new" | "new_order" | "newOrder" => Some(OrderEvent::NewOrder(order)),
        "order:updated" | "order_updated" | "orderUpdated" => Some(OrderEvent::OrderUpdated(order)),
        _ => None,
    }
}

/// WebSocket URL for a scope, derived from the REST base URL.
pub fn socket_url(api_base: &str, scope: &NotifyScope) -> String {
    let base = api_base.trim_end_matches('/');
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base.to_owned()
    };
    format!("{ws_base}/ws?scope={}&id={}", scope.kind(), scope.id())
}

/// Doubling reconnect delay with a ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Backoff {
    current_ms: u32,
}

impl Default for Backoff {
    fn default() -> Self {
        Self { current_ms: INITIAL_BACKOFF_MS }
    }
}

impl Backoff {
    /// Delay to wait now; the following call returns double, up to the cap.
    pub fn next_delay_ms(&mut self) -> u32 {
        let delay = self.current_ms;
        self.current_ms = (self.current_ms.saturating_mul(2)).min(MAX_BACKOFF_MS);
        delay
    }

    pub fn reset(&mut self) {
        self.current_ms = INITIAL_BACKOFF_MS;
    }
}

/// When the disconnected notifier should next reconnect and next poll.
///
/// The reconnect delay and the poll timer are tracked separately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Schedule {
    backoff: Backoff,
    next_connect_ms: f64,
    next_poll_ms: f64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self { backoff: Backoff::default(), next_connect_ms: 0.0, next_poll_ms: f64::NEG_INFINITY }
    }
}

impl Schedule {
    /// A socket finished its handshake.
    pub fn connected(&mut self) {
        self.backoff.reset();
    }

    /// The socket dropped at `now_ms`; book the next reconnect attempt.
    pub fn disconnected(&mut self, now_ms: f64) {
        self.next_connect_ms = now_ms + f64::from(self.backoff.next_delay_ms());
    }

    /// Whether a poll is due at `now_ms`. Taking one books the next.
    pub fn take_poll(&mut self, now_ms: f64) -> bool {
        if now_ms < self.next_poll_ms {
            return false;
        }
        self.next_poll_ms = now_ms + POLL_INTERVAL_MS;
        true
    }

    pub fn reconnect_due(&self, now_ms: f64) -> bool {
        now_ms >= self.next_connect_ms
    }

    /// Time to sleep until the earlier of the next reconnect or poll.
    pub fn wait_ms(&self, now_ms: f64) -> u32 {
        let wake = self.next_connect_ms.min(self.next_poll_ms);
        (wake - now_ms).clamp(0.0, f64::from(MAX_BACKOFF_MS)) as u32
    }
}

/// Tracks known orders so a polled list can be turned into events.
#[derive(Clone, Debug, Default)]
pub struct OrderWatch {
    seen: HashMap<String, PaymentStatus>,
    seeded: bool,
}

impl OrderWatch {
    /// Diff a freshly fetched list against what has been seen. The first call
    /// only seeds the watch and never reports events.
    pub fn observe(&mut self, orders: &[Order]) -> Vec<OrderEvent> {
        let mut events = Vec::new();
        for order in orders {
            match self.seen.insert(order.id.clone(), order.payment_status) {
                None if self.seeded => events.push(OrderEvent::NewOrder(order.clone())),
                Some(previous) if previous != order.payment_status => {
                    events.push(OrderEvent::OrderUpdated(order.clone()));
                }
                _ => {}
            }
        }
        self.seeded = true;
        events
    }

    /// Remember an order delivered over the socket so polling won't repeat it.
    pub fn record(&mut self, event: &OrderEvent) {
        let order = event.order();
        self.seen.insert(order.id.clone(), order.payment_status);
    }
}

/// Keeps a notifier task alive; dropping the page calls [`stop`](Self::stop).
#[derive(Clone, Debug)]
pub struct NotifierHandle {
    alive: Arc<AtomicBool>,
}

impl NotifierHandle {
    fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Spawn the notifier loop for `scope` as a local task.
///
/// Outside the browser this returns an already-stopped handle.
pub fn spawn_order_notifier(
    scope: NotifyScope,
    status: leptos::prelude::RwSignal<ConnectionStatus>,
    on_event: leptos::prelude::Callback<OrderEvent>,
) -> NotifierHandle {
    let handle = NotifierHandle::new();
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(notifier_loop(scope, status, on_event, handle.clone()));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (scope, status, on_event);
        handle.stop();
    }
    handle
}

#[cfg(feature = "hydrate")]
async fn notifier_loop(
    scope: NotifyScope,
    status: leptos::prelude::RwSignal<ConnectionStatus>,
    on_event: leptos::prelude::Callback<OrderEvent>,
    handle: NotifierHandle,
) {
    use leptos::prelude::{Callable, Set};

    let url = socket_url(super::api::api_base_url(), &scope);
    let mut schedule = Schedule::default();
    let mut watch = OrderWatch::default();

    while handle.is_alive() {
        status.set(ConnectionStatus::Connecting);
        match listen(&url, status, on_event, &handle, &mut watch, &mut schedule).await {
            Ok(()) => leptos::logging::log!("order socket closed"),
            Err(e) => leptos::logging::warn!("order socket error: {e}"),
        }
        if !handle.is_alive() {
            break;
        }

        status.set(ConnectionStatus::Polling);
        schedule.disconnected(js_sys::Date::now());
        loop {
            let now = js_sys::Date::now();
            if schedule.take_poll(now) {
                let fetched = match scope {
                    NotifyScope::Shop(_) => super::api::fetch_shop_orders().await,
                    NotifyScope::Buyer(_) => super::api::fetch_my_orders().await,
                };
                match fetched {
                    Ok(orders) => {
                        for event in watch.observe(&orders) {
                            on_event.run(event);
                        }
                    }
                    Err(e) => leptos::logging::warn!("order poll failed: {e}"),
                }
            }
            let now = js_sys::Date::now();
            if !handle.is_alive() || schedule.reconnect_due(now) {
                break;
            }
            let wait = schedule.wait_ms(now);
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(wait))).await;
        }
    }
    status.set(ConnectionStatus::Disconnected);
}

/// Hold one socket connection open until it drops or the handle stops.
#[cfg(feature = "hydrate")]
async fn listen(
    url: &str,
    status: leptos::prelude::RwSignal<ConnectionStatus>,
    on_event: leptos::prelude::Callback<OrderEvent>,
    handle: &NotifierHandle,
    watch: &mut OrderWatch,
    schedule: &mut Schedule,
) -> Result<(), String> {
    use futures::StreamExt;
    use futures::future::Either;
    use gloo_net::websocket::futures::WebSocket;
    use gloo_net::websocket::{Message, State};
    use leptos::prelude::{Callable, Set};

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    loop {
        match ws.state() {
            State::Open => break,
            State::Connecting if handle.is_alive() => {
                gloo_timers::future::sleep(std::time::Duration::from_millis(100)).await;
            }
            State::Connecting => return Ok(()),
            State::Closing | State::Closed => return Err("handshake failed".to_owned()),
        }
    }
    schedule.connected();
    status.set(ConnectionStatus::Connected);
    let (_write, mut read) = ws.split();

    loop {
        let next = Box::pin(read.next());
        let tick = Box::pin(gloo_timers::future::sleep(std::time::Duration::from_secs(1)));
        let msg = match futures::future::select(next, tick).await {
            Either::Left((msg, _)) => msg,
            Either::Right(_) => {
                if !handle.is_alive() {
                    return Ok(());
                }
                continue;
            }
        };
        let Some(msg) = msg else {
            break;
        };
        match msg {
            Ok(Message::Text(text)) => {
                if let Some(event) = parse_event(&text) {
                    watch.record(&event);
                    on_event.run(event);
                }
            }
            Ok(Message::Bytes(_)) => {}
            Err(e) => return Err(e.to_string()),
        }
    }
    Ok(())
}
