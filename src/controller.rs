//! Container measurement, debounced resize and memoized recompute.
//!
//! The controller owns the width the layout is computed for. Hosts feed it
//! every width measurement they observe; the first one applies immediately,
//! later ones are coalesced so a drag-resize recomputes once it settles.
//!
//! The controller never sleeps or spawns. The host supplies timestamps and
//! owns the timer: [`handle_resize`](LayoutController::handle_resize) hands
//! back a [`RecomputeTicket`] to schedule, and
//! [`fire`](LayoutController::fire) runs it. A ticket whose measurement has
//! been replaced by a newer one is [`Superseded`](FireOutcome::Superseded)
//! and must be dropped, so measurements always apply in the order they were
//! taken. Hosts driven by a frame loop can call
//! [`tick`](LayoutController::tick) instead.
//!
//! # Example
//!
//! ```
//! use zenjustify::{Item, LayoutController, ResizeAction, FireOutcome};
//!
//! let items = [Item::new(1, 800.0, 600.0), Item::new(2, 600.0, 800.0)];
//! let mut controller = LayoutController::new();
//!
//! assert_eq!(controller.handle_resize(1200.0, 0), ResizeAction::Apply { width: 1200.0 });
//! let first = controller.layout(&items, 300.0, 4.0).unwrap();
//!
//! let ResizeAction::Schedule(stale) = controller.handle_resize(1000.0, 20) else { panic!() };
//! let ResizeAction::Schedule(latest) = controller.handle_resize(900.0, 40) else { panic!() };
//! assert_eq!(controller.fire(stale, 500), FireOutcome::Superseded);
//! assert_eq!(controller.fire(latest, 500), FireOutcome::Applied { width: 900.0 });
//!
//! let second = controller.layout(&items, 300.0, 4.0).unwrap();
//! assert_eq!(second.container_width(), 900.0);
//! assert_ne!(first, second);
//! ```

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::config::{JustifyConfig, LayoutError};
use crate::justify::{self, Layout};
use crate::last_row::LastRow;
use crate::ratio::LayoutItem;

/// Default quiet period before a resize is applied, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Controller tuning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Quiet period after the latest measurement before it is applied.
    pub debounce_ms: u64,
    /// Trailing-row policy used for every layout.
    pub last_row: LastRow,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            last_row: LastRow::AlignLeft,
        }
    }
}

/// A scheduled recompute. Hand it back to
/// [`fire`](LayoutController::fire) once `due_at_ms` is reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecomputeTicket {
    /// Measurement sequence number; newer measurements get larger values.
    pub generation: u64,
    /// Earliest time the recompute may run.
    pub due_at_ms: u64,
}

/// What the host should do after reporting a measurement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResizeAction {
    /// The width was applied now; lay out again.
    Apply { width: f64 },
    /// Schedule the ticket; any earlier ticket is now stale.
    Schedule(RecomputeTicket),
    /// The width matches the applied one; nothing to do.
    Unchanged,
}

/// Result of running a scheduled recompute.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FireOutcome {
    /// The measurement was applied; lay out again.
    Applied { width: f64 },
    /// A newer measurement replaced this one. Drop the ticket.
    Superseded,
    /// Fired early. Reschedule for `due_at_ms`.
    NotYetDue { due_at_ms: u64 },
}

#[derive(Copy, Clone, Debug)]
struct Pending {
    width: f64,
    generation: u64,
    due_at_ms: u64,
}

/// Everything a layout depends on. Floats are compared bitwise.
#[derive(Clone, Debug, PartialEq)]
struct MemoKey<K> {
    items: Vec<(K, u64)>,
    container_width: u64,
    target_row_height: u64,
    gap: u64,
    last_row: LastRow,
}

/// Owns the container width and the last computed layout.
#[derive(Debug)]
pub struct LayoutController<K> {
    config: ControllerConfig,
    width: Option<f64>,
    generation: u64,
    pending: Option<Pending>,
    memo: Option<(MemoKey<K>, Arc<Layout<K>>)>,
}

impl<K: Clone + PartialEq> Default for LayoutController<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + PartialEq> LayoutController<K> {
    /// Controller with the default debounce window.
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::default())
    }

    /// Controller with explicit tuning.
    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            config,
            width: None,
            generation: 0,
            pending: None,
            memo: None,
        }
    }

    /// Applied container width, if any measurement has been applied.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Deadline of the pending measurement, if one is waiting.
    pub fn pending_deadline(&self) -> Option<u64> {
        self.pending.map(|p| p.due_at_ms)
    }

    /// Report a measurement of the container width taken at `now_ms`.
    pub fn handle_resize(&mut self, width: f64, now_ms: u64) -> ResizeAction {
        self.generation += 1;

        if self.width == Some(width) {
            // Back where we started; whatever was pending is stale.
            self.pending = None;
            return ResizeAction::Unchanged;
        }

        let usable = width.is_finite() && width > 0.0;
        let has_usable = self.width.is_some_and(|w| w.is_finite() && w > 0.0);
        if !usable || !has_usable {
            // First paint, or the container collapsed: no point waiting.
            self.apply(width);
            return ResizeAction::Apply { width };
        }

        let ticket = RecomputeTicket {
            generation: self.generation,
            due_at_ms: now_ms.saturating_add(self.config.debounce_ms),
        };
        self.pending = Some(Pending {
            width,
            generation: ticket.generation,
            due_at_ms: ticket.due_at_ms,
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(
            width,
            generation = ticket.generation,
            due_at_ms = ticket.due_at_ms,
            "resize scheduled"
        );
        ResizeAction::Schedule(ticket)
    }

    /// Run a scheduled recompute.
    pub fn fire(&mut self, ticket: RecomputeTicket, now_ms: u64) -> FireOutcome {
        let Some(pending) = self.pending.filter(|p| p.generation == ticket.generation) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(generation = ticket.generation, "stale resize dropped");
            return FireOutcome::Superseded;
        };
        if now_ms < pending.due_at_ms {
            return FireOutcome::NotYetDue {
                due_at_ms: pending.due_at_ms,
            };
        }
        self.apply(pending.width);
        FireOutcome::Applied {
            width: pending.width,
        }
    }

    /// Apply the pending measurement if its deadline has passed.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let pending = self.pending?;
        if now_ms < pending.due_at_ms {
            return None;
        }
        self.apply(pending.width);
        Some(pending.width)
    }

    fn apply(&mut self, width: f64) {
        self.pending = None;
        self.width = Some(width);
        #[cfg(feature = "tracing")]
        tracing::debug!(width, generation = self.generation, "container width applied");
    }

    /// Layout `items` at the applied width.
    ///
    /// Returns the previous result without repacking when nothing it depends
    /// on has changed. Before any width is applied the layout is empty.
    pub fn layout<T>(
        &mut self,
        items: &[T],
        target_row_height: f64,
        gap: f64,
    ) -> Result<Arc<Layout<K>>, LayoutError>
    where
        T: LayoutItem<Key = K>,
    {
        let config = JustifyConfig::new(self.width.unwrap_or(0.0), target_row_height)
            .gap(gap)
            .last_row(self.config.last_row);
        config.validate()?;

        let key = MemoKey {
            items: items
                .iter()
                .map(|item| (item.key(), item.aspect_ratio().to_bits()))
                .collect(),
            container_width: config.container_width.to_bits(),
            target_row_height: target_row_height.to_bits(),
            gap: gap.to_bits(),
            last_row: config.last_row,
        };

        if let Some((cached_key, layout)) = &self.memo
            && *cached_key == key
        {
            #[cfg(feature = "tracing")]
            tracing::trace!(items = items.len(), "layout memo hit");
            return Ok(Arc::clone(layout));
        }

        let layout = Arc::new(justify::justify(items, &config)?);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            items = items.len(),
            rows = layout.rows().len(),
            container_width = config.container_width,
            "layout recomputed"
        );
        self.memo = Some((key, Arc::clone(&layout)));
        Ok(layout)
    }
}
