use crate::floor::BoothSurface;
use crate::model::{BoothId, CartItem};
use crate::view::{build_view, CartView, ViewLabels};
use std::fmt;
use tracing::{debug, info};

/// A clickable control on the page. Add controls live on booths, remove
/// controls on rendered cart rows, and there is one clear control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    AddBooth(BoothId),
    RemoveItem(BoothId),
    ClearCart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PreBooked,
    AlreadySelected,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::PreBooked => "This booth is pre-booked!",
            Notice::AlreadySelected => "Booth already selected!",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Receives user-facing rejections. Never blocks.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

impl<F: FnMut(Notice)> Notifier for F {
    fn notify(&mut self, notice: Notice) {
        self(notice)
    }
}

/// Buffers notices until the caller drains them.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: Vec<Notice>,
}

impl NoticeQueue {
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Notifier for NoticeQueue {
    fn notify(&mut self, notice: Notice) {
        self.pending.push(notice);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added { price: u32 },
    NotFound,
    PreBooked,
    AlreadySelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { price: u32 },
    NotInCart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Add(AddOutcome),
    Remove(RemoveOutcome),
    Cleared(usize),
}

/// Insertion-ordered items plus a running total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    total: u64,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id.as_str() == id)
    }

    // Callers check `contains` first; the id must not already be present.
    fn push(&mut self, item: CartItem) {
        self.total += u64::from(item.price);
        self.items.push(item);
    }

    fn remove(&mut self, id: &str) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id.as_str() == id)?;
        let item = self.items.remove(index);
        self.total -= u64::from(item.price);
        Some(item)
    }

    fn take_all(&mut self) -> Vec<CartItem> {
        self.total = 0;
        std::mem::take(&mut self.items)
    }
}

pub struct CartController<N: Notifier = NoticeQueue> {
    cart: Cart,
    labels: ViewLabels,
    notifier: N,
    view: CartView,
}

impl CartController<NoticeQueue> {
    pub fn new(labels: ViewLabels) -> Self {
        Self::with_notifier(labels, NoticeQueue::default())
    }
}

impl<N: Notifier> CartController<N> {
    pub fn with_notifier(labels: ViewLabels, notifier: N) -> Self {
        let cart = Cart::default();
        let view = build_view(cart.items(), cart.total(), &labels);
        Self {
            cart,
            labels,
            notifier,
            view,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn view(&self) -> &CartView {
        &self.view
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn add_booth<S: BoothSurface>(&mut self, surface: &mut S, booth_ref: &str) -> AddOutcome {
        let Some(booth) = surface.booth(booth_ref) else {
            debug!(booth = booth_ref, "add ignored, booth not on floor");
            return AddOutcome::NotFound;
        };

        if booth.pre_booked {
            info!(booth = booth_ref, "rejected pre-booked booth");
            self.notifier.notify(Notice::PreBooked);
            return AddOutcome::PreBooked;
        }

        if self.cart.contains(booth.id.as_str()) {
            info!(booth = booth_ref, "rejected duplicate booth");
            self.notifier.notify(Notice::AlreadySelected);
            return AddOutcome::AlreadySelected;
        }

        let item = CartItem {
            id: booth.id.clone(),
            price: booth.price(),
        };
        let price = item.price;
        let id = item.id.clone();

        self.cart.push(item);
        surface.set_selected(id.as_str(), true);
        info!(booth = %id, price, total = self.cart.total(), "booth added to cart");

        self.render();
        AddOutcome::Added { price }
    }

    pub fn remove_booth<S: BoothSurface>(
        &mut self,
        surface: &mut S,
        item_ref: &str,
    ) -> RemoveOutcome {
        let outcome = match self.cart.remove(item_ref) {
            Some(item) => {
                info!(
                    booth = item_ref,
                    price = item.price,
                    total = self.cart.total(),
                    "booth removed from cart"
                );
                RemoveOutcome::Removed { price: item.price }
            }
            None => {
                debug!(booth = item_ref, "remove requested for booth not in cart");
                RemoveOutcome::NotInCart
            }
        };

        // The booth is unmarked even when it was never in the cart.
        surface.set_selected(item_ref, false);

        self.render();
        outcome
    }

    pub fn clear_cart<S: BoothSurface>(&mut self, surface: &mut S) -> usize {
        let items = self.cart.take_all();
        for item in &items {
            if !surface.set_selected(item.id.as_str(), false) {
                debug!(booth = %item.id, "booth vanished before clear");
            }
        }
        info!(count = items.len(), "cart cleared");

        self.render();
        items.len()
    }

    pub fn render(&mut self) -> &CartView {
        self.view = build_view(self.cart.items(), self.cart.total(), &self.labels);
        &self.view
    }

    pub fn dispatch<S: BoothSurface>(
        &mut self,
        surface: &mut S,
        control: &Control,
    ) -> DispatchOutcome {
        match control {
            Control::AddBooth(id) => DispatchOutcome::Add(self.add_booth(surface, id.as_str())),
            Control::RemoveItem(id) => {
                DispatchOutcome::Remove(self.remove_booth(surface, id.as_str()))
            }
            Control::ClearCart => DispatchOutcome::Cleared(self.clear_cart(surface)),
        }
    }
}
