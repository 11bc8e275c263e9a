//! Cart & wishlist store.
//!
//! An explicit state container with a defined mutation API, injected through
//! application state rather than reached as a global. Every mutation runs
//! synchronously to completion and is followed by a wholesale snapshot
//! persist; the container is rehydrated from the snapshot at startup.
//!
//! Derived pricing is never stored here - handlers recompute totals from
//! cart state on every read via `printshop_core::pricing`.

pub mod snapshot;

use thiserror::Error;
use tracing::instrument;

use printshop_core::{CartItem, Product, ProductId, User};

use snapshot::{SnapshotError, SnapshotStore, StoreSnapshot};

/// Errors raised by store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisting the post-mutation snapshot failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] SnapshotError),
}

/// Process-wide cart, wishlist, and session-user state.
pub struct Store {
    cart: Vec<CartItem>,
    wishlist: Vec<Product>,
    user: Option<User>,
    authenticated: bool,
    backend: Box<dyn SnapshotStore>,
}

impl Store {
    /// Open the store, rehydrating any persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when a snapshot exists but cannot be read.
    pub fn open(backend: Box<dyn SnapshotStore>) -> Result<Self, SnapshotError> {
        let snapshot = backend.load()?.unwrap_or_default();
        Ok(Self {
            cart: snapshot.cart,
            wishlist: snapshot.wishlist,
            user: snapshot.user,
            authenticated: snapshot.authenticated,
            backend,
        })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let snapshot = StoreSnapshot {
            cart: self.cart.clone(),
            wishlist: self.wishlist.clone(),
            user: self.user.clone(),
            authenticated: self.authenticated,
        };
        self.backend.save(&snapshot)?;
        Ok(())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Current cart lines, in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Add a product to the cart, merging into an existing line.
    ///
    /// A repeat add increments the line's quantity; its design files keep
    /// the first add's values and are never overwritten. Quantity is clamped
    /// to at least 1.
    ///
    /// # Errors
    ///
    /// Returns an error when the post-mutation snapshot cannot be persisted.
    #[instrument(skip(self, product, design_files), fields(product_id = %product.id))]
    pub fn add_to_cart(
        &mut self,
        product: Product,
        quantity: u32,
        design_files: Vec<String>,
    ) -> Result<(), StoreError> {
        let quantity = quantity.max(1);

        if let Some(line) = self
            .cart
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.cart.push(CartItem::new(product, quantity, design_files));
        }

        self.persist()
    }

    /// Set a cart line's quantity.
    ///
    /// No-op when the product is not in the cart. Quantities below 1 are
    /// clamped to 1 - lines only leave the cart through explicit removal.
    ///
    /// # Errors
    ///
    /// Returns an error when the post-mutation snapshot cannot be persisted.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<(), StoreError> {
        let Some(line) = self
            .cart
            .iter_mut()
            .find(|line| &line.product.id == product_id)
        else {
            return Ok(());
        };

        line.quantity = quantity.max(1);
        self.persist()
    }

    /// Remove a cart line. No-op when the product is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the post-mutation snapshot cannot be persisted.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> Result<(), StoreError> {
        let before = self.cart.len();
        self.cart.retain(|line| &line.product.id != product_id);
        if self.cart.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Empty the cart unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error when the post-mutation snapshot cannot be persisted.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        self.persist()
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Current wishlist, in insertion order.
    #[must_use]
    pub fn wishlist(&self) -> &[Product] {
        &self.wishlist
    }

    /// Toggle a product's wishlist membership by id.
    ///
    /// Returns whether the product is in the wishlist after the toggle.
    ///
    /// # Errors
    ///
    /// Returns an error when the post-mutation snapshot cannot be persisted.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn toggle_wishlist(&mut self, product: Product) -> Result<bool, StoreError> {
        let present = if self.is_in_wishlist(&product.id) {
            self.wishlist.retain(|entry| entry.id != product.id);
            false
        } else {
            self.wishlist.push(product);
            true
        };

        self.persist()?;
        Ok(present)
    }

    /// Pure membership query; no side effect.
    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.wishlist.iter().any(|entry| &entry.id == product_id)
    }

    // =========================================================================
    // Session user
    // =========================================================================

    /// Current session-local user, if logged in.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Install a session-local user (the "login" stub).
    ///
    /// # Errors
    ///
    /// Returns an error when the post-mutation snapshot cannot be persisted.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub fn set_user(&mut self, user: User) -> Result<(), StoreError> {
        self.user = Some(user);
        self.authenticated = true;
        self.persist()
    }

    /// Clear the user, auth flag, and cart.
    ///
    /// The wishlist survives logout by design: it is not session-scoped.
    ///
    /// # Errors
    ///
    /// Returns an error when the post-mutation snapshot cannot be persisted.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.user = None;
        self.authenticated = false;
        self.cart.clear();
        self.persist()
    }
}
