//! Quantity rules and sort orders of ranked post/article listings.
//!
//! The repositories turn a [`ListingOrder`] into SQL, see `data::listing`.

use serde::Deserialize;

use crate::server::error::domain::DomainError;

/// Smallest quantity a qty listing accepts.
pub const MIN_QTY: i64 = 5;

/// Number of entries returned by the "top" listings.
pub const TOP_QTY: usize = 3;

/// Sort order of a listing. Equal keys keep ascending id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingOrder {
    MostLikes,
    LeastLikes,
    MostComments,
    Newest,
    Oldest,
}

/// Validates a requested listing quantity against [`MIN_QTY`].
///
/// # Returns
/// - `Ok(usize)` - The quantity as a length
/// - `Err(DomainError::WrongNumber)` - The quantity is below the floor
pub fn check_qty(qty: i64) -> Result<usize, DomainError> {
    if qty < MIN_QTY {
        return Err(DomainError::WrongNumber(format!(
            "Number of elements must be at least {}",
            MIN_QTY
        )));
    }

    Ok(qty as usize)
}

/// The first `qty` items of a listing and whether more follow.
#[derive(Debug, Clone, PartialEq)]
pub struct QtyPage<T> {
    pub items: Vec<T>,
    pub is_next: bool,
}

impl<T> QtyPage<T> {
    /// Keeps the first `qty` of already ordered `items`.
    pub fn take(mut items: Vec<T>, qty: usize) -> Self {
        let is_next = items.len() > qty;
        items.truncate(qty);

        Self { items, is_next }
    }
}
