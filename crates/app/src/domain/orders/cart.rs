//! Cart quantity rules.

use thiserror::Error;

use crate::domain::orders::data::CartAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartActionError {
    #[error("only {available} in stock, {requested} requested")]
    InsufficientStock { requested: u32, available: u32 },

    #[error("product is not in the cart")]
    NotInCart,
}

/// Quantity after applying `action` to an item currently at `current`.
///
/// A result of zero means the item should be removed.
///
/// # Errors
///
/// Adding beyond `stock` fails with [`CartActionError::InsufficientStock`];
/// removing an item that is not in the cart fails with
/// [`CartActionError::NotInCart`].
pub fn next_quantity(current: u32, action: CartAction, stock: u32) -> Result<u32, CartActionError> {
    match action {
        CartAction::Add => {
            let requested = current.saturating_add(1);

            if requested > stock {
                return Err(CartActionError::InsufficientStock {
                    requested,
                    available: stock,
                });
            }

            Ok(requested)
        }
        CartAction::Remove => current.checked_sub(1).ok_or(CartActionError::NotInCart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_increments_within_stock() {
        assert_eq!(next_quantity(0, CartAction::Add, 3), Ok(1));
        assert_eq!(next_quantity(2, CartAction::Add, 3), Ok(3));
    }

    #[test]
    fn add_beyond_stock_is_rejected() {
        assert_eq!(
            next_quantity(3, CartAction::Add, 3),
            Err(CartActionError::InsufficientStock {
                requested: 4,
                available: 3
            })
        );
        assert_eq!(
            next_quantity(0, CartAction::Add, 0),
            Err(CartActionError::InsufficientStock {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn remove_decrements_to_zero() {
        assert_eq!(next_quantity(2, CartAction::Remove, 5), Ok(1));
        assert_eq!(next_quantity(1, CartAction::Remove, 5), Ok(0));
    }

    #[test]
    fn remove_ignores_stock() {
        assert_eq!(next_quantity(4, CartAction::Remove, 0), Ok(3));
    }

    #[test]
    fn remove_missing_item_is_rejected() {
        assert_eq!(
            next_quantity(0, CartAction::Remove, 5),
            Err(CartActionError::NotInCart)
        );
    }
}
