use std::fmt::{Debug, Display, Formatter};

/// Status stamped on every freshly placed order.
pub const ORDER_CONFIRMED_STATUS: &str = "Order confirmed!";
/// Status set by checkout. Terminal by convention only: staff may still
/// overwrite it afterwards.
pub const ORDER_PAID_STATUS: &str = "The order has been Paid!";

pub const ROLE_CUSTOMER: i32 = 1;
pub const ROLE_WAITER: i32 = 2;
pub const ROLE_KITCHEN: i32 = 3;
pub const ROLE_MANAGER: i32 = 4;

/// Role used when a session points at a user row that no longer exists.
/// Such a caller acts as an unauthenticated customer.
pub const ROLE_FALLBACK: i32 = ROLE_CUSTOMER;

pub const SESSION_TOKEN_HEADER: &str = "x-session-token";
pub const SESSION_KEY_PREFIX: &str = "session";
pub const SESSION_TTL_S: u64 = 86_400;

#[derive(Debug)]
pub struct PoolInitializationError(pub String);

impl Display for PoolInitializationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}
