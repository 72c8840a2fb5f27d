pub mod bundle;
pub mod cart;
pub mod customer;
pub mod event;
pub mod order;
pub mod ticket;

pub use bundle::{validate_bundle, CustomerBundle, CustomerTotals};
pub use cart::{AbandonedCart, CartId, CartItem, CartStatus};
pub use customer::{Customer, CustomerId};
pub use event::{is_valid_slug, validate_slug, EventRef};
pub use order::{EmailAudit, Order, OrderId, OrderItem, OrderStatus};
pub use ticket::{Ticket, TicketId};
