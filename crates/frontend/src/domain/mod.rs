pub mod a001_subscriber;
pub mod a002_price;
pub mod a003_payment;
pub mod a004_order;
