pub mod announce;
pub mod bank;
pub mod cart;
pub mod category;
pub mod menu;
pub mod order;
pub mod restaurant;
pub mod teller;
pub mod ticket;
