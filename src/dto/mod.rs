pub mod bookings;
pub mod categories;
pub mod chefs;
pub mod customers;
pub mod meals;
pub mod orders;
pub mod payments;
