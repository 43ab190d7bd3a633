pub mod audit_logs;
pub mod categories;
pub mod chefs;
pub mod customers;
pub mod dining_tables;
pub mod meals;
pub mod order_items;
pub mod orders;
pub mod payments;
pub mod reservations;

pub use audit_logs::Entity as AuditLogs;
pub use categories::Entity as Categories;
pub use chefs::Entity as Chefs;
pub use customers::Entity as Customers;
pub use dining_tables::Entity as DiningTables;
pub use meals::Entity as Meals;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use payments::Entity as Payments;
pub use reservations::Entity as Reservations;
