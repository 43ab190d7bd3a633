pub mod booking_service;
pub mod category_service;
pub mod chef_service;
pub mod customer_service;
pub mod meal_service;
pub mod order_service;
pub mod payment_service;
