//! API data models
//!
//! Entity structs plus their Create/Update DTOs. With the `db` feature the
//! entity structs derive `sqlx::FromRow` so repositories can map rows
//! directly.

mod blog_post;
mod customer;
mod menu;
mod order;
mod pricing_package;
mod settings;
mod table;
mod tenant;
mod user;

pub use blog_post::{BlogPost, BlogPostCreate, BlogPostUpdate};
pub use customer::{Customer, CustomerCreate, CustomerUpdate};
pub use menu::{
    MenuCategory, MenuCategoryCreate, MenuCategoryUpdate, MenuItem, MenuItemCreate, MenuItemUpdate,
};
pub use order::{
    Order, OrderCreate, OrderDetail, OrderItem, OrderItemCreate, OrderStatus, OrderStatusUpdate,
    OrderTimelineEntry, OrderType,
};
pub use pricing_package::{PricingPackage, PricingPackageCreate, PricingPackageUpdate};
pub use settings::{CompanySettings, CompanySettingsUpdate, SystemSetting, SystemSettingUpdate};
pub use table::{
    ReservationCreate, ReservationStatus, ReservationUpdate, RestaurantTable,
    RestaurantTableCreate, RestaurantTableUpdate, TableReservation,
};
pub use tenant::{Tenant, TenantCreate, TenantUpdate};
pub use user::{User, UserCreate, UserRole, UserUpdate};
