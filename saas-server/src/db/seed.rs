//! Development Seed Data
//!
//! 开发环境首次启动时填充演示数据，方便前端联调。
//! Production never calls this; see [`crate::core::ServerState::initialize`].

use sqlx::SqlitePool;

use shared::models::{
    BlogPostCreate, CustomerCreate, MenuCategoryCreate, MenuItemCreate, PricingPackageCreate,
    RestaurantTableCreate, TenantCreate, UserCreate, UserRole,
};

use crate::db::repository;
use crate::utils::AppError;

/// Seed a platform admin and a demo tenant when the database is empty
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), AppError> {
    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    if user_count > 0 {
        return Ok(());
    }

    tracing::info!("Empty database detected, seeding demo data");

    // Platform administrator
    repository::user::create(
        pool,
        None,
        UserCreate {
            username: "admin".into(),
            display_name: Some("Platform Admin".into()),
            email: None,
            password: "admin123".into(),
            role: Some(UserRole::Platform),
        },
    )
    .await?;

    // Demo tenant with an owner account
    let tenant = repository::tenant::create(
        pool,
        TenantCreate {
            name: "Demo Bistro".into(),
            slug: Some("demo-bistro".into()),
        },
    )
    .await?;

    repository::user::create(
        pool,
        Some(tenant.id),
        UserCreate {
            username: "owner".into(),
            display_name: Some("Demo Owner".into()),
            email: None,
            password: "owner123".into(),
            role: Some(UserRole::Owner),
        },
    )
    .await?;

    // Menu
    let starters = repository::menu_category::create(
        pool,
        tenant.id,
        MenuCategoryCreate {
            name: "Starters".into(),
            sort_order: Some(1),
        },
    )
    .await?;
    let mains = repository::menu_category::create(
        pool,
        tenant.id,
        MenuCategoryCreate {
            name: "Mains".into(),
            sort_order: Some(2),
        },
    )
    .await?;

    for (category_id, name, price) in [
        (starters.id, "Garlic Bread", 4.50),
        (starters.id, "Tomato Soup", 5.90),
        (mains.id, "Margherita Pizza", 11.50),
        (mains.id, "Spaghetti Carbonara", 12.90),
    ] {
        repository::menu_item::create(
            pool,
            tenant.id,
            MenuItemCreate {
                category_id,
                name: name.into(),
                description: None,
                price,
                image_url: None,
                is_available: Some(true),
                sort_order: None,
            },
        )
        .await?;
    }

    // Tables
    for (name, capacity) in [("T1", 2), ("T2", 4), ("T3", 6)] {
        repository::restaurant_table::create(
            pool,
            tenant.id,
            RestaurantTableCreate {
                name: name.into(),
                capacity: Some(capacity),
                location: None,
            },
        )
        .await?;
    }

    repository::customer::create(
        pool,
        tenant.id,
        CustomerCreate {
            name: "Walk-in Regular".into(),
            phone: Some("+34 600 000 000".into()),
            email: None,
            address: None,
            note: None,
        },
    )
    .await?;

    // Marketing-site content
    for (name, price, features) in [
        (
            "Starter",
            29.0,
            vec!["1 storefront", "Menu management", "Email support"],
        ),
        (
            "Pro",
            79.0,
            vec![
                "Everything in Starter",
                "Online ordering",
                "Table reservations",
            ],
        ),
    ] {
        repository::pricing_package::create(
            pool,
            PricingPackageCreate {
                name: name.into(),
                description: None,
                monthly_price: price,
                features: features.into_iter().map(String::from).collect(),
                sort_order: None,
            },
        )
        .await?;
    }

    repository::blog_post::create(
        pool,
        BlogPostCreate {
            title: "Welcome to Ladle".into(),
            slug: None,
            excerpt: Some("Run your restaurant from one place.".into()),
            body: "Ladle brings your storefront, menu and orders together.".into(),
            cover_image_url: None,
            is_published: true,
        },
    )
    .await?;

    tracing::info!(tenant = %tenant.slug, "Demo data seeded");
    Ok(())
}
