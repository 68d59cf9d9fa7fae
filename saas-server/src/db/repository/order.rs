//! Order Repository
//!
//! 订单仓储：下单、状态流转、时间线。
//! Totals are always derived server-side from stored menu prices and the
//! tenant's company settings; client payloads never carry money fields.

use sqlx::SqlitePool;

use shared::models::{
    Order, OrderCreate, OrderDetail, OrderItem, OrderStatus, OrderTimelineEntry, OrderType,
};
use shared::util::{now_millis, snowflake_id};

use crate::money;

use super::{RepoError, RepoResult};

const COLUMNS: &str = "id, tenant_id, order_number, customer_id, customer_name, customer_phone, delivery_address, order_type, table_id, status, subtotal, tax, delivery_fee, total, note, created_at, updated_at";

/// Maximum line items per order
const MAX_ORDER_ITEMS: usize = 100;

/// List orders, newest first, with optional status filter and paging
pub async fn list(
    pool: &SqlitePool,
    tenant_id: i64,
    status: Option<OrderStatus>,
    limit: i64,
    offset: i64,
) -> RepoResult<Vec<Order>> {
    let limit = limit.clamp(1, 200);
    let offset = offset.max(0);
    let orders = match status {
        Some(s) => {
            sqlx::query_as::<_, Order>(&format!(
                "SELECT {COLUMNS} FROM orders WHERE tenant_id = ? AND status = ? ORDER BY created_at DESC LIMIT ? OFFSET ?"
            ))
            .bind(tenant_id)
            .bind(s)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Order>(&format!(
                "SELECT {COLUMNS} FROM orders WHERE tenant_id = ? ORDER BY created_at DESC LIMIT ? OFFSET ?"
            ))
            .bind(tenant_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(orders)
}

pub async fn get(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "SELECT {COLUMNS} FROM orders WHERE tenant_id = ? AND id = ?"
    ))
    .bind(tenant_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(order)
}

/// Full order view: order row + line items + status timeline
pub async fn get_detail(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<OrderDetail> {
    let order = get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))?;

    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT id, order_id, menu_item_id, name, unit_price, quantity, line_total, note FROM order_items WHERE order_id = ? ORDER BY id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let timeline = sqlx::query_as::<_, OrderTimelineEntry>(
        "SELECT id, order_id, status, note, created_at FROM order_timeline WHERE order_id = ? ORDER BY created_at, id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(OrderDetail {
        order,
        items,
        timeline,
    })
}

/// Create an order: snapshot menu prices, derive totals, open the timeline.
///
/// Everything happens in one transaction so the per-tenant order number
/// never skips or duplicates.
pub async fn create(pool: &SqlitePool, tenant_id: i64, data: OrderCreate) -> RepoResult<OrderDetail> {
    if data.items.is_empty() {
        return Err(RepoError::Validation(
            "Order must contain at least one item".into(),
        ));
    }
    if data.items.len() > MAX_ORDER_ITEMS {
        return Err(RepoError::Validation(format!(
            "Order cannot exceed {MAX_ORDER_ITEMS} items"
        )));
    }
    for item in &data.items {
        if item.quantity < 1 || item.quantity > money::MAX_QUANTITY {
            return Err(RepoError::Validation(format!(
                "quantity must be between 1 and {}",
                money::MAX_QUANTITY
            )));
        }
    }
    if data.order_type == OrderType::Delivery
        && data
            .delivery_address
            .as_deref()
            .is_none_or(|a| a.trim().is_empty())
    {
        return Err(RepoError::Validation(
            "delivery_address is required for delivery orders".into(),
        ));
    }

    // Cross-tenant references are rejected before anything is written
    if let Some(customer_id) = data.customer_id {
        super::customer::get(pool, tenant_id, customer_id)
            .await?
            .ok_or_else(|| RepoError::Validation(format!("Customer {customer_id} does not exist")))?;
    }
    if let Some(table_id) = data.table_id {
        super::restaurant_table::get(pool, tenant_id, table_id)
            .await?
            .ok_or_else(|| RepoError::Validation(format!("Table {table_id} does not exist")))?;
    }

    let settings = super::company_settings::get_or_create(pool, tenant_id).await?;
    let delivery_fee = if data.order_type == OrderType::Delivery {
        settings.delivery_fee
    } else {
        0.0
    };

    // Snapshot name and price from the current menu
    struct Line {
        menu_item_id: i64,
        name: String,
        unit_price: f64,
        quantity: i64,
        line_total: f64,
        note: Option<String>,
    }
    let mut lines = Vec::with_capacity(data.items.len());
    for item in &data.items {
        let menu_item = super::menu_item::get(pool, tenant_id, item.menu_item_id)
            .await?
            .ok_or_else(|| {
                RepoError::Validation(format!("Menu item {} does not exist", item.menu_item_id))
            })?;
        if !menu_item.is_available {
            return Err(RepoError::Validation(format!(
                "Menu item '{}' is not available",
                menu_item.name
            )));
        }
        money::validate_price(menu_item.price).map_err(RepoError::Validation)?;
        lines.push(Line {
            menu_item_id: menu_item.id,
            name: menu_item.name,
            unit_price: menu_item.price,
            quantity: item.quantity,
            line_total: money::line_total(menu_item.price, item.quantity),
            note: item.note.clone(),
        });
    }

    let line_totals: Vec<f64> = lines.iter().map(|l| l.line_total).collect();
    let totals = money::order_totals(&line_totals, settings.tax_rate, delivery_fee);

    let order_id = snowflake_id();
    let now = now_millis();

    let mut tx = pool.begin().await?;

    let order_number: i64 = sqlx::query_scalar(
        "UPDATE order_counters SET next_number = next_number + 1 WHERE tenant_id = ? RETURNING next_number - 1",
    )
    .bind(tenant_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| RepoError::NotFound(format!("Tenant {tenant_id} not found")))?;

    sqlx::query(
        "INSERT INTO orders (id, tenant_id, order_number, customer_id, customer_name, customer_phone, delivery_address, order_type, table_id, status, subtotal, tax, delivery_fee, total, note, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 'pending', ?10, ?11, ?12, ?13, ?14, ?15, ?15)",
    )
    .bind(order_id)
    .bind(tenant_id)
    .bind(order_number)
    .bind(data.customer_id)
    .bind(&data.customer_name)
    .bind(&data.customer_phone)
    .bind(&data.delivery_address)
    .bind(data.order_type)
    .bind(data.table_id)
    .bind(totals.subtotal)
    .bind(totals.tax)
    .bind(totals.delivery_fee)
    .bind(totals.total)
    .bind(&data.note)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for line in &lines {
        sqlx::query(
            "INSERT INTO order_items (id, order_id, menu_item_id, name, unit_price, quantity, line_total, note) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(snowflake_id())
        .bind(order_id)
        .bind(line.menu_item_id)
        .bind(&line.name)
        .bind(line.unit_price)
        .bind(line.quantity)
        .bind(line.line_total)
        .bind(&line.note)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query(
        "INSERT INTO order_timeline (id, order_id, status, note, created_at) VALUES (?1, ?2, 'pending', ?3, ?4)",
    )
    .bind(snowflake_id())
    .bind(order_id)
    .bind("Order placed")
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    get_detail(pool, tenant_id, order_id).await
}

/// Transition an order to a new status, appending a timeline row.
///
/// Terminal orders (completed/cancelled) accept no further transitions.
pub async fn update_status(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    new_status: OrderStatus,
    note: Option<String>,
) -> RepoResult<OrderDetail> {
    let order = get(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))?;

    if order.status.is_terminal() {
        return Err(RepoError::Validation(format!(
            "Order is already {} and cannot change status",
            order.status.as_str()
        )));
    }
    if order.status == new_status {
        return Err(RepoError::Validation(format!(
            "Order is already {}",
            new_status.as_str()
        )));
    }

    let now = now_millis();
    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE orders SET status = ?, updated_at = ? WHERE tenant_id = ? AND id = ?")
        .bind(new_status)
        .bind(now)
        .bind(tenant_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        "INSERT INTO order_timeline (id, order_id, status, note, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(snowflake_id())
    .bind(id)
    .bind(new_status)
    .bind(&note)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    get_detail(pool, tenant_id, id).await
}

/// Cancel an order. Rows are never physically deleted so receipts and
/// reports stay intact.
pub async fn cancel(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<OrderDetail> {
    update_status(
        pool,
        tenant_id,
        id,
        OrderStatus::Cancelled,
        Some("Order cancelled".into()),
    )
    .await
}
