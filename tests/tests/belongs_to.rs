use pretty_assertions::assert_eq;
use rowmap::{BelongsTo, Entity, Materializer, Primitive, Result, Type, Value};
use std::sync::Arc;
use tests::{assert_same, rows, Customer, Order};

#[test]
fn orders_share_their_customer() {
    let rows = rows! {
        ["Order_Id", "Customer_Id", "Customer_Name"],
        [10, 7, "Ada"],
        [11, 7, "Ada"],
        [12, 8, "Grace"],
    };

    let orders: Vec<Arc<Order>> = Materializer::default().materialize(rows).unwrap();
    assert_eq!(orders.len(), 3);

    let customers: Vec<Arc<Customer>> = orders
        .iter()
        .map(|order| order.customer.get().unwrap())
        .collect();

    assert_same!(customers[0], customers[1]);
    assert!(!Arc::ptr_eq(&customers[0], &customers[2]));
    assert_eq!(customers[0].id, 7);
    assert_eq!(customers[0].name, "Ada");
    assert_eq!(customers[2].name, "Grace");
}

#[test]
fn null_target_key_leaves_the_reference_empty() {
    let rows = rows! {
        ["Order_Id", "Customer_Id", "Customer_Name"],
        [10, Value::Null, Value::Null],
    };

    let order: Arc<Order> = Materializer::default()
        .materialize_one(rows)
        .unwrap()
        .unwrap();

    assert!(!order.customer.is_some());
}

#[test]
fn prefixed_columns_map_when_the_plain_name_is_absent() {
    #[derive(Debug, Default, Entity)]
    struct Shipment {
        id: i32,
        carrier: BelongsTo<Carrier>,
    }

    #[derive(Debug, Default, Entity)]
    struct Carrier {
        code: String,
        name: String,
    }

    let rows = rows! {
        ["Id", "Carrier_Code", "Carrier_Name"],
        [1, "DHL", "DHL Express"],
    };

    let shipment: Arc<Shipment> = Materializer::default()
        .materialize_one(rows)
        .unwrap()
        .unwrap();

    let carrier = shipment.carrier.get().unwrap();
    assert_eq!(shipment.id, 1);
    assert_eq!(carrier.code, "DHL");
    assert_eq!(carrier.name, "DHL Express");
}

/// Only readable with a registered getter.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Coordinates(i64);

impl Primitive for Coordinates {
    const TYPE: Type = Type::Opaque("Coordinates");

    fn load(value: Value) -> Result<Self> {
        Ok(Self(i64::try_from(value)?))
    }
}

#[derive(Debug, Default, Entity)]
struct Warehouse {
    #[column("Warehouse_Id")]
    id: i32,
    location: Coordinates,
}

#[derive(Debug, Default, Entity)]
struct Stock {
    sku: String,
    warehouse: BelongsTo<Warehouse>,
}

#[test]
fn unmapped_targets_are_not_probed() {
    let rows = rows! {
        ["Sku"],
        ["A-1"],
    };

    // Reading `Warehouse` would fail: nothing can read `Coordinates`.
    let stock: Arc<Stock> = Materializer::default()
        .materialize_one(rows)
        .unwrap()
        .unwrap();

    assert_eq!(stock.sku, "A-1");
    assert!(!stock.warehouse.is_some());
}

#[test]
fn mapped_targets_with_unsupported_types_fail() {
    let rows = rows! {
        ["Sku", "Warehouse_Id"],
        ["A-1", 3],
    };

    let err = Materializer::default()
        .materialize::<Stock>(rows)
        .unwrap_err();

    assert!(err.is_unsupported_type());
    assert!(err.to_string().contains("Warehouse.location"), "{err}");
}
