use pretty_assertions::assert_eq;
use rowmap::{Config, Entity, HasMany, Materializer, Membership, Registry, Value};
use std::sync::Arc;
use tests::{assert_same, rows, Order, Parent};

fn ids(parent: &Parent) -> Vec<i32> {
    parent.orders.get().iter().map(|order| order.id).collect()
}

fn materializer(membership: Membership) -> Materializer {
    Materializer::new(Arc::new(Registry::new(Config::new().membership(membership))))
}

#[test]
fn children_attach_to_their_parent() {
    let rows = rows! {
        ["Id", "Name", "Order_Id"],
        [1, "A", 10],
        [1, "A", 11],
        [2, "B", 20],
    };

    let parents: Vec<Arc<Parent>> = Materializer::default().materialize(rows).unwrap();

    assert_eq!(parents.len(), 2);
    assert_eq!(parents[0].id, 1);
    assert_eq!(parents[0].name, "A");
    assert_eq!(ids(&parents[0]), [10, 11]);
    assert_eq!(parents[1].id, 2);
    assert_eq!(parents[1].name, "B");
    assert_eq!(ids(&parents[1]), [20]);
}

#[test]
fn out_of_order_rows_join_the_first_instance() {
    let rows = rows! {
        ["Id", "Name", "Order_Id"],
        [1, "A", 10],
        [2, "B", 20],
        [1, "A", 12],
    };

    let parents: Vec<Arc<Parent>> = Materializer::default().materialize(rows).unwrap();

    assert_eq!(
        parents.iter().map(|parent| parent.id).collect::<Vec<_>>(),
        [1, 2]
    );
    assert_eq!(ids(&parents[0]), [10, 12]);
    assert_eq!(ids(&parents[1]), [20]);
}

#[test]
fn duplicate_rows_append_the_same_child() {
    let rows = rows! {
        ["Id", "Name", "Order_Id"],
        [1, "A", 10],
        [1, "A", 10],
    };

    let parents: Vec<Arc<Parent>> = materializer(Membership::Append).materialize(rows).unwrap();

    assert_eq!(parents.len(), 1);

    let orders = parents[0].orders.get();
    assert_eq!(orders.len(), 2);
    assert_same!(orders[0], orders[1]);
}

#[test]
fn distinct_membership_skips_repeated_children() {
    let rows = rows! {
        ["Id", "Name", "Order_Id"],
        [1, "A", 10],
        [1, "A", 10],
        [1, "A", 11],
    };

    let parents: Vec<Arc<Parent>> = materializer(Membership::Distinct)
        .materialize(rows)
        .unwrap();

    assert_eq!(ids(&parents[0]), [10, 11]);
}

#[test]
fn null_child_key_leaves_the_list_empty() {
    // LEFT JOIN with no matching order
    let rows = rows! {
        ["Id", "Name", "Order_Id"],
        [1, "A", Value::Null],
        [2, "B", 20],
    };

    let parents: Vec<Arc<Parent>> = Materializer::default().materialize(rows).unwrap();

    assert_eq!(parents.len(), 2);
    assert!(parents[0].orders.is_empty());
    assert_eq!(ids(&parents[1]), [20]);
}

#[test]
fn unmapped_children_are_never_materialized() {
    let rows = rows! {
        ["Id", "Name"],
        [1, "A"],
    };

    let parents: Vec<Arc<Parent>> = Materializer::default().materialize(rows).unwrap();

    assert_eq!(parents.len(), 1);
    assert!(parents[0].orders.is_empty());
}

#[test]
fn children_are_keyed_per_traversal() {
    let materializer = Materializer::default();
    let read = || {
        materializer
            .materialize::<Parent>(rows! {
                ["Id", "Name", "Order_Id"],
                [1, "A", 10],
            })
            .unwrap()
    };

    let first = read();
    let second = read();

    assert!(!Arc::ptr_eq(&first[0], &second[0]));
    assert!(!Arc::ptr_eq(
        &first[0].orders.get()[0],
        &second[0].orders.get()[0]
    ));
}

#[test]
fn children_can_be_read_as_roots() {
    let rows = rows! {
        ["Id", "Name", "Order_Id"],
        [1, "A", 10],
        [1, "A", 11],
        [2, "B", 10],
    };

    let orders: Vec<Arc<Order>> = Materializer::default().materialize(rows).unwrap();

    assert_eq!(
        orders.iter().map(|order| order.id).collect::<Vec<_>>(),
        [10, 11]
    );
}

type Orders = HasMany<Order>;

#[derive(Debug, Default, Entity)]
#[entity(constructor = Account::new, accessor = "constructor")]
struct Account {
    id: i32,
    #[relation]
    orders: Orders,
}

impl Account {
    fn new(id: i32) -> Self {
        Self {
            id,
            orders: Orders::default(),
        }
    }
}

#[test]
fn aliased_collection_on_a_constructed_entity() {
    let accounts: Vec<Arc<Account>> = Materializer::default()
        .materialize(rows! {
            ["Id", "Order_Id"],
            [7, 10],
            [7, 11],
        })
        .unwrap();

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, 7);
    assert_eq!(
        accounts[0]
            .orders
            .get()
            .iter()
            .map(|order| order.id)
            .collect::<Vec<_>>(),
        [10, 11]
    );
}
