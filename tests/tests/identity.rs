use pretty_assertions::assert_eq;
use rowmap::{err, IterReader, Materializer, Reader, ReaderExt, Result, Row, Rows, Value};
use std::sync::Arc;
use tests::{rows, Customer, Parent};

fn columns(names: &[&str]) -> Arc<[String]> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn repeated_roots_are_returned_once() {
    let rows = rows! {
        ["Customer_Id", "Customer_Name"],
        [1, "Ada"],
        [2, "Grace"],
        [1, "Ada"],
    };

    let customers: Vec<Arc<Customer>> = rows.materialize().unwrap();

    assert_eq!(
        customers.iter().map(|c| c.id).collect::<Vec<_>>(),
        [1, 2]
    );
}

#[test]
fn first_row_wins_for_a_key() {
    let rows = rows! {
        ["Customer_Id", "Customer_Name"],
        [1, "Ada"],
        [1, "Ada Lovelace"],
    };

    let customer: Arc<Customer> = rows.materialize_one().unwrap().unwrap();
    assert_eq!(customer.name, "Ada");
}

#[test]
fn rows_without_a_key_produce_nothing() {
    let rows = rows! {
        ["Customer_Id", "Customer_Name"],
        [Value::Null, "Nobody"],
        [3, "Linus"],
    };

    let customers: Vec<Arc<Customer>> = rows.materialize().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].id, 3);
}

#[test]
fn unmapped_entity_yields_no_roots() {
    let rows = rows! {
        ["Sku", "Quantity"],
        ["A-1", 4],
    };

    let customers: Vec<Arc<Customer>> = rows.materialize().unwrap();
    assert!(customers.is_empty());
}

#[test]
fn empty_reader_yields_no_roots() {
    let rows = Rows::new(["Customer_Id"]);

    assert!(rows.materialize::<Customer>().unwrap().is_empty());
    assert!(Rows::new(["Customer_Id"])
        .materialize_one::<Customer>()
        .unwrap()
        .is_none());
}

#[test]
fn single_record() {
    let mut rows = rows! {
        ["Customer_Id", "Customer_Name"],
        [9, "Barbara"],
    };
    let record = rows.read().unwrap().unwrap();

    let customer = Materializer::default()
        .materialize_record::<Customer>(record)
        .unwrap()
        .unwrap();

    assert_eq!(customer.id, 9);
    assert_eq!(customer.name, "Barbara");
}

#[test]
fn shape_changes_between_records() {
    let wide = columns(&["Id", "Name", "Order_Id"]);
    let narrow = columns(&["Order_Id", "Id"]);

    let records: Vec<Result<Row>> = vec![
        Ok(Row::new(wide.clone(), vec![1.into(), "A".into(), 10.into()])),
        Ok(Row::new(narrow.clone(), vec![11.into(), 1.into()])),
        Ok(Row::new(narrow, vec![20.into(), 2.into()])),
        Ok(Row::new(wide, vec![1.into(), "A".into(), 12.into()])),
    ];

    let parents: Vec<Arc<Parent>> = IterReader::new(records).materialize().unwrap();

    assert_eq!(parents.len(), 2);
    assert_eq!(parents[0].name, "A");
    assert_eq!(
        parents[0]
            .orders
            .get()
            .iter()
            .map(|order| order.id)
            .collect::<Vec<_>>(),
        [10, 11, 12]
    );

    // Created from a narrow row, where `Name` is not mapped
    assert_eq!(parents[1].id, 2);
    assert_eq!(parents[1].name, "");
}

#[test]
fn reader_errors_are_returned_with_context() {
    let records: Vec<Result<Row>> = vec![
        Ok(Row::new(columns(&["Customer_Id"]), vec![1.into()])),
        Err(err!("connection reset")),
    ];

    let mut out = vec![];
    let err = Materializer::default()
        .materialize_into::<Customer>(IterReader::new(records), &mut out)
        .unwrap_err();

    assert_eq!(err.to_string(), "materializing Customer: connection reset");
    assert_eq!(out.len(), 1);
}
