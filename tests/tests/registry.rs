use pretty_assertions::assert_eq;
use rowmap::{
    AccessorStrategy, Config, Entity, Error, Materializer, Membership, Model, Registry, Result,
};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread,
};
use tests::{rows, Invoice, Parent};

#[test]
fn concurrent_first_use() {
    let materializer = Materializer::new(Arc::new(Registry::default()));

    let results: Vec<Vec<i32>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let materializer = materializer.clone();
                scope.spawn(move || {
                    let rows = rows! {
                        ["Id", "Name", "Order_Id"],
                        [i, "P", i * 10],
                        [i, "P", i * 10 + 1],
                    };

                    let parents: Vec<Arc<Parent>> = materializer.materialize(rows).unwrap();
                    parents[0].orders.get().iter().map(|order| order.id).collect()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for (i, ids) in results.into_iter().enumerate() {
        let i = i as i32;
        assert_eq!(ids, [i * 10, i * 10 + 1]);
    }
}

#[test]
fn registries_are_independent() {
    let rows = || {
        rows! {
            ["Id", "Name", "Order_Id"],
            [1, "A", 10],
            [1, "A", 10],
        }
    };

    let append = Materializer::new(Arc::new(Registry::default()));
    let distinct = Materializer::new(Arc::new(Registry::new(
        Config::new().membership(Membership::Distinct),
    )));

    let a: Vec<Arc<Parent>> = append.materialize(rows()).unwrap();
    let d: Vec<Arc<Parent>> = distinct.materialize(rows()).unwrap();

    assert_eq!(a[0].orders.len(), 2);
    assert_eq!(d[0].orders.len(), 1);
}

#[test]
fn shared_registry_is_a_singleton() {
    assert!(Arc::ptr_eq(&Registry::shared(), &Registry::shared()));
    assert!(Arc::ptr_eq(
        Materializer::default().registry(),
        &Registry::shared()
    ));
}

#[test]
fn config_from_json() {
    let config: Config = serde_json::from_str(
        r#"{
            "accessors": { "Invoice": "property" },
            "membership": "distinct"
        }"#,
    )
    .unwrap();

    assert_eq!(config.strategy_for("Invoice"), Some(AccessorStrategy::Property));
    assert_eq!(config.strategy_for("Parent"), None);

    let materializer = Materializer::new(Arc::new(Registry::new(config)));
    let invoice: Arc<Invoice> = materializer
        .materialize_one(rows! {
            ["Number", "Total"],
            [1_i64, 2.5],
        })
        .unwrap()
        .unwrap();

    assert!(!invoice.constructed);
    assert_eq!(invoice.total, 2.5);
}

#[test]
fn models_are_cached() {
    let registry = Registry::default();

    let first = registry.model::<Parent>().unwrap();
    let second = registry.model::<Parent>().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.name(), "Parent");
    assert_eq!(
        first
            .properties()
            .iter()
            .map(|property| property.name())
            .collect::<Vec<_>>(),
        ["id", "name", "orders"]
    );
}

static BROKEN_BUILDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
struct Broken;

impl Entity for Broken {
    fn model() -> Result<Model<Self>> {
        BROKEN_BUILDS.fetch_add(1, Ordering::SeqCst);
        Err(Error::invalid_schema("Broken has no properties"))
    }
}

#[test]
fn failed_models_are_cached() {
    let registry = Arc::new(Registry::default());

    let first = registry.model::<Broken>().unwrap_err();
    let second = registry.model::<Broken>().unwrap_err();

    assert!(Error::ptr_eq(&first, &second));
    assert!(first.is_invalid_schema());

    let err = Materializer::new(registry)
        .materialize::<Broken>(rows! {
            ["Id"],
            [1],
        })
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(BROKEN_BUILDS.load(Ordering::SeqCst), 1);
}
