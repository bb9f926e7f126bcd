use pretty_assertions::assert_eq;
use rowmap::{
    Decimal, Entity, Getter, Materializer, Primitive, Registry, Result, Type, Uuid, Value,
};
use std::sync::Arc;
use tests::rows;

/// Amount in cents, stored as an integer column.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Money(i64);

impl Primitive for Money {
    const TYPE: Type = Type::Opaque("Money");

    fn load(value: Value) -> Result<Self> {
        Ok(Self(i64::try_from(value)?))
    }
}

#[derive(Debug, Default, Entity)]
struct Payment {
    id: Uuid,
    amount: Money,
    fee: Option<Money>,
}

fn money_getter() -> Getter {
    Getter::new("get_money", Type::Opaque("Money"), |record, ordinal| {
        Ok(Value::I64(record.get_i64(ordinal)? * 100))
    })
}

#[test]
fn opaque_types_use_the_registered_getter() {
    let registry = Registry::builder()
        .getter_for::<Money>(money_getter())
        .unwrap()
        .build();

    let id = Uuid::from_u128(42);
    let rows = rows! {
        ["Id", "Amount", "Fee"],
        [id, 12_i64, Value::Null],
    };

    let payment: Arc<Payment> = Materializer::new(Arc::new(registry))
        .materialize_one(rows)
        .unwrap()
        .unwrap();

    assert_eq!(payment.id, id);
    assert_eq!(payment.amount, Money(1200));
    assert_eq!(payment.fee, None);
}

#[test]
fn opaque_types_without_a_getter_fail_every_time() {
    let materializer = Materializer::new(Arc::new(Registry::default()));
    let read = || {
        materializer
            .materialize::<Payment>(rows! {
                ["Id", "Amount"],
                [Uuid::nil(), 1_i64],
            })
            .unwrap_err()
    };

    let first = read();
    let second = read();

    assert!(first.is_unsupported_type());
    assert_eq!(
        first.to_string(),
        "materializing Payment: row 1: unsupported type: no getter registered for Opaque(Money) (used by Payment.amount)"
    );
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn getter_must_return_its_registered_type() {
    let err = Registry::builder()
        .getter(Type::Opaque("Money"), Getter::new("get_i64", Type::I64, |record, ordinal| {
            Ok(Value::I64(record.get_i64(ordinal)?))
        }))
        .unwrap_err();

    assert!(err.is_invalid_accessor_signature());
}

#[derive(Debug, Default, Entity)]
struct Tag {
    id: i32,
    label: String,
}

#[test]
fn builtin_getters_can_be_replaced() {
    let registry = Registry::builder()
        .getter(
            Type::String,
            Getter::new("get_trimmed", Type::String, |record, ordinal| {
                Ok(Value::String(record.get_string(ordinal)?.trim().to_string()))
            }),
        )
        .unwrap()
        .build();

    let tag: Arc<Tag> = Materializer::new(Arc::new(registry))
        .materialize_one(rows! {
            ["Id", "Label"],
            [1, "  urgent "],
        })
        .unwrap()
        .unwrap();

    assert_eq!(tag.label, "urgent");
}

#[derive(Debug, Default, Entity)]
struct Attachment {
    id: i32,
    data: Vec<u8>,
    initials: Vec<char>,
    price: Decimal,
    flagged: bool,
    rating: Option<f32>,
}

#[test]
fn blobs_and_scalars() {
    let rows = rows! {
        ["Id", "Data", "Initials", "Price", "Flagged", "Rating"],
        [1, vec![0xde_u8, 0xad, 0xbe, 0xef], "ada", Decimal::new(1999, 2), true, 4.5_f32],
    };

    let attachment: Arc<Attachment> = Materializer::default()
        .materialize_one(rows)
        .unwrap()
        .unwrap();

    assert_eq!(attachment.data, [0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(attachment.initials, ['a', 'd', 'a']);
    assert_eq!(attachment.price.to_string(), "19.99");
    assert!(attachment.flagged);
    assert_eq!(attachment.rating, Some(4.5));
}

#[test]
fn mismatched_column_type_is_a_conversion_error() {
    let rows = rows! {
        ["Id", "Label"],
        ["not a number", "x"],
    };

    let err = Materializer::default().materialize::<Tag>(rows).unwrap_err();
    assert!(err.to_string().ends_with("cannot convert String to i32"), "{err}");
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Primitive)]
enum Status {
    #[default]
    Draft = 0,
    Sent = 1,
    Paid = 2,
}

#[derive(Debug, Default, Entity)]
struct Bill {
    id: i32,
    status: Status,
    previous: Option<Status>,
}

#[test]
fn enums_load_from_their_discriminant() {
    let bills: Vec<Arc<Bill>> = Materializer::default()
        .materialize(rows! {
            ["Id", "Status", "Previous"],
            [1, 2, 1],
            [2, 0, Value::Null],
        })
        .unwrap();

    assert_eq!(bills[0].status, Status::Paid);
    assert_eq!(bills[0].previous, Some(Status::Sent));
    assert_eq!(bills[1].status, Status::Draft);
    assert_eq!(bills[1].previous, None);
}

#[test]
fn unknown_discriminant_fails() {
    let err = Materializer::default()
        .materialize::<Bill>(rows! {
            ["Id", "Status"],
            [1, 9],
        })
        .unwrap_err();

    assert!(err.to_string().ends_with("cannot convert I64 to Status"), "{err}");
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Primitive)]
#[repr(i64)]
enum Region {
    #[default]
    Local = 1,
    Remote = 5_000_000_000,
}

#[derive(Debug, Default, Entity)]
struct Route {
    id: i32,
    region: Region,
}

#[test]
fn enums_wider_than_i32() {
    let routes: Vec<Arc<Route>> = Materializer::default()
        .materialize(rows! {
            ["Id", "Region"],
            [1, 5_000_000_000_i64],
            [2, 1_i16],
        })
        .unwrap();

    assert_eq!(routes[0].region, Region::Remote);
    assert_eq!(routes[1].region, Region::Local);
}
