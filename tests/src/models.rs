use rowmap::{BelongsTo, Entity, HasMany};

#[derive(Debug, Default, Entity)]
pub struct Parent {
    pub id: i32,
    pub name: String,
    pub orders: HasMany<Order>,
}

/// The key column carries a prefix so it does not collide with the
/// parent's `Id` in joined rows.
#[derive(Debug, Default, Entity)]
pub struct Order {
    #[column("Order_Id")]
    pub id: i32,
    pub customer: BelongsTo<Customer>,
}

#[derive(Debug, Default, Entity)]
pub struct Customer {
    #[column("Customer_Id")]
    pub id: i64,

    #[column("Customer_Name")]
    pub name: String,
}

#[derive(Debug, Default, Entity)]
#[entity(constructor = Invoice::new, accessor = "constructor")]
pub struct Invoice {
    pub number: i64,
    pub total: f64,
    pub memo: Option<String>,
    pub reference: String,

    /// Set only when built through `new`
    #[skip]
    pub constructed: bool,
}

impl Invoice {
    pub fn new(number: i64, total: f64, memo: Option<String>, reference: String) -> Self {
        Self {
            number,
            total,
            memo,
            reference,
            constructed: true,
        }
    }
}
