use super::Category;
use crate::{
    relation::{BelongsTo, BelongsToRelation, HasMany, HasManyRelation, Relation},
    Entity, Primitive, Result,
};

use rowmap_core::{Type, Value};

use std::fmt;

/// A named property of entity `T`.
pub struct Property<T> {
    pub(crate) name: &'static str,

    /// Column name used instead of `name` when matching columns.
    pub(crate) column: Option<&'static str>,

    pub(crate) kind: PropertyKind<T>,
}

/// How a property is populated, decided by the property's Rust type.
pub struct PropertyKind<T> {
    repr: Repr<T>,
}

enum Repr<T> {
    Simple(Simple<T>),
    Complex(Box<dyn Relation<T>>),
    Collection(Box<dyn Relation<T>>),
}

struct Simple<T> {
    ty: Type,
    nullable: bool,
    assign: Box<dyn Fn(&mut T, Value) -> Result<()> + Send + Sync>,
}

impl<T> Property<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The name matched against record columns.
    pub fn column(&self) -> &'static str {
        self.column.unwrap_or(self.name)
    }

    pub fn category(&self) -> Category {
        match self.kind.repr {
            Repr::Simple(_) => Category::Simple,
            Repr::Complex(_) => Category::Complex,
            Repr::Collection(_) => Category::Collection,
        }
    }

    /// Value type of a simple property.
    pub fn ty(&self) -> Option<Type> {
        match &self.kind.repr {
            Repr::Simple(simple) => Some(simple.ty),
            _ => None,
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(&self.kind.repr, Repr::Simple(simple) if simple.nullable)
    }

    pub(crate) fn assign(&self, target: &mut T, value: Value) -> Result<()> {
        match &self.kind.repr {
            Repr::Simple(simple) => (simple.assign)(target, value),
            _ => Err(rowmap_core::err!(
                "property `{}` is a relation and cannot be assigned a value",
                self.name
            )),
        }
    }

    pub(crate) fn relation(&self) -> Option<&dyn Relation<T>> {
        match &self.kind.repr {
            Repr::Complex(relation) | Repr::Collection(relation) => Some(&**relation),
            Repr::Simple(_) => None,
        }
    }
}

impl<T> PropertyKind<T> {
    pub(crate) fn simple<P: Primitive>(get_mut: fn(&mut T) -> &mut P) -> Self
    where
        T: 'static,
    {
        Self {
            repr: Repr::Simple(Simple {
                ty: P::TYPE,
                nullable: P::NULLABLE,
                assign: Box::new(move |target, value| {
                    *get_mut(target) = P::load(value)?;
                    Ok(())
                }),
            }),
        }
    }

    pub(crate) fn complex<R: Entity>(get: fn(&T) -> &BelongsTo<R>) -> Self
    where
        T: Entity,
    {
        Self {
            repr: Repr::Complex(Box::new(BelongsToRelation { get })),
        }
    }

    pub(crate) fn collection<R: Entity>(get: fn(&T) -> &HasMany<R>) -> Self
    where
        T: Entity,
    {
        Self {
            repr: Repr::Collection(Box::new(HasManyRelation { get })),
        }
    }
}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = fmt.debug_struct("Property");
        s.field("name", &self.name);
        s.field("column", &self.column());
        s.field("category", &self.category());

        match &self.kind.repr {
            Repr::Simple(simple) => {
                s.field("ty", &simple.ty);
                s.field("nullable", &simple.nullable);
            }
            Repr::Complex(relation) | Repr::Collection(relation) => {
                s.field("target", &relation.target_name());
            }
        }

        s.finish()
    }
}
