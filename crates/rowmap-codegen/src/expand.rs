mod entity;
mod primitive;

use crate::schema::{Entity, Enum};

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn entity(entity: &Entity) -> TokenStream {
    wrap_in_const(entity::expand(entity, &support()))
}

pub(super) fn primitive(primitive: &Enum) -> TokenStream {
    wrap_in_const(primitive::expand(primitive, &support()))
}

/// Path prefix for runtime types used by generated code.
fn support() -> TokenStream {
    quote!(_rowmap::codegen_support)
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
