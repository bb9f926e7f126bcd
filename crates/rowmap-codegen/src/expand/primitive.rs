use crate::schema::Enum;

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn expand(primitive: &Enum, rowmap: &TokenStream) -> TokenStream {
    let ident = &primitive.ident;
    let name = ident.to_string();
    let variants = &primitive.variants;

    quote! {
        impl #rowmap::Primitive for #ident {
            const TYPE: #rowmap::Type = #rowmap::Type::I64;

            fn load(value: #rowmap::Value) -> #rowmap::Result<Self> {
                let Some(discriminant) = value.to_i64() else {
                    return Err(#rowmap::Error::type_conversion(value, #name));
                };

                #(
                    if discriminant == Self::#variants as i64 {
                        return Ok(Self::#variants);
                    }
                )*

                Err(#rowmap::Error::type_conversion(value, #name))
            }
        }
    }
}
