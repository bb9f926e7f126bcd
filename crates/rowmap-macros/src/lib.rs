extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Entity, attributes(entity, column, relation, skip))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate_entity(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_derive(Primitive)]
pub fn derive_primitive(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate_primitive(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
