mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate_entity(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let entity = schema::Entity::from_ast(&item)?;

    Ok(expand::entity(&entity))
}

pub fn generate_primitive(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemEnum = syn::parse2(input)?;
    let primitive = schema::Enum::from_ast(&item)?;

    Ok(expand::primitive(&primitive))
}
