use crate::schema::{entity_attr::Accessor, Entity, Field};

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn expand(entity: &Entity, rowmap: &TokenStream) -> TokenStream {
    let ident = &entity.ident;
    let name = &entity.name;

    let defaults = entity.fields.iter().map(|field| {
        let ident = &field.ident;
        quote!(#ident: #rowmap::Default::default())
    });

    let fields = entity.properties().map(expand_field);
    let constructor = expand_constructor(entity, rowmap);

    let accessor = entity.attr.accessor.map(|accessor| {
        let strategy = match accessor {
            Accessor::Property => quote!(Property),
            Accessor::Constructor => quote!(Constructor),
        };
        quote!(.accessor(#rowmap::AccessorStrategy::#strategy))
    });

    quote! {
        impl #rowmap::Entity for #ident {
            fn model() -> #rowmap::Result<#rowmap::Model<Self>> {
                #rowmap::Model::builder(#name)
                    .instantiate(|| Self {
                        #( #defaults, )*
                    })
                    #( #fields )*
                    #constructor
                    #accessor
                    .build()
            }
        }
    }
}

fn expand_field(field: &Field) -> TokenStream {
    let ident = &field.ident;
    let name = &field.name;
    let ty = &field.ty;

    let column = field.column.as_ref().map(|column| quote!(.column(#column)));

    quote! {
        .field::<#ty>(#name, |m: &Self| &m.#ident, |m: &mut Self| &mut m.#ident)
        #column
    }
}

fn expand_constructor(entity: &Entity, rowmap: &TokenStream) -> Option<TokenStream> {
    let path = entity.attr.constructor.as_ref()?;

    let params = entity.params().map(|field| {
        let name = &field.name;
        let ty = &field.ty;
        let column = field.column.as_ref().map(|column| quote!(.column(#column)));

        quote!(#rowmap::Param::of::<#ty>(#name) #column)
    });

    let count = entity.params().count();
    let construct = if count == 0 {
        quote!(|_: #rowmap::Args| Ok(#path()))
    } else {
        let args = (0..count).map(|index| quote!(args.get(#index)?));
        quote!(|mut args: #rowmap::Args| Ok(#path( #( #args, )* )))
    };

    Some(quote! {
        .constructor([ #( #params, )* ], #construct)
    })
}
