/// A fieldless enum stored as its integer discriminant.
#[derive(Debug)]
pub(crate) struct Enum {
    pub(crate) ident: syn::Ident,
    pub(crate) variants: Vec<syn::Ident>,
}

impl Enum {
    pub(crate) fn from_ast(ast: &syn::ItemEnum) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "primitive enums cannot have generic parameters",
            ));
        }

        let mut variants = vec![];

        for variant in &ast.variants {
            if !matches!(variant.fields, syn::Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    variant,
                    "primitive enum variants cannot have fields",
                ));
            }

            variants.push(variant.ident.clone());
        }

        Ok(Self {
            ident: ast.ident.clone(),
            variants,
        })
    }
}
