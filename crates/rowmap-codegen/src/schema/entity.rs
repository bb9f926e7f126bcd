use super::{EntityAttr, ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Entity {
    /// The struct identifier
    pub(crate) ident: syn::Ident,

    /// Model name, used for `Name_Property` column matching
    pub(crate) name: String,

    /// Every field of the struct, including skipped ones
    pub(crate) fields: Vec<Field>,

    pub(crate) attr: EntityAttr,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "entities cannot have generic parameters",
            ));
        }

        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        let attr = EntityAttr::from_ast(&ast.attrs)?;

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        for node in &node.named {
            fields.extend(errs.take(Field::from_ast(node)));
        }

        let mut seen = std::collections::HashSet::new();
        for field in fields.iter().filter(|field| !field.skip) {
            if !seen.insert(field.name.to_ascii_lowercase()) {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    "property names must be unique ignoring case",
                ));
            }
        }

        errs.finish()?;

        let name = attr
            .name
            .as_ref()
            .map(syn::LitStr::value)
            .unwrap_or_else(|| ast.ident.to_string());

        Ok(Self {
            ident: ast.ident.clone(),
            name,
            fields,
            attr,
        })
    }

    /// Fields that become properties of the model.
    pub(crate) fn properties(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.skip)
    }

    /// Constructor parameters: the simple properties, in declaration order.
    pub(crate) fn params(&self) -> impl Iterator<Item = &Field> {
        self.properties().filter(|field| field.kind.is_simple())
    }
}
