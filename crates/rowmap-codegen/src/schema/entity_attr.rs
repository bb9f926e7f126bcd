/// Struct-level `#[entity(...)]` options.
#[derive(Debug, Default)]
pub(crate) struct EntityAttr {
    /// `name = "..."`: overrides the model name
    pub(crate) name: Option<syn::LitStr>,

    /// `constructor = path`: function taking every simple field in order
    pub(crate) constructor: Option<syn::Path>,

    /// `accessor = "property" | "constructor"`
    pub(crate) accessor: Option<Accessor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Accessor {
    Property,
    Constructor,
}

impl EntityAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut ret = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("entity") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if ret.name.is_some() {
                        return Err(meta.error("duplicate `name` option"));
                    }
                    ret.name = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("constructor") {
                    if ret.constructor.is_some() {
                        return Err(meta.error("duplicate `constructor` option"));
                    }
                    ret.constructor = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("accessor") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    ret.accessor = Some(match lit.value().as_str() {
                        "property" => Accessor::Property,
                        "constructor" => Accessor::Constructor,
                        _ => {
                            return Err(syn::Error::new_spanned(
                                lit,
                                "expected `\"property\"` or `\"constructor\"`",
                            ))
                        }
                    });
                } else {
                    return Err(meta.error("unknown entity option"));
                }

                Ok(())
            })?;
        }

        if ret.accessor == Some(Accessor::Constructor) && ret.constructor.is_none() {
            return Err(syn::Error::new(
                proc_macro2::Span::call_site(),
                "`accessor = \"constructor\"` requires a `constructor = ...` option",
            ));
        }

        Ok(ret)
    }
}
