use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    pub(crate) ident: syn::Ident,

    /// Property name: the field identifier without any `r#` prefix
    pub(crate) name: String,

    pub(crate) ty: syn::Type,

    pub(crate) kind: FieldKind,

    /// `#[column("...")]`
    pub(crate) column: Option<syn::LitStr>,

    /// `#[skip]`: left at its default and never mapped
    pub(crate) skip: bool,
}

/// Classification by the field type's outer name. The runtime classifies
/// again through the `Field` trait; this one only decides which fields can
/// be constructor parameters.
///
/// Only a type path ending in `BelongsTo` or `HasMany` is seen as a
/// relation. A field whose type is an alias for one must be marked
/// `#[relation]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Simple,
    Relation,
}

impl FieldKind {
    pub(crate) fn is_simple(self) -> bool {
        self == Self::Simple
    }

    fn of(ty: &syn::Type) -> Self {
        let syn::Type::Path(path) = ty else {
            return Self::Simple;
        };

        match path.path.segments.last() {
            Some(segment) if segment.ident == "BelongsTo" || segment.ident == "HasMany" => {
                Self::Relation
            }
            _ => Self::Simple,
        }
    }
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut column = None;
        let mut skip = false;
        let mut relation = false;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    return Err(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                }
                column = Some(attr.parse_args::<syn::LitStr>()?);
            } else if attr.path().is_ident("skip") {
                attr.meta.require_path_only()?;
                skip = true;
            } else if attr.path().is_ident("relation") {
                attr.meta.require_path_only()?;
                relation = true;
            }
        }

        if skip && column.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "#[skip] fields cannot have a #[column]",
            ));
        }

        if relation && column.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "#[relation] fields cannot have a #[column]",
            ));
        }

        let kind = if relation {
            FieldKind::Relation
        } else {
            FieldKind::of(&field.ty)
        };

        Ok(Self {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            kind,
            column,
            skip,
        })
    }
}
