use super::{ErrorSet, Field};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Type name used in diagnostics
    pub(crate) name: String,

    /// Record fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        for node in &node.named {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            name: ast.ident.unraw().to_string(),
            fields,
        })
    }
}
