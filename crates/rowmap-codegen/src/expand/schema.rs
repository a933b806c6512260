use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.record.ident;
        let name = &self.record.name;
        let fields = self.expand_field_descriptors();
        let fields_mut = self.expand_fields_mut();

        quote! {
            impl #rowmap::Record for #ident {
                fn schema() -> &'static #rowmap::RecordSchema {
                    static SCHEMA: std::sync::OnceLock<#rowmap::RecordSchema> =
                        std::sync::OnceLock::new();

                    SCHEMA.get_or_init(|| {
                        #rowmap::RecordSchema::new(#name, vec![ #( #fields, )* ])
                    })
                }

                fn fields_mut(&mut self) -> Vec<&mut dyn #rowmap::Scan> {
                    #fields_mut
                }
            }
        }
    }

    fn expand_field_descriptors(&self) -> Vec<TokenStream> {
        let rowmap = &self.rowmap;

        self.record
            .fields
            .iter()
            .map(|field| {
                let name = &field.name;
                let ty = &field.ty;

                let column = field.column.as_ref().map(|column| {
                    let column = &column.name;
                    quote!(.column(#column))
                });

                quote! {
                    #rowmap::FieldDescriptor::new(
                        #name,
                        <#ty as #rowmap::Primitive>::ty(),
                        <#ty as #rowmap::Primitive>::NULLABLE,
                    )
                    #column
                }
            })
            .collect()
    }

    fn expand_fields_mut(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let idents = self.record.fields.iter().map(|field| &field.ident);

        quote! {
            vec![ #( &mut self.#idents as &mut dyn #rowmap::Scan, )* ]
        }
    }
}
