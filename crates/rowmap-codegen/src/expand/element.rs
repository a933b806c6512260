use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_element_impl(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.record.ident;
        let idents = self.record.fields.iter().map(|field| &field.ident);

        quote! {
            impl #rowmap::Element for #ident {
                fn shape(&self) -> #rowmap::Shape {
                    #rowmap::Shape::Record(<Self as #rowmap::Record>::schema())
                }

                fn scan_targets(&mut self) -> Vec<&mut dyn #rowmap::Scan> {
                    <Self as #rowmap::Record>::fields_mut(self)
                }

                fn zeroed() -> Self {
                    Self {
                        #( #idents: ::core::default::Default::default(), )*
                    }
                }

                fn scratch(&self) -> Box<dyn #rowmap::Element> {
                    Box::new(<Self as #rowmap::Element>::zeroed())
                }

                fn commit(&mut self, scratch: Box<dyn #rowmap::Element>) {
                    #rowmap::commit(self, scratch)
                }

                fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
                    self
                }
            }
        }
    }

    pub(super) fn expand_into_destination_impl(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.record.ident;

        quote! {
            impl #rowmap::IntoDestination for #ident {
                fn as_destination(&mut self) -> #rowmap::Destination<'_> {
                    #rowmap::Destination::Record(self)
                }
            }
        }
    }
}
