mod element;
mod schema;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let element_impl = self.expand_element_impl();
        let into_destination_impl = self.expand_into_destination_impl();

        wrap_in_const(quote! {
            #record_impl
            #element_impl
            #into_destination_impl
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        rowmap: quote!(_rowmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
