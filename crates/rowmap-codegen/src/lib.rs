mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Record)]` for the given struct.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let record = schema::Record::from_ast(&item)?;

    Ok(expand::record(&record))
}
