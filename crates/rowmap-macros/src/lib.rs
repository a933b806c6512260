extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `Record` for a struct with named fields.
///
/// Each field binds to the snake_case form of its name unless it carries a
/// `#[column("name")]` attribute.
#[proc_macro_derive(Record, attributes(column))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
