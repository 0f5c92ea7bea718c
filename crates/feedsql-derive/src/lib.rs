use proc_macro::TokenStream;

mod record;

/// Derive `Record` (and a rejecting `Column`) for a struct with named fields.
///
/// Field metadata comes from `#[sql(column = "...", reference = "...",
/// index = "...")]`. A field without `column` still compiles; deriving its
/// table fails at run time.
#[proc_macro_derive(Record, attributes(sql))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}
