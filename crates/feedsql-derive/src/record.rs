use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, Ident, Type};

///
/// RecordInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(supports(struct_named))]
struct RecordInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, RecordField>,
}

///
/// RecordField
///

#[derive(Debug, FromField)]
#[darling(attributes(sql))]
struct RecordField {
    ident: Option<Ident>,
    ty: Type,

    #[darling(default)]
    column: Option<String>,

    #[darling(default)]
    reference: Option<String>,

    #[darling(default)]
    index: Option<String>,
}

impl RecordField {
    // static descriptor entry; optional clauses chain onto the const builder
    fn descriptor(&self, ident: &Ident) -> TokenStream {
        let name = ident.to_string();
        let ty = &self.ty;
        let column = self.column.iter().map(|c| quote!(.column(#c)));
        let reference = self.reference.iter().map(|r| quote!(.reference(#r)));
        let index = self.index.iter().map(|i| quote!(.index(#i)));

        quote! {
            ::feedsql::model::FieldDescriptor::new(
                #name,
                <#ty as ::feedsql::traits::Column>::KIND,
            )
            #(#column)*
            #(#reference)*
            #(#index)*
        }
    }
}

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };
    let record = match RecordInput::from_derive_input(&input) {
        Ok(record) => record,
        Err(err) => return err.write_errors(),
    };

    let ident = &record.ident;
    let table = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();

    let Data::Struct(fields) = &record.data else {
        return syn::Error::new_spanned(ident, "Record can only be derived for structs")
            .to_compile_error();
    };
    let fields = fields
        .iter()
        .filter_map(|field| field.ident.as_ref().map(|ident| (ident, field)))
        .collect::<Vec<_>>();

    let descriptors = fields
        .iter()
        .map(|(ident, field)| field.descriptor(ident));

    let value_arms = fields.iter().enumerate().map(|(index, (ident, _))| {
        quote! {
            #index => Some(::feedsql::traits::Column::to_value(&self.#ident)),
        }
    });

    let decode_arms = fields.iter().enumerate().map(|(index, (ident, _))| {
        quote! {
            #index => ::feedsql::traits::Column::decode_cell(&mut self.#ident, cell)
                .map_err(::core::convert::Into::into),
        }
    });

    quote! {
        impl #impl_generics ::feedsql::traits::Record for #ident #ty_generics #where_clause {
            const TABLE: &'static str = #table;

            const FIELDS: &'static [::feedsql::model::FieldDescriptor] = &[
                #(#descriptors),*
            ];

            fn field_value(&self, index: usize) -> Option<::feedsql::value::FieldValue> {
                match index {
                    #(#value_arms)*
                    _ => None,
                }
            }

            fn decode_field(
                &mut self,
                index: usize,
                cell: &::feedsql::value::Cell,
            ) -> Result<(), ::feedsql::error::Error> {
                let _ = cell;

                match index {
                    #(#decode_arms)*
                    _ => Err(::feedsql::error::BoundsError::FieldIndex {
                        table: #table,
                        index,
                        len: <Self as ::feedsql::traits::Record>::FIELDS.len(),
                    }
                    .into()),
                }
            }
        }

        impl #impl_generics ::feedsql::traits::Column for #ident #ty_generics #where_clause {
            const KIND: ::feedsql::model::ColumnKind = ::feedsql::model::ColumnKind::Nested(#table);

            fn to_value(&self) -> ::feedsql::value::FieldValue {
                ::feedsql::value::FieldValue::Nested(#table)
            }

            fn decode_cell(
                &mut self,
                _cell: &::feedsql::value::Cell,
            ) -> Result<(), ::feedsql::error::DecodeError> {
                Err(::feedsql::error::DecodeError::NestedRecord { nested: #table })
            }
        }
    }
}
