//! Derive macro for snaplit's `Snap` trait.
//!
//! `#[derive(Snap)]` teaches a struct to describe itself to the snaplit
//! renderer: its fully qualified type name and its fields in declaration
//! order. Field visibility is read straight off the AST: `pub` fields are
//! rendered, everything else is recorded as hidden and never evaluated, so
//! private fields do not need to implement `Snap` themselves.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, Visibility, parse_macro_input, parse_quote};

/// Derives `snaplit::Snap` for a struct with named fields (or a unit struct).
///
/// Tuple structs and enums are rejected: the emitted literal grammar only
/// covers named aggregates.
#[proc_macro_derive(Snap)]
pub fn derive_snap(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Snap can only be derived for structs",
            ));
        }
    };

    let fields = match &data.fields {
        Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Snap cannot be derived for tuple structs",
            ));
        }
    };

    let name = &input.ident;
    let name_str = name.to_string();

    // Description of every field, in declaration order. Hidden fields keep
    // their slot in the descriptor but their value is never touched.
    let field_values = fields.iter().map(|field| {
        let ident = field.ident.as_ref().unwrap();
        let field_name = ident.to_string();
        if matches!(field.vis, Visibility::Public(_)) {
            quote! {
                ::snaplit::FieldValue {
                    name: #field_name,
                    visible: true,
                    value: ::snaplit::Snap::to_value(&self.#ident),
                }
            }
        } else {
            quote! {
                ::snaplit::FieldValue {
                    name: #field_name,
                    visible: false,
                    value: ::snaplit::Value::Nil,
                }
            }
        }
    });

    let mut generics = input.generics.clone();
    for param in generics.params.iter_mut() {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(::snaplit::Snap));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let type_params: Vec<_> = input
        .generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(type_param) => Some(&type_param.ident),
            _ => None,
        })
        .collect();

    // Qualified name as it appears in emitted literals; module_path! expands
    // at the deriving type's definition site.
    let type_name = if type_params.is_empty() {
        quote! {
            ::std::format!("{}::{}", ::core::module_path!(), #name_str)
        }
    } else {
        quote! {
            ::std::format!(
                "{}::{}<{}>",
                ::core::module_path!(),
                #name_str,
                [#(<#type_params as ::snaplit::Snap>::type_name()),*].join(", "),
            )
        }
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::snaplit::Snap for #name #ty_generics #where_clause {
            fn type_name() -> ::std::string::String {
                #type_name
            }

            fn to_value(&self) -> ::snaplit::Value {
                ::snaplit::Value::Record(::snaplit::Record {
                    type_name: <Self as ::snaplit::Snap>::type_name(),
                    fields: ::std::vec![#(#field_values),*],
                })
            }
        }
    })
}
