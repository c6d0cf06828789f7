use proc_macro::TokenStream;
use proc_macro2::Ident;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Route structs only mark which methods they accept,
/// the path itself comes from their `Url` impl.
fn mark(input: TokenStream, method: &str) -> TokenStream {
    let DeriveInput { ident, .. } = parse_macro_input!(input);
    let method = Ident::new(method, ident.span());

    quote! {
        impl #method for #ident {}
    }
    .into()
}

#[proc_macro_derive(Get)]
pub fn derive_get(input: TokenStream) -> TokenStream {
    mark(input, "Get")
}

#[proc_macro_derive(Post)]
pub fn derive_post(input: TokenStream) -> TokenStream {
    mark(input, "Post")
}
