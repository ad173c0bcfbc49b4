//! `#[as_optional]` macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use synthez::ToTokens;

use crate::common;

/// Expands `#[as_optional]` macro.
///
/// # Errors
///
/// - If any `args` are provided;
/// - If `input` isn't a non-`async`, non-`const` function definition;
/// - If the function doesn't return an `Option<T>`.
pub fn expand(args: TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    common::ensure_no_args(&args, "as_optional")?;
    let definition = Definition::try_from(common::parse_fn(input)?)?;

    Ok(quote! { #definition })
}

/// Representation of a function returning an `Option<T>`, adapted to return
/// an `exception::Optional<T>`, used for code generation.
#[derive(Debug, ToTokens)]
#[to_tokens(append(impl_fn))]
pub struct Definition {
    /// Adapted function definition.
    pub function: syn::ItemFn,

    /// Type of the value returned in an `Option<T>` by the adapted function.
    pub value_ty: syn::Type,
}

impl TryFrom<syn::ItemFn> for Definition {
    type Error = syn::Error;

    fn try_from(function: syn::ItemFn) -> syn::Result<Self> {
        let [value_ty] =
            common::returned_args(&function.sig, "Option", "Option<T>")?;

        Ok(Self { function, value_ty })
    }
}

impl Definition {
    /// Generates code of the adapted function, keeping its name, attributes
    /// and arguments untouched.
    #[must_use]
    pub fn impl_fn(&self) -> TokenStream {
        let syn::ItemFn {
            attrs,
            vis,
            sig,
            block,
        } = &self.function;
        let value_ty = &self.value_ty;
        let infer_ty = common::turbofish_ty(value_ty);

        let mut sig = sig.clone();
        sig.output = syn::parse_quote! { -> ::exception::Optional<#value_ty> };

        quote! {
            #( #attrs )*
            #vis #sig {
                ::exception::private::optional::<#infer_ty, _>(move || #block)
            }
        }
    }
}
