//! `#[as_outcome]` macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse::Parser as _, punctuated::Punctuated, Token};
use synthez::ToTokens;

use crate::common;

/// Expands `#[as_outcome]` macro.
///
/// # Errors
///
/// - If `args` aren't a comma-separated list of failure kind types;
/// - If `input` isn't a non-`async`, non-`const` function definition;
/// - If the function doesn't return a `Result<T, E>`.
pub fn expand(args: TokenStream, input: TokenStream) -> syn::Result<TokenStream> {
    let kinds = Punctuated::<syn::Type, Token![,]>::parse_terminated
        .parse2(args)?
        .into_iter()
        .collect();
    let definition = Definition::new(common::parse_fn(input)?, kinds)?;

    Ok(quote! { #definition })
}

/// Representation of a fallible function returning a `Result<T, E>`, adapted
/// to return an `exception::Outcome`, used for code generation.
#[derive(Debug, ToTokens)]
#[to_tokens(append(impl_fn))]
pub struct Definition {
    /// Adapted function definition.
    pub function: syn::ItemFn,

    /// Type of the success value returned by the adapted function.
    pub value_ty: syn::Type,

    /// Type of the error returned by the adapted function.
    pub error_ty: syn::Type,

    /// Kinds of failures to be captured into an `exception::Outcome`.
    ///
    /// Any failure is captured if empty.
    pub kinds: Vec<syn::Type>,
}

impl Definition {
    /// Creates a new [`Definition`] of the provided `function`, capturing
    /// failures of the provided `kinds`.
    ///
    /// # Errors
    ///
    /// If the `function` doesn't return a `Result<T, E>`.
    pub fn new(
        function: syn::ItemFn,
        kinds: Vec<syn::Type>,
    ) -> syn::Result<Self> {
        let [value_ty, error_ty] =
            common::returned_args(&function.sig, "Result", "Result<T, E>")?;

        Ok(Self {
            function,
            value_ty,
            error_ty,
            kinds,
        })
    }

    /// Generates the return type of the adapted function.
    #[must_use]
    pub fn return_ty(&self) -> syn::Type {
        let value_ty = &self.value_ty;

        match self.kinds.as_slice() {
            [] => syn::parse_quote! {
                ::exception::Outcome<#value_ty, ::exception::Raised>
            },
            [kind] => syn::parse_quote! {
                ::core::result::Result<
                    ::exception::Outcome<#value_ty, #kind>,
                    ::exception::Raised,
                >
            },
            [..] => syn::parse_quote! {
                ::core::result::Result<
                    ::exception::Outcome<#value_ty, ::exception::Raised>,
                    ::exception::Raised,
                >
            },
        }
    }

    /// Generates the body of the adapted function, capturing failures of the
    /// original body.
    #[must_use]
    pub fn body(&self) -> TokenStream {
        let block = &self.function.block;
        let value_ty = common::turbofish_ty(&self.value_ty);
        let error_ty = common::turbofish_ty(&self.error_ty);

        match self.kinds.as_slice() {
            [] => quote! {
                ::exception::private::outcome::<#value_ty, #error_ty, _>(
                    move || #block
                )
            },
            [kind] => quote! {
                ::exception::private::catching::<
                    ::exception::Kind<#kind>, #value_ty, #error_ty, _,
                >(move || #block)
            },
            kinds => quote! {
                ::exception::private::catching::<
                    ( #( ::exception::Kind<#kinds>, )* ),
                    #value_ty,
                    #error_ty,
                    _,
                >(move || #block)
            },
        }
    }

    /// Generates code of the adapted function, keeping its name, attributes
    /// and arguments untouched.
    #[must_use]
    pub fn impl_fn(&self) -> TokenStream {
        let syn::ItemFn {
            attrs, vis, sig, ..
        } = &self.function;

        let return_ty = self.return_ty();
        let mut sig = sig.clone();
        sig.output = syn::parse_quote! { -> #return_ty };

        let body = self.body();

        quote! {
            #( #attrs )*
            #vis #sig {
                #body
            }
        }
    }
}
