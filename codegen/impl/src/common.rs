//! Common functions and definitions of adapting function definitions.

use proc_macro2::{Span, TokenStream};
use syn::{
    spanned::Spanned as _,
    visit_mut::{self, VisitMut},
};

/// Common errors of parsing Rust code, appeared in this crate.
pub mod err {
    use proc_macro2::Span;

    /// Creates an "unsupported qualifier" [`syn::Error`] for the given
    /// `qualifier` pointing to the given `span`.
    #[must_use]
    pub fn unsupported_qualifier(span: Span, qualifier: &str) -> syn::Error {
        syn::Error::new(
            span,
            format!("`{qualifier}` functions cannot be adapted"),
        )
    }

    /// Creates an "unexpected return type" [`syn::Error`] pointing to the
    /// given `span`, mentioning the `expected` one.
    #[must_use]
    pub fn unexpected_return_type(span: Span, expected: &str) -> syn::Error {
        syn::Error::new(span, format!("expected `{expected}` return type"))
    }

    /// Creates a "no arguments expected" [`syn::Error`] for the given
    /// `attribute` pointing to the given `span`.
    #[must_use]
    pub fn no_args_expected(span: Span, attribute: &str) -> syn::Error {
        syn::Error::new(
            span,
            format!("`#[{attribute}]` attribute doesn't accept arguments"),
        )
    }
}

/// Parses the given `input` as a function definition, which can be adapted.
///
/// # Errors
///
/// - If `input` isn't a function definition;
/// - If the function is `async` or `const`.
pub fn parse_fn(input: TokenStream) -> syn::Result<syn::ItemFn> {
    let function = syn::parse2::<syn::ItemFn>(input)?;

    if let Some(asyncness) = &function.sig.asyncness {
        return Err(err::unsupported_qualifier(asyncness.span(), "async"));
    }
    if let Some(constness) = &function.sig.constness {
        return Err(err::unsupported_qualifier(constness.span(), "const"));
    }

    Ok(function)
}

/// Ensures that no arguments are provided to the `attribute`.
///
/// # Errors
///
/// If `args` are not empty.
pub fn ensure_no_args(args: &TokenStream, attribute: &str) -> syn::Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(err::no_args_expected(args.span(), attribute))
    }
}

/// Returns the `N` generic type arguments of the `wrapper` type returned from
/// the given function `sig`nature.
///
/// # Errors
///
/// If the function doesn't return a `wrapper` type with exactly `N` generic
/// type arguments (like `Option<T>` or `Result<T, E>`).
pub fn returned_args<const N: usize>(
    sig: &syn::Signature,
    wrapper: &str,
    expected: &str,
) -> syn::Result<[syn::Type; N]> {
    let error = || err::unexpected_return_type(return_span(sig), expected);

    let syn::ReturnType::Type(_, ty) = &sig.output else {
        return Err(error());
    };
    let syn::Type::Path(syn::TypePath { qself: None, path }) = ty.as_ref()
    else {
        return Err(error());
    };
    let segment = path.segments.last().ok_or_else(error)?;
    if segment.ident != wrapper {
        return Err(error());
    }
    let syn::PathArguments::AngleBracketed(generics) = &segment.arguments
    else {
        return Err(error());
    };

    let types = generics
        .args
        .iter()
        .map(|arg| match arg {
            syn::GenericArgument::Type(ty) => Ok(ty.clone()),
            _ => Err(error()),
        })
        .collect::<syn::Result<Vec<_>>>()?;

    <[syn::Type; N]>::try_from(types).map_err(|_| error())
}

/// Returns the given `ty`pe suitable for a turbofish, replacing every
/// `impl Trait` in it with `_`.
///
/// `impl Trait` isn't allowed in paths, so it's left for inference from the
/// adapted function's return type.
#[must_use]
pub fn turbofish_ty(ty: &syn::Type) -> syn::Type {
    /// Replaces `impl Trait` types with `_`.
    struct InferImplTraits;

    impl VisitMut for InferImplTraits {
        fn visit_type_mut(&mut self, ty: &mut syn::Type) {
            if matches!(ty, syn::Type::ImplTrait(_)) {
                *ty = syn::parse_quote! { _ };
            } else {
                visit_mut::visit_type_mut(self, ty);
            }
        }
    }

    let mut ty = ty.clone();
    InferImplTraits.visit_type_mut(&mut ty);
    ty
}

/// Returns a [`Span`] of the given `sig`nature's return type.
#[must_use]
pub fn return_span(sig: &syn::Signature) -> Span {
    match &sig.output {
        syn::ReturnType::Type(_, ty) => ty.span(),
        syn::ReturnType::Default => sig.span(),
    }
}

#[cfg(test)]
mod spec {
    use syn::parse_quote;

    use super::{ensure_no_args, parse_fn, returned_args, turbofish_ty};

    #[test]
    fn extracts_option_argument() {
        let sig: syn::Signature = parse_quote! { fn f() -> Option<u8> };

        let [ty] = returned_args::<1>(&sig, "Option", "Option<T>").unwrap();

        let expected: syn::Type = parse_quote! { u8 };
        assert_eq!(ty, expected);
    }

    #[test]
    fn extracts_qualified_result_arguments() {
        let sig: syn::Signature = parse_quote! {
            fn f() -> ::std::result::Result<u8, io::Error>
        };

        let [ok, err] =
            returned_args::<2>(&sig, "Result", "Result<T, E>").unwrap();

        let (expected_ok, expected_err): (syn::Type, syn::Type) =
            (parse_quote! { u8 }, parse_quote! { io::Error });
        assert_eq!(ok, expected_ok);
        assert_eq!(err, expected_err);
    }

    #[test]
    fn errors_on_unexpected_return_type() {
        let sigs: [syn::Signature; 5] = [
            parse_quote! { fn f() },
            parse_quote! { fn f() -> u8 },
            parse_quote! { fn f() -> Vec<u8> },
            parse_quote! { fn f() -> io::Result<u8> },
            parse_quote! { fn f() -> Result<'static, u8> },
        ];
        for sig in sigs {
            let error = returned_args::<2>(&sig, "Result", "Result<T, E>")
                .unwrap_err();

            assert_eq!(error.to_string(), "expected `Result<T, E>` return type");
        }
    }

    #[test]
    fn infers_impl_trait_in_turbofish() {
        let ty: syn::Type = parse_quote! {
            (impl Iterator<Item = i32>, Vec<impl Fn(&str) -> bool>)
        };

        let expected: syn::Type = parse_quote! { (_, Vec<_>) };
        assert_eq!(turbofish_ty(&ty), expected);

        let plain: syn::Type = parse_quote! { &'a [u8] };
        assert_eq!(turbofish_ty(&plain), plain);
    }

    #[test]
    fn errors_on_async_fn() {
        let error = parse_fn(quote::quote! {
            async fn f() -> Option<u8> { None }
        })
        .unwrap_err();

        assert_eq!(error.to_string(), "`async` functions cannot be adapted");
    }

    #[test]
    fn errors_on_const_fn() {
        let error = parse_fn(quote::quote! {
            const fn f() -> Option<u8> { None }
        })
        .unwrap_err();

        assert_eq!(error.to_string(), "`const` functions cannot be adapted");
    }

    #[test]
    fn errors_on_args() {
        assert!(ensure_no_args(&quote::quote! {}, "as_optional").is_ok());

        let error =
            ensure_no_args(&quote::quote! { NameError }, "as_optional")
                .unwrap_err();

        assert_eq!(
            error.to_string(),
            "`#[as_optional]` attribute doesn't accept arguments",
        );
    }
}
