//! Procedural macros for Grapnel.
//!
//! - `#[action]` - register a function as a static anchor action

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    FnArg, ItemFn, LitStr,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[action]` macro: an optional action name.
struct ActionArgs {
    name: Option<LitStr>,
}

impl Parse for ActionArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(ActionArgs { name: None });
        }
        let name: LitStr = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("expected a single action name, e.g. #[action(\"page\")]"));
        }
        Ok(ActionArgs { name: Some(name) })
    }
}

/// Registers a function as a static action.
///
/// The function takes `(value: &str, action: &str)` and returns `()` or a
/// `Result<(), E>`. Without an argument the action is named after the
/// function.
///
/// ```rust,ignore
/// #[grapnel::action("page")]
/// fn show_page(value: &str, _action: &str) {
///     println!("page {value}");
/// }
///
/// let router = grapnel::Router::builder().with_registered().build(anchor)?;
/// ```
#[proc_macro_attribute]
pub fn action(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ActionArgs);
    let input = parse_macro_input!(item as ItemFn);

    if let Some(asyncness) = &input.sig.asyncness {
        return syn::Error::new_spanned(asyncness, "action functions must not be async")
            .to_compile_error()
            .into();
    }

    let typed_args = input
        .sig
        .inputs
        .iter()
        .filter(|arg| matches!(arg, FnArg::Typed(_)))
        .count();
    if typed_args != 2 || input.sig.inputs.len() != 2 {
        return syn::Error::new_spanned(
            &input.sig.inputs,
            "action functions take exactly two arguments: fn(value: &str, action: &str)",
        )
        .to_compile_error()
        .into();
    }

    let fn_name = &input.sig.ident;
    let name = match args.name {
        Some(lit) => lit,
        None => LitStr::new(&fn_name.to_string(), fn_name.span()),
    };
    let shim = format_ident!("__grapnel_action_{}", fn_name);

    let expanded = quote! {
        #input

        #[doc(hidden)]
        #[allow(non_snake_case)]
        fn #shim(
            value: &str,
            action: &str,
        ) -> ::core::result::Result<(), ::grapnel::BoxError> {
            ::grapnel::IntoHandlerResult::into_handler_result(#fn_name(value, action))
        }

        ::grapnel::inventory::submit! {
            ::grapnel::ActionRegistration::new(#name, #shim)
        }
    };

    TokenStream::from(expanded)
}
