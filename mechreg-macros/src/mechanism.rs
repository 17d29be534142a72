//! The `#[mechanism]` attribute.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Ident, ItemFn, LitInt, LitStr, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[mechanism]` macro.
pub(crate) struct MechanismArgs {
    /// Banner label; the function name when absent.
    pub source: Option<LitStr>,
    /// Sort key for collection order.
    pub order: i32,
}

impl Parse for MechanismArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut source = None;
        let mut order = 0;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "source" => {
                    source = Some(input.parse()?);
                }
                "order" => {
                    let negative = input.peek(Token![-]);
                    if negative {
                        input.parse::<Token![-]>()?;
                    }
                    let lit: LitInt = input.parse()?;
                    let value: i32 = lit.base10_parse()?;
                    order = if negative { -value } else { value };
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(MechanismArgs { source, order })
    }
}

pub(crate) fn mechanism_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as MechanismArgs);
    let input = parse_macro_input!(item as ItemFn);
    let sig = &input.sig;

    if sig.asyncness.is_some() {
        return syn::Error::new_spanned(
            sig.asyncness,
            "mechanism registration must not be async",
        )
        .to_compile_error()
        .into();
    }

    if !sig.inputs.is_empty() {
        return syn::Error::new_spanned(
            &sig.inputs,
            "mechanism registration must take no arguments",
        )
        .to_compile_error()
        .into();
    }

    if !sig.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &sig.generics,
            "mechanism registration must not be generic",
        )
        .to_compile_error()
        .into();
    }

    let fn_name = &sig.ident;
    let source = match args.source {
        Some(lit) => lit,
        None => LitStr::new(&fn_name.to_string(), fn_name.span()),
    };
    let order = args.order;

    let expanded = quote! {
        #input

        ::mechreg::inventory::submit! {
            ::mechreg::collected::CollectedMechanism::new(#source, #order, &#fn_name)
        }
    };

    TokenStream::from(expanded)
}
