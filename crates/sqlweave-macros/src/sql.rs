//! Expansion of `sql!`.

use crate::template::{Hole, parse_template};
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Expr, Ident, LitStr, Result, Token};

pub(crate) struct SqlInput {
    template: LitStr,
    args: Vec<Expr>,
}

impl Parse for SqlInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let template: LitStr = input.parse()?;
        let mut args = Vec::new();
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            args.push(input.parse::<Expr>()?);
        }
        Ok(Self { template, args })
    }
}

pub(crate) fn expand(input: SqlInput) -> Result<TokenStream> {
    let SqlInput { template, args } = input;
    let parsed = parse_template(&template.value()).map_err(|msg| Error::new(template.span(), msg))?;

    let mut positional = args.into_iter();
    let mut exprs = Vec::with_capacity(parsed.holes.len());
    for (i, hole) in parsed.holes.iter().enumerate() {
        let expr = match hole {
            Hole::Positional => {
                let Some(arg) = positional.next() else {
                    return Err(Error::new(
                        template.span(),
                        format!("placeholder #{} has no matching argument", i + 1),
                    ));
                };
                quote! { #arg }
            }
            Hole::Named(name) => {
                let ident = Ident::new(name, template.span());
                quote! { #ident }
            }
        };
        exprs.push(quote! { ::sqlweave::IntoFragment::into_fragment(#expr) });
    }

    if let Some(extra) = positional.next() {
        return Err(Error::new_spanned(
            extra,
            "argument never used: the template has fewer `{}` placeholders",
        ));
    }

    let segments = &parsed.segments;
    let count = exprs.len();
    Ok(quote! {
        {
            let exprs: [::sqlweave::Fragment; #count] = [#(#exprs),*];
            ::sqlweave::Statement::from_template([#(#segments),*], exprs)
        }
    })
}
