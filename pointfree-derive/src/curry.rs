//! Expansion of the `curry!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curry!(|a, b| body)`, arity taken from the parameters
//! 2. Path + arity form: `curry!(function_name, arity)`
//!
//! # Generated Code Structure
//!
//! For an arity of 3 the expansion is:
//!
//! ```text
//! {
//!     let __pointfree_function = Arc::new(function);
//!     move |__pointfree_argument_0| {
//!         let __pointfree_function = Arc::clone(&__pointfree_function);
//!         let __pointfree_argument_0 = Arc::new(__pointfree_argument_0);
//!         move |__pointfree_argument_1| {
//!             let __pointfree_function = Arc::clone(&__pointfree_function);
//!             let __pointfree_argument_0 = Arc::clone(&__pointfree_argument_0);
//!             let __pointfree_argument_1 = Arc::new(__pointfree_argument_1);
//!             move |__pointfree_argument_2| {
//!                 __pointfree_function(
//!                     Arc::unwrap_or_clone(Arc::clone(&__pointfree_argument_0)),
//!                     Arc::unwrap_or_clone(Arc::clone(&__pointfree_argument_1)),
//!                     __pointfree_argument_2,
//!                 )
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! Every level clones the `Arc`s it captured instead of moving them, so a
//! partial application never gives away the arguments another call needs.

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Token};

enum CurryInput {
    Closure(ExprClosure),
    PathWithArity { function: ExprPath, arity: usize },
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    TokenStream::from(expand(input.into()))
}

fn expand(input: TokenStream2) -> TokenStream2 {
    match parse_curry_input(input) {
        Ok(CurryInput::Closure(closure)) => {
            generate_curried(closure.inputs.len(), &quote! { #closure })
        }
        Ok(CurryInput::PathWithArity { function, arity }) => {
            generate_curried(arity, &quote! { #function })
        }
        Err(error) => error.to_compile_error(),
    }
}

fn parse_curry_input(input: TokenStream2) -> syn::Result<CurryInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions = syn::parse::Parser::parse2(parser, input)?;
    let mut expressions = expressions.into_iter();

    match (expressions.next(), expressions.next(), expressions.next()) {
        (Some(Expr::Closure(closure)), None, None) => {
            check_arity(closure.inputs.len(), closure.span())?;
            Ok(CurryInput::Closure(closure))
        }
        (Some(Expr::Path(path)), None, None) => Err(syn::Error::new(
            path.span(),
            "curry! cannot inspect the arity of a path; \
             supply it explicitly: curry!(function_name, 2)",
        )),
        (Some(Expr::Path(function)), Some(arity), None) => {
            let arity = parse_arity(arity)?;
            check_arity(arity, function.span())?;
            Ok(CurryInput::PathWithArity { function, arity })
        }
        (Some(other), Some(_), None) => Err(syn::Error::new(
            other.span(),
            "curry! expected a function name or path before the arity",
        )),
        (Some(other), None, None) => Err(syn::Error::new(
            other.span(),
            "curry! expected a closure, got an expression whose arity cannot be inspected",
        )),
        _ => Err(syn::Error::new(
            Span::call_site(),
            "curry! requires a closure or a function name with an arity",
        )),
    }
}

fn parse_arity(expression: Expr) -> syn::Result<usize> {
    match expression {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal),
            ..
        }) => literal.base10_parse::<usize>(),
        other => Err(syn::Error::new(
            other.span(),
            "curry! expected an integer literal for the arity",
        )),
    }
}

fn check_arity(arity: usize, span: Span) -> syn::Result<()> {
    if arity == 0 {
        return Err(syn::Error::new(
            span,
            "curry! expected a function with at least 1 argument, got arity 0",
        ));
    }
    Ok(())
}

fn generate_curried(arity: usize, function: &TokenStream2) -> TokenStream2 {
    let arguments: Vec<Ident> = (0..arity)
        .map(|index| format_ident!("__pointfree_argument_{}", index))
        .collect();
    let chain = build_step(&arguments, 0);

    quote! {
        {
            let __pointfree_function = ::std::sync::Arc::new(#function);
            #chain
        }
    }
}

/// Builds the closure that receives `arguments[position]`.
fn build_step(arguments: &[Ident], position: usize) -> TokenStream2 {
    let (bound, rest) = arguments.split_at(position);
    let Some((current, remaining)) = rest.split_first() else {
        return TokenStream2::new();
    };

    if remaining.is_empty() {
        return quote! {
            move |#current| {
                __pointfree_function(
                    #(::std::sync::Arc::unwrap_or_clone(::std::sync::Arc::clone(&#bound)),)*
                    #current
                )
            }
        };
    }

    let next = build_step(arguments, position + 1);
    quote! {
        move |#current| {
            let __pointfree_function = ::std::sync::Arc::clone(&__pointfree_function);
            #(let #bound = ::std::sync::Arc::clone(&#bound);)*
            let #current = ::std::sync::Arc::new(#current);
            #next
        }
    }
}
