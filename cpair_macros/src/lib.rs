use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Error, Ident, LitInt, Result,
    parse::{Parse, ParseStream},
    parse_macro_input,
    token::Comma,
};

struct AllTuples {
    macro_ident: Ident,
    start: usize,
    end: usize,
}

impl Parse for AllTuples {
    fn parse(input: ParseStream) -> Result<Self> {
        let macro_ident = input.parse::<Ident>()?;
        input.parse::<Comma>()?;
        let start_lit = input.parse::<LitInt>()?;
        let start = start_lit.base10_parse()?;
        input.parse::<Comma>()?;
        let end = input.parse::<LitInt>()?.base10_parse()?;

        if start > end {
            return Err(Error::new(start_lit.span(), "start must not exceed end"));
        }

        Ok(AllTuples {
            macro_ident,
            start,
            end,
        })
    }
}

/// Invokes `macro_ident!(P0, .., Pn)` once per arity in `start..=end`.
///
/// `all_tuples!(impl_element_tuple, 1, 3)` expands to
/// `impl_element_tuple!(P0); impl_element_tuple!(P0, P1); impl_element_tuple!(P0, P1, P2);`
#[proc_macro]
pub fn all_tuples(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as AllTuples);
    let items: Vec<_> = (0..input.end).map(|i| format_ident!("P{}", i)).collect();

    let macro_ident = &input.macro_ident;
    let invocations = (input.start..=input.end).map(|i| {
        let tuples = &items[..i];

        quote! {
            #macro_ident!(#(#tuples),*);
        }
    });

    quote! {
        #(
            #invocations
        )*
    }
    .into()
}

#[derive(Default)]
struct ElementAttrs {
    sealed: Option<Span>,
    zero_size: Option<Span>,
}

impl ElementAttrs {
    fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("element")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("sealed") {
                    out.sealed = Some(meta.path.get_ident().map_or(Span::call_site(), Ident::span));
                    Ok(())
                } else if meta.path.is_ident("zero_size") {
                    out.zero_size = Some(meta.path.get_ident().map_or(Span::call_site(), Ident::span));
                    Ok(())
                } else {
                    Err(meta.error("unknown element option, expected `sealed` or `zero_size`"))
                }
            })?;
        }

        if let (Some(_), Some(span)) = (out.sealed, out.zero_size) {
            return Err(Error::new(
                span,
                "`zero_size` conflicts with `sealed`: a sealed type is never embedded",
            ));
        }

        Ok(out)
    }
}

fn is_fieldless(data: &Data) -> bool {
    match data {
        Data::Struct(data) => data.fields.is_empty(),
        Data::Enum(_) | Data::Union(_) => false,
    }
}

fn expand_element(input: DeriveInput) -> Result<TokenStream> {
    let attrs = ElementAttrs::from_attrs(&input.attrs)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let sealed = attrs.sealed.is_some();
    let zero_size = !sealed && (attrs.zero_size.is_some() || is_fieldless(&input.data));

    let kind = if zero_size {
        quote! { ::cpair::ZeroSized }
    } else {
        quote! { ::cpair::Stateful }
    };

    Ok(quote! {
        impl #impl_generics ::cpair::Element for #ident #ty_generics #where_clause {
            type Kind = #kind;
            const SEALED: bool = #sealed;
        }
    })
}

/// Derives `cpair::Element`.
///
/// Fieldless structs are classified zero-size, everything else stateful.
/// `#[element(sealed)]` forbids embedding and forces field storage;
/// `#[element(zero_size)]` opts in a type whose fields are all zero-size.
#[proc_macro_derive(Element, attributes(element))]
pub fn derive_element(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_element(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
