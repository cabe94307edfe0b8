#![deny(missing_docs)]
//! # ringbox-derive — procedural macros for the ringbox traits
//!
//! Derive macros generating **componentwise** implementations of the
//! algebraic traits for product types:
//!
//! - **`#[derive(Semigroup)]`** — `combine` combines each field
//! - **`#[derive(Monoid)]`** — `empty()` from each field's empty
//! - **`#[derive(CommutativeMonoid)]`** — markers
//!   (`CommutativeSemigroup` + `CommutativeMonoid`)
//! - **`#[derive(Group)]`** — `inverse` inverts each field
//! - **`#[derive(AbelianGroup)]`** — marker requiring
//!   `Group + CommutativeMonoid`
//!
//! Named-field structs, tuple structs, and unit structs are supported;
//! every field type must implement the corresponding trait, which is
//! enforced through generated where-clause bounds.
//!
//! These macros are re-exported through `ringbox` when its `derive`
//! feature is enabled:
//!
//! ```ignore
//! use ringbox::{Semigroup, Monoid, CommutativeMonoid};
//! use ringbox::primitives::Sum;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! #[derive(Semigroup, Monoid, CommutativeMonoid)]
//! struct Stats {
//!     count: Sum<u64>,
//!     tags: std::collections::HashSet<String>,
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse_macro_input;
use syn::parse_quote;
use syn::spanned::Spanned;
use syn::Data;
use syn::DeriveInput;
use syn::Fields;
use syn::Index;

/// The product shape a derive targets: how to read each component and
/// how to rebuild the struct.
struct Product {
    /// Member access tokens (`self.#member`), one per field.
    members: Vec<TokenStream2>,
    /// Field types, for where-clause bounds.
    types: Vec<syn::Type>,
    /// Whether construction uses braces (`Name { a: .. }`) or parens
    /// (`Name(..)`); unit structs have no fields at all.
    named: bool,
}

fn product_shape(input: &DeriveInput) -> Result<Product, TokenStream> {
    let fields = match &input.data {
        Data::Struct(s) => &s.fields,
        _ => {
            let msg = "ringbox derives are only supported on structs";
            return Err(syn::Error::new(input.ident.span(), msg)
                .to_compile_error()
                .into());
        }
    };

    let product = match fields {
        Fields::Named(named) => Product {
            members: named
                .named
                .iter()
                .map(|f| {
                    let id = f.ident.as_ref().expect("named field");
                    quote!(#id)
                })
                .collect(),
            types: named.named.iter().map(|f| f.ty.clone()).collect(),
            named: true,
        },
        Fields::Unnamed(unnamed) => Product {
            members: unnamed
                .unnamed
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    let idx = Index {
                        index: i as u32,
                        span: f.span(),
                    };
                    quote!(#idx)
                })
                .collect(),
            types: unnamed.unnamed.iter().map(|f| f.ty.clone()).collect(),
            named: false,
        },
        Fields::Unit => Product {
            members: Vec::new(),
            types: Vec::new(),
            named: true,
        },
    };

    Ok(product)
}

/// Add `#ty: #bound` for every field type to a copy of the input's
/// generics.
fn bounded_generics(input: &DeriveInput, types: &[syn::Type], bound: TokenStream2) -> syn::Generics {
    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for ty in types {
            where_clause.predicates.push(parse_quote!(#ty: #bound));
        }
    }
    generics
}

/// Build a struct literal from per-field expressions.
fn construct(name: &syn::Ident, product: &Product, exprs: &[TokenStream2]) -> TokenStream2 {
    if product.named {
        let members = &product.members;
        quote!(#name { #( #members: #exprs, )* })
    } else {
        quote!(#name ( #( #exprs, )* ))
    }
}

/// Derive `Semigroup`: `combine` combines each field componentwise.
#[proc_macro_derive(Semigroup)]
pub fn derive_semigroup(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let product = match product_shape(&input) {
        Ok(p) => p,
        Err(ts) => return ts,
    };

    let generics = bounded_generics(&input, &product.types, quote!(::ringbox::class::Semigroup));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let exprs: Vec<_> = product
        .members
        .iter()
        .map(|m| quote!(::ringbox::class::Semigroup::combine(&self.#m, &other.#m)))
        .collect();
    let body = construct(name, &product, &exprs);

    let expanded = quote! {
        impl #impl_generics ::ringbox::class::Semigroup for #name #ty_generics
        #where_clause
        {
            fn combine(&self, other: &Self) -> Self {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive `Monoid`: `empty()` assembled from each field's empty.
#[proc_macro_derive(Monoid)]
pub fn derive_monoid(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let product = match product_shape(&input) {
        Ok(p) => p,
        Err(ts) => return ts,
    };

    let generics = bounded_generics(&input, &product.types, quote!(::ringbox::class::Monoid));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let types = &product.types;
    let exprs: Vec<_> = types
        .iter()
        .map(|ty| quote!(<#ty as ::ringbox::class::Monoid>::empty()))
        .collect();
    let body = construct(name, &product, &exprs);

    let expanded = quote! {
        impl #impl_generics ::ringbox::class::Monoid for #name #ty_generics
        #where_clause
        {
            fn empty() -> Self {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive `CommutativeMonoid` (and the `CommutativeSemigroup` marker
/// it requires). Every field must itself be a commutative monoid.
#[proc_macro_derive(CommutativeMonoid)]
pub fn derive_commutative_monoid(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let product = match product_shape(&input) {
        Ok(p) => p,
        Err(ts) => return ts,
    };

    let sg_generics = bounded_generics(
        &input,
        &product.types,
        quote!(::ringbox::class::CommutativeSemigroup),
    );
    let (sg_impl, sg_ty, sg_where) = sg_generics.split_for_impl();

    let mon_generics = bounded_generics(
        &input,
        &product.types,
        quote!(::ringbox::class::CommutativeMonoid),
    );
    let (mon_impl, mon_ty, mon_where) = mon_generics.split_for_impl();

    let expanded = quote! {
        impl #sg_impl ::ringbox::class::CommutativeSemigroup for #name #sg_ty
        #sg_where
        {}

        impl #mon_impl ::ringbox::class::CommutativeMonoid for #name #mon_ty
        #mon_where
        {}
    };

    TokenStream::from(expanded)
}

/// Derive `Group`: `inverse` inverts each field componentwise.
#[proc_macro_derive(Group)]
pub fn derive_group(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let product = match product_shape(&input) {
        Ok(p) => p,
        Err(ts) => return ts,
    };

    let generics = bounded_generics(&input, &product.types, quote!(::ringbox::class::Group));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let exprs: Vec<_> = product
        .members
        .iter()
        .map(|m| quote!(::ringbox::class::Group::inverse(&self.#m)))
        .collect();
    let body = construct(name, &product, &exprs);

    let expanded = quote! {
        impl #impl_generics ::ringbox::class::Group for #name #ty_generics
        #where_clause
        {
            fn inverse(&self) -> Self {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive the `AbelianGroup` marker. Every field must itself be an
/// abelian group; pair with `#[derive(Group, CommutativeMonoid)]`.
#[proc_macro_derive(AbelianGroup)]
pub fn derive_abelian_group(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let product = match product_shape(&input) {
        Ok(p) => p,
        Err(ts) => return ts,
    };

    let generics = bounded_generics(
        &input,
        &product.types,
        quote!(::ringbox::class::AbelianGroup),
    );
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::ringbox::class::AbelianGroup for #name #ty_generics
        #where_clause
        {}
    };

    TokenStream::from(expanded)
}
