//! Derive macro for `fieldguard_shared::Constrained`.
//!
//! Builds the static field registry from `#[constraint(...)]` attributes:
//!
//! ```ignore
//! #[derive(fieldguard_validate_derive::Constrained)]
//! struct Reading {
//!     #[constraint(maximum = 30)]
//!     number1: i32,
//!     #[constraint(minimum = 40, maximum = 50)]
//!     number2: i32,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, GenericArgument, Path, PathArguments, Type,
};

/// Derive `fieldguard_shared::Constrained` from field-level constraint attributes.
#[proc_macro_derive(Constrained, attributes(constraint))]
pub fn derive_constrained(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand_constrained(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_constrained(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let Data::Struct(struct_data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Constrained can only be derived for structs",
        ));
    };

    let fields = match &struct_data.fields {
        Fields::Named(fields) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                &struct_data.fields,
                "Constrained requires named fields",
            ));
        },
    };

    let mut declarations = Vec::new();
    let mut accessors = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let (name_override, constraints) = parse_field_constraints(&field.attrs)?;
        let (is_option, inner_ty) = unwrap_option(&field.ty);
        if !is_lossless_integer(inner_ty) {
            if constraints.is_empty() && name_override.is_none() {
                continue;
            }
            return Err(syn::Error::new_spanned(
                &field.ty,
                "constraint can only be used on integer fields that convert losslessly into i64",
            ));
        }
        let field_name = name_override.unwrap_or_else(|| ident.to_string());
        if seen.contains(&field_name) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("duplicate constrained field name `{field_name}`"),
            ));
        }
        seen.push(field_name.clone());

        let name_lit = syn::LitStr::new(&field_name, proc_macro2::Span::call_site());
        let descriptors = constraints.iter().map(expand_descriptor);
        let declare = if is_option {
            quote! { optional }
        } else {
            quote! { required }
        };
        declarations.push(quote! {
            fieldguard_shared::FieldDeclaration::#declare(#name_lit, &[#(#descriptors),*])
        });

        let value = if is_option {
            quote! { self.#ident.map(i64::from) }
        } else {
            quote! { Some(i64::from(self.#ident)) }
        };
        accessors.push(quote! { #name_lit => #value, });
    }

    let name = &input.ident;
    let record = syn::LitStr::new(&name.to_string(), proc_macro2::Span::call_site());
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics fieldguard_shared::Constrained for #name #ty_generics #where_clause {
            const RECORD: &'static str = #record;
            const FIELDS: &'static [fieldguard_shared::FieldDeclaration] = &[#(#declarations),*];

            fn field_value(&self, name: &str) -> Option<i64> {
                match name {
                    #(#accessors)*
                    _ => None,
                }
            }
        }
    })
}

#[derive(Debug)]
enum ConstraintSpec {
    Minimum(Expr),
    Maximum(Expr),
    Custom(Path),
}

fn expand_descriptor(spec: &ConstraintSpec) -> proc_macro2::TokenStream {
    match spec {
        ConstraintSpec::Minimum(threshold) => {
            quote! { fieldguard_shared::ConstraintDescriptor::minimum(#threshold) }
        },
        ConstraintSpec::Maximum(threshold) => {
            quote! { fieldguard_shared::ConstraintDescriptor::maximum(#threshold) }
        },
        ConstraintSpec::Custom(path) => {
            quote! { fieldguard_shared::ConstraintDescriptor::custom(&#path) }
        },
    }
}

fn parse_field_constraints(
    attrs: &[Attribute],
) -> Result<(Option<String>, Vec<ConstraintSpec>), syn::Error> {
    let mut constraints = Vec::new();
    let mut field_name_override: Option<String> = None;
    for attr in attrs {
        if !attr.path().is_ident("constraint") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("field") {
                let value: syn::LitStr = meta.value()?.parse()?;
                if field_name_override.is_some() {
                    return Err(meta.error("duplicate constraint(field = ...)"));
                }
                field_name_override = Some(value.value());
                return Ok(());
            }
            if meta.path.is_ident("minimum") {
                let threshold: Expr = meta.value()?.parse()?;
                constraints.push(ConstraintSpec::Minimum(threshold));
                return Ok(());
            }
            if meta.path.is_ident("maximum") {
                let threshold: Expr = meta.value()?.parse()?;
                constraints.push(ConstraintSpec::Maximum(threshold));
                return Ok(());
            }
            if meta.path.is_ident("custom") {
                let value: syn::LitStr = meta.value()?.parse()?;
                let path: Path = value.parse()?;
                constraints.push(ConstraintSpec::Custom(path));
                return Ok(());
            }
            Err(meta.error("unsupported constraint attribute on field"))
        })?;
    }
    Ok((field_name_override, constraints))
}

fn unwrap_option(ty: &Type) -> (bool, &Type) {
    option_inner(ty).map_or((false, ty), |inner| (true, inner))
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

fn is_lossless_integer(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    let Some(segment) = type_path.path.segments.last() else {
        return false;
    };
    matches!(
        segment.ident.to_string().as_str(),
        "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32"
    )
}
