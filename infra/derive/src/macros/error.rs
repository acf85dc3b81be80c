use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, Ident, LitStr, Type, Variant};

/// What the expansion needs to know about a single error variant.
struct VariantShape<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg_attrs: Vec<Attribute>,
}

impl VariantShape<'_> {
    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }

    fn kind_literal(&self) -> LitStr {
        LitStr::new(&format!("{}Error", self.ident), self.ident.span())
    }
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let name = &input.ident;
    let ext_trait = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("sconf_error can only be applied to enums"); };
    };

    let shapes = match data.variants.iter().map(variant_shape).collect::<Result<Vec<_>, _>>() {
        Ok(shapes) => shapes,
        Err(err) => return err.to_compile_error(),
    };
    if let Err(err) = check_source_has_context(&shapes) {
        return err.to_compile_error();
    }

    let derive_attr = missing_derives(&input);
    let kind_impl = kind_impl(name, &shapes);
    let ext_impl = context_ext(name, &ext_trait, &shapes);
    let source_impls = shapes.iter().filter_map(|shape| source_impls(name, &ext_trait, shape));
    let internal_impls = internal_impls(name, &shapes);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derive_attr
        #input

        #kind_impl
        #ext_impl
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code, clippy::ref_option)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn variant_shape(variant: &Variant) -> Result<VariantShape<'_>, syn::Error> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "sconf_error requires named fields so source/context can be wired",
        ));
    };

    let has_context = context_field(fields)?.is_some();
    let source = source_field(fields).and_then(|field| field.ident.as_ref().map(|i| (i, &field.ty)));
    let cfg_attrs =
        variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).cloned().collect();

    Ok(VariantShape { ident: &variant.ident, source, has_context, cfg_attrs })
}

fn context_field(fields: &FieldsNamed) -> Result<Option<&Field>, syn::Error> {
    let Some(field) =
        fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|ident| ident == "context"))
    else {
        return Ok(None);
    };

    if is_optional_static_cow(&field.ty) {
        Ok(Some(field))
    } else {
        Err(syn::Error::new_spanned(&field.ty, "context field must be Option<Cow<'static, str>>"))
    }
}

fn source_field(fields: &FieldsNamed) -> Option<&Field> {
    fields.named.iter().find(|field| {
        field.ident.as_ref().is_some_and(|ident| ident == "source")
            || has_attr(field, "source")
            || has_attr(field, "from")
    })
}

fn check_source_has_context(shapes: &[VariantShape<'_>]) -> Result<(), syn::Error> {
    match shapes.iter().find(|shape| shape.source.is_some() && !shape.has_context) {
        Some(shape) => Err(syn::Error::new_spanned(
            shape.ident,
            "sconf_error requires `context: Option<Cow<'static, str>>` on variants with a source",
        )),
        None => Ok(()),
    }
}

fn missing_derives(input: &DeriveInput) -> TokenStream {
    let present = derived_trait_names(&input.attrs);
    let mut derives = Vec::new();
    if !present.contains("Debug") {
        derives.push(quote! { Debug });
    }
    if !present.contains("Error") {
        derives.push(quote! { ::thiserror::Error });
    }

    if derives.is_empty() { quote! {} } else { quote! { #[derive(#(#derives),*)] } }
}

/// `kind()` gives callers a stable, value-free label for every variant.
fn kind_impl(name: &Ident, shapes: &[VariantShape<'_>]) -> TokenStream {
    let arms = shapes.iter().map(|shape| {
        let cfg_attrs = &shape.cfg_attrs;
        let ident = shape.ident;
        let kind = shape.kind_literal();
        quote! { #(#cfg_attrs)* Self::#ident { .. } => #kind, }
    });

    quote! {
        #[automatically_derived]
        impl #name {
            /// Stable label of the error kind, safe to expose to callers and logs.
            #[must_use]
            pub const fn kind(&self) -> &'static str {
                match self {
                    #( #arms )*
                }
            }
        }
    }
}

fn context_ext(name: &Ident, ext_trait: &Ident, shapes: &[VariantShape<'_>]) -> TokenStream {
    let arms = shapes.iter().filter(|shape| shape.has_context).map(|shape| {
        let cfg_attrs = &shape.cfg_attrs;
        let ident = shape.ident;
        quote! { #(#cfg_attrs)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        pub trait #ext_trait<T> {
            /// Attaches a human-readable context to the error side of the result.
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext_trait<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #( #arms )*
                        #[allow(unreachable_patterns)]
                        _ => {},
                    }
                    err
                })
            }
        }
    }
}

fn source_impls(name: &Ident, ext_trait: &Ident, shape: &VariantShape<'_>) -> Option<TokenStream> {
    if shape.is_internal() {
        return None;
    }
    let (field, ty) = shape.source?;
    let ident = shape.ident;
    let cfg_attrs = &shape.cfg_attrs;

    Some(quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg_attrs)*
        #[automatically_derived]
        impl<T> #ext_trait<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_impls(name: &Ident, shapes: &[VariantShape<'_>]) -> TokenStream {
    let Some(internal) = shapes.iter().find(|shape| shape.is_internal()) else {
        return quote! {};
    };
    let cfg_attrs = &internal.cfg_attrs;

    quote! {
        #(#cfg_attrs)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::Internal { message: std::borrow::Cow::Borrowed(s), context: None } }
        }

        #(#cfg_attrs)*
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::Internal { message: std::borrow::Cow::Owned(s), context: None } }
        }
    }
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

/// Matches `Option<Cow<'static, str>>`, with or without path prefixes.
fn is_optional_static_cow(ty: &Type) -> bool {
    let Some(inner) = single_generic(ty, "Option") else {
        return false;
    };
    let Type::Path(path) = inner else {
        return false;
    };
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if segment.ident != "Cow" {
        return false;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };

    let mut args = args.args.iter();
    let Some(syn::GenericArgument::Lifetime(lifetime)) = args.next() else {
        return false;
    };
    let Some(syn::GenericArgument::Type(Type::Path(target))) = args.next() else {
        return false;
    };

    lifetime.ident == "static" && target.path.segments.last().is_some_and(|s| s.ident == "str")
}

fn single_generic<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
