use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

/// Column-store companion for projection rows.
///
/// Deriving `Series` on a row struct (one row per projected year, every field
/// an `f64`) generates `{Row}Series`, holding one `Vec<f64>` column per field.
/// The columns come with `with_capacity`, `push`, `from_rows`, `get`, `len`
/// and `is_empty`; the row type gains `field_names()` in column order.
///
/// `#[series(name = "AdoptionCurve")]` picks a different name for the columns type.
#[proc_macro_derive(Series, attributes(series))]
pub fn derive_series(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let row = &input.ident;
    let columns_type = columns_name(input)?.unwrap_or_else(|| format_ident!("{}Series", row));
    let columns = row_columns(input)?;

    let labels: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let first = &columns[0];

    Ok(quote! {
        /// Projection rows stored column by column.
        #[derive(Debug, Clone, PartialEq)]
        pub struct #columns_type {
            #(pub #columns: Vec<f64>,)*
        }

        impl #columns_type {
            /// Empty columns with room for `n` years.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#columns: Vec::with_capacity(n),)*
                }
            }

            /// Append one year.
            pub fn push(&mut self, row: &#row) {
                #(self.#columns.push(row.#columns);)*
            }

            /// Columns for `rows`, in year order.
            pub fn from_rows(rows: &[#row]) -> Self {
                let mut columns = Self::with_capacity(rows.len());
                for row in rows {
                    columns.push(row);
                }
                columns
            }

            /// The row for year index `index`, if stored.
            pub fn get(&self, index: usize) -> Option<#row> {
                if index >= self.len() {
                    return None;
                }
                Some(#row {
                    #(#columns: self.#columns[index],)*
                })
            }

            /// Number of years stored.
            pub fn len(&self) -> usize {
                self.#first.len()
            }

            pub fn is_empty(&self) -> bool {
                self.#first.is_empty()
            }
        }

        impl #row {
            /// Column labels, in declaration order.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#labels),*]
            }
        }
    })
}

/// Field identifiers of a projection row; each must be a plain `f64`.
fn row_columns(input: &DeriveInput) -> syn::Result<Vec<&Ident>> {
    let row = &input.ident;
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            row,
            "Series rows must be structs, one field per projected quantity",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            row,
            "Series rows need named fields to label their columns",
        ));
    };

    let mut columns = Vec::with_capacity(named.named.len());
    for field in &named.named {
        if !is_f64(&field.ty) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "Series columns hold f64 values; change this field to f64",
            ));
        }
        if let Some(ident) = &field.ident {
            columns.push(ident);
        }
    }
    if columns.is_empty() {
        return Err(syn::Error::new_spanned(
            row,
            "a Series row needs at least one projected quantity",
        ));
    }
    Ok(columns)
}

/// Name given by `#[series(name = "...")]`, if any.
fn columns_name(input: &DeriveInput) -> syn::Result<Option<Ident>> {
    let mut name = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("series")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                name = Some(Ident::new(&lit.value(), lit.span()));
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"`"))
            }
        })?;
    }
    Ok(name)
}

fn is_f64(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Path(p) if p.qself.is_none() && p.path.is_ident("f64"))
}
