use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Fields, parse_macro_input};

/// 提取doc注释，每行去掉`///`之后的首个空格。
fn extract_doc(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(s), .. }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_owned).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 变体名转为命令名：`StdIn` -> `std-in`。
fn cmd_name(variant: &str) -> String {
    let mut name = String::with_capacity(variant.len() + 4);
    for (i, c) in variant.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                name.push('-');
            }
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "CmdHelp can only be derived on enums").to_compile_error().into();
    };

    let help_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let doc = extract_doc(&v.attrs);
        let pattern = match &v.fields {
            Fields::Unit => quote! { Self::#variant_name },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
            Fields::Named(_) => quote! { Self::#variant_name { .. } },
        };
        quote! { #pattern => #doc, }
    });

    // 命令名取doc首行中连续两个空格之前的部分，没有doc时由变体名推导
    let entries = variants.iter().map(|v| {
        let doc = extract_doc(&v.attrs);
        let name = doc
            .lines()
            .next()
            .and_then(|line| line.split("  ").next())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| cmd_name(&v.ident.to_string()));
        quote! { (#name, #doc) }
    });

    let expanded = quote! {
        impl #enum_name {
            /// 当前命令的帮助信息。
            #[allow(dead_code)]
            pub fn help(&self) -> &'static str {
                match self {
                    #(#help_arms)*
                }
            }

            /// 全部命令的帮助信息：[(name, help), ...]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[#(#entries),*]
            }

            /// 按命令名查找帮助信息，忽略大小写。
            #[allow(dead_code)]
            pub fn find_help(name: &str) -> Option<&'static str> {
                Self::all_help().iter().find(|(cmd, _)| cmd.eq_ignore_ascii_case(name)).map(|(_, help)| *help)
            }
        }
    };

    TokenStream::from(expanded)
}
