use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, Expr, ExprLit, ItemFn, Lit, Meta,
    punctuated::Punctuated, Token,
};

/// Procedural macro to define bridge actions with minimal boilerplate.
///
/// Usage:
/// ```
/// #[action(name = "get_account")]
/// async fn handle_get_account(ctx: &CapabilityContext, params: Value) -> ActionResult<Value> {
///     // implementation
/// }
/// ```
///
/// This generates a struct implementing the ActionHandler trait.
#[proc_macro_attribute]
pub fn action(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args with Punctuated::<Meta, Token![,]>::parse_terminated);
    let input_fn = parse_macro_input!(input as ItemFn);

    // Extract the action name from attributes
    let mut action_name: Option<String> = None;

    for meta in args {
        if let Meta::NameValue(nv) = meta {
            if nv.path.is_ident("name") {
                if let Expr::Lit(ExprLit { lit: Lit::Str(lit_str), .. }) = nv.value {
                    action_name = Some(lit_str.value());
                }
            }
        }
    }

    let action_name = action_name.expect("action macro requires 'name' attribute");

    // Derive struct name from the action name
    // "get_account" -> "GetAccountAction"
    let struct_name = derive_struct_name(&action_name);

    // Get the handler function name
    let fn_name = &input_fn.sig.ident;

    // Generate the code
    let expanded = quote! {
        // Generate the action struct
        pub struct #struct_name;

        // Implement the ActionHandler trait
        #[async_trait::async_trait]
        impl crate::actions::core::ActionHandler for #struct_name {
            fn name(&self) -> &str {
                #action_name
            }

            async fn handle(
                &self,
                ctx: &crate::actions::core::CapabilityContext,
                params: serde_json::Value,
            ) -> crate::actions::core::ActionResult<serde_json::Value> {
                #fn_name(ctx, params).await
            }
        }

        // Keep the original function
        #input_fn
    };

    TokenStream::from(expanded)
}

/// Derive a struct name from an action name.
///
/// Examples:
/// - "get_account" -> "GetAccountAction"
/// - "send_calls" -> "SendCallsAction"
/// - "wait_for_calls_status" -> "WaitForCallsStatusAction"
fn derive_struct_name(action_name: &str) -> proc_macro2::Ident {
    let parts: Vec<&str> = action_name.split(['_', '.']).collect();

    let name = parts
        .iter()
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first_char) => {
                    let mut capitalized = first_char.to_uppercase().to_string();
                    capitalized.push_str(chars.as_str());
                    capitalized
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("");

    format_ident!("{}Action", name)
}
