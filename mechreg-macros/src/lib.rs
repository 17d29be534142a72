use proc_macro::TokenStream;

mod mechanism;

/// Submit a registration function to the global mechanism collection.
///
/// The function is kept as written and a `CollectedMechanism` pointing at it
/// is submitted through `inventory`, so `collect_mechanisms()` picks it up
/// without the host naming it.
///
/// # Arguments
///
/// - `source = "..."`: label shown in the banner (defaults to the function name)
/// - `order = N`: sort key, lower runs first (defaults to `0`)
///
/// # Example
///
/// ```rust,ignore
/// #[mechreg::mechanism(source = "mechanisms/kv.mod", order = 0)]
/// fn kv_reg() {
///     // install the potassium channel into the host table
/// }
/// ```
#[proc_macro_attribute]
pub fn mechanism(attr: TokenStream, item: TokenStream) -> TokenStream {
    mechanism::mechanism_impl(attr, item)
}
