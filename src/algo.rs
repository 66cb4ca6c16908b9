pub mod connectivity;

#[doc(inline)]
pub use connectivity::Components;
