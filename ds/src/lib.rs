#[doc(inline)]
pub use singly_linked_list::{self, *};
