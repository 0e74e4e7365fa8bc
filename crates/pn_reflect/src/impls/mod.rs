//! [`Reflect`](crate::Reflect) and [`FromValue`](crate::FromValue) for
//! foreign types.
//!
//! - scalars: `bool` `char` `()` `String` `&'static str` `f32` `f64`,
//!   `i8 - i64` `isize` `u8 - u64` `usize`
//! - containers: `Option<T>` `Vec<T>` `BTreeMap<String, T>`
//!   `IndexMap<String, T>` and [`Value`](crate::Value) itself
//! - pointers: `Box<T>` `Rc<T>` `Arc<T>` `RefCell<T>` and the `Weak` of
//!   `Rc` and `Arc`
//!
//! Pointers are transparent: they reflect as their pointee, so an object
//! shared through several `Rc`s keeps one identity.
//!
//! `&'static str` and `Weak` are read-only: the first has no owner to
//! build into and the second can only be rebuilt empty from `null`.

// -----------------------------------------------------------------------------
// Modules

mod containers;
mod pointer;
mod scalar;
