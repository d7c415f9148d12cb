mod container;
mod item;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use item::MIN_SIDE_SIZE;
