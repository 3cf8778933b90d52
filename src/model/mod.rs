//! Goods and packaging: plain data entities and their creation payloads.

pub mod fields;
pub mod goods;
pub mod milk;
pub mod pack;
pub mod packed_milk;
pub mod product;

pub use goods::*;
pub use milk::*;
pub use pack::*;
pub use packed_milk::*;
pub use product::*;
