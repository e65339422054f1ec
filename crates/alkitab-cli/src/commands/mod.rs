pub mod books;
pub mod normalize;
pub mod seed;
