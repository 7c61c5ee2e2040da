mod bch;
mod block;
mod galois;
mod poly;
mod reed_solomon;
mod terms;

pub use bch::*;
pub use block::*;
pub use galois::*;
pub use poly::*;
pub use reed_solomon::*;
pub use terms::*;
