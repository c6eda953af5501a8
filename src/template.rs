mod notice;
mod page;
mod pokemon;

pub use notice::*;
pub use page::*;
pub use pokemon::*;
