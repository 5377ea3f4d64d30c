// Thu Jan 15 2026 - Alex

pub mod error;
pub mod mapper;
pub mod struct_view;
pub mod traits;

pub use error::ViewError;
pub use mapper::StructMapper;
pub use struct_view::StructView;
pub use traits::{CopyFrom, HasView};
