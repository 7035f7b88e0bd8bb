pub mod details;
pub mod render;
pub mod resolve;

pub use details::{ApiDetails, ParameterDetails, RequestBodyDetails};
pub use render::render_lookup;
pub use resolve::{Lookup, find_operation_details};
