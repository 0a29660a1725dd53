pub mod landing;
pub mod model;
