pub mod extract;
pub mod multipart;
