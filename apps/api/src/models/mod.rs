pub mod posting;
pub mod source;
