pub mod email;
pub mod posting;
