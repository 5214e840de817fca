pub mod navbar;

// Re-export commonly used types
pub use navbar::Navbar;
