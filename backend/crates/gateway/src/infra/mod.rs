//! Infrastructure Layer
//!
//! Provider implementations.

pub mod supabase;

pub use supabase::{SupabaseConfig, SupabaseProvider};
