mod client;
mod supabase_storage;

pub use client::SupabaseClient;
pub use supabase_storage::SupabaseStorage;
