// Adapters layer: concrete implementations of the domain ports.

pub mod json_file;
pub mod row;
pub mod storage;
pub mod supabase;

pub use json_file::JsonFileCatalog;
pub use storage::LocalStorage;
pub use supabase::SupabaseCatalog;
