pub mod record;

pub use record::InvocationRecord;
