//! Post Repository Implementations

mod mongo;

pub use mongo::MongoPostRepository;
