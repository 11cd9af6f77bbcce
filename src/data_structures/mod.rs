pub mod candidate_pool;
pub mod priority_queue;

pub use candidate_pool::CandidatePool;
pub use priority_queue::Frontier;
