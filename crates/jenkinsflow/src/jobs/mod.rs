pub mod model;
pub mod normalize;
pub mod repo;

pub use model::{JobStatus, NormalizedJob, StoredJob};
pub use normalize::{color_to_status, normalize, NormalizedBatch};
pub use repo::JobsRepo;
