pub mod band;
pub mod rating;
pub mod session;

pub use band::InterpretationBand;
pub use rating::{Rating, RatingError};
pub use session::{EvaluationSession, SessionError};
