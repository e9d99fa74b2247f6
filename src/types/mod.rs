pub mod identifiers;
pub mod level;
pub mod question;
pub mod session;

pub use identifiers::QuestionId;
pub use level::{Flag, FlagThresholds, Level};
pub use question::Question;
pub use session::{AnsweredItem, SessionAdaptiveState};
