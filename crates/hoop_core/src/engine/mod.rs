//! Feedback engine

pub mod feedback;

pub use feedback::{
    check_win, compare, compare_with, Direction, FeedbackConfig, GuessFeedback,
    DEFAULT_WEIGHT_TOLERANCE_LBS,
};
