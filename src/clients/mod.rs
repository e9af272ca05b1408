pub mod reddit_client;

pub use reddit_client::{PollPublisher, PollRequest, RedditClient, SubmittedPost};
